//! Subcommand implementations

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use motif_animation::{AnimationParameters, Ease, EaseSource, ParamsLibrary};

/// Width of the progress bar column
const BAR_WIDTH: usize = 40;

/// Load the library at `path`, or the built-in presets
pub fn load_library(path: Option<&Path>) -> Result<ParamsLibrary> {
    match path {
        Some(path) => ParamsLibrary::load(path)
            .with_context(|| format!("Failed to load library {}", path.display())),
        None => {
            tracing::debug!("no library given, using built-in presets");
            Ok(ParamsLibrary::builtin())
        }
    }
}

pub fn eases() -> Result<()> {
    for ease in Ease::ALL {
        println!("{}", ease);
    }
    Ok(())
}

pub fn list(path: Option<&Path>) -> Result<()> {
    let library = load_library(path)?;
    print!("{}", render_list(&library));
    Ok(())
}

pub fn check(path: Option<&Path>, strict: bool) -> Result<()> {
    let library = load_library(path)?;
    let issues = library.lint();

    for issue in &issues {
        tracing::warn!("{}", issue);
    }

    if issues.is_empty() {
        println!("{} entries, no issues", library.len());
    } else {
        println!("{} entries, {} issue(s)", library.len(), issues.len());
        if strict {
            bail!("library has {} issue(s)", issues.len());
        }
    }
    Ok(())
}

pub fn sample(path: Option<&Path>, name: &str, steps: usize) -> Result<()> {
    let library = load_library(path)?;
    let params = library.get(name)?;
    print!("{}", render_samples(params, steps));
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let text = ParamsLibrary::builtin().to_toml_string()?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote built-in presets to {}", path.display());
    Ok(())
}

/// Short description of where an entry's easing comes from
fn describe_source(source: &EaseSource) -> String {
    match source {
        EaseSource::Named(ease) => ease.to_string(),
        EaseSource::Custom(curve) => format!("custom curve ({} keys)", curve.len()),
    }
}

fn render_list(library: &ParamsLibrary) -> String {
    let width = library.names().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (name, params) in library.iter() {
        let _ = writeln!(
            out,
            "{:<width$}  {:>6.3}s  {}",
            name,
            params.duration(),
            describe_source(params.ease()),
            width = width
        );
    }
    out
}

fn render_samples(params: &AnimationParameters, steps: usize) -> String {
    let steps = steps.max(1);
    let mut out = String::new();
    let _ = writeln!(out, "{}, {}s", describe_source(params.ease()), params.duration());

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let progress = params.ease().evaluate(t);
        let filled = (progress.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
        let _ = writeln!(
            out,
            "{:>7.3}s  {:>7.3}  |{}{}|",
            t * params.duration(),
            progress,
            "#".repeat(filled),
            " ".repeat(BAR_WIDTH - filled)
        );
    }
    out
}
