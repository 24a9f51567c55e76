//! Motif CLI - inspect animation parameter libraries
//!
//! - `motif eases`: list named eases
//! - `motif list`: list library entries
//! - `motif check`: lint a library
//! - `motif sample <name>`: print an entry's eased progress over time
//! - `motif init <path>`: write the built-in presets as a TOML library

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Inspect and lint animation parameter libraries
#[derive(Parser, Debug)]
#[command(name = "motif")]
#[command(about = "Inspect and lint animation parameter libraries")]
#[command(version)]
struct Cli {
    /// Parameter library (.toml or .json); built-in presets when omitted
    #[arg(short, long, global = true)]
    library: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every named ease
    Eases,

    /// List library entries
    List,

    /// Report suspicious entries (non-positive durations, degenerate curves)
    Check {
        /// Exit with an error when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Print eased progress over an entry's duration
    Sample {
        /// Library entry name
        name: String,

        /// Number of intervals to sample
        #[arg(short, long, default_value = "10")]
        steps: usize,
    },

    /// Write the built-in presets to a new TOML library
    Init {
        /// Output file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Eases => commands::eases(),
        Command::List => commands::list(cli.library.as_deref()),
        Command::Check { strict } => commands::check(cli.library.as_deref(), strict),
        Command::Sample { name, steps } => commands::sample(cli.library.as_deref(), &name, steps),
        Command::Init { path, force } => commands::init(&path, force),
    }
}
