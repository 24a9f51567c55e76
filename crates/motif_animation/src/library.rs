//! Parameter libraries
//!
//! Named [`AnimationParameters`] authored once and looked up by name, stored
//! as TOML or JSON:
//!
//! ```toml
//! [params.pop]
//! duration = 0.25
//! ease = "OutBack"
//!
//! [params.drift]
//! duration = 1.5
//! custom_ease = true
//! curve = [
//!     { time = 0.0, value = 0.0 },
//!     { time = 1.0, value = 1.0, in_tangent = 2.0, out_tangent = 2.0 },
//! ]
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::easing::Ease;
use crate::error::{MotifError, Result};
use crate::params::AnimationParameters;

/// Built-in parameter presets for common motion feels
pub struct ParamsPreset;

impl ParamsPreset {
    /// Short, decisive motion
    pub fn snappy() -> AnimationParameters {
        AnimationParameters::named(Ease::OutQuad, 0.15)
    }

    /// Gentle start and stop
    pub fn smooth() -> AnimationParameters {
        AnimationParameters::named(Ease::InOutSine, 0.3)
    }

    /// Slight overshoot before settling
    pub fn overshoot() -> AnimationParameters {
        AnimationParameters::named(Ease::OutBack, 0.35)
    }

    /// Lands with a few bounces
    pub fn bouncy() -> AnimationParameters {
        AnimationParameters::named(Ease::OutBounce, 0.6)
    }

    /// Springy wobble around the end value
    pub fn elastic() -> AnimationParameters {
        AnimationParameters::named(Ease::OutElastic, 0.8)
    }

    /// Constant velocity
    pub fn linear() -> AnimationParameters {
        AnimationParameters::named(Ease::Linear, 0.25)
    }

    /// Every built-in preset with its library name
    pub fn all() -> [(&'static str, AnimationParameters); 6] {
        [
            ("snappy", Self::snappy()),
            ("smooth", Self::smooth()),
            ("overshoot", Self::overshoot()),
            ("bouncy", Self::bouncy()),
            ("elastic", Self::elastic()),
            ("linear", Self::linear()),
        ]
    }
}

/// A named collection of [`AnimationParameters`], in authoring order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamsLibrary {
    #[serde(default)]
    params: IndexMap<String, AnimationParameters>,
}

impl ParamsLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the [`ParamsPreset`] catalogue
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for (name, params) in ParamsPreset::all() {
            library.insert(name, params);
        }
        library
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let library: Self = toml::from_str(source)?;
        tracing::debug!(entries = library.len(), "loaded parameter library from TOML");
        Ok(library)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let library: Self = serde_json::from_str(source)?;
        tracing::debug!(entries = library.len(), "loaded parameter library from JSON");
        Ok(library)
    }

    /// Load a `.toml` or `.json` library file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| MotifError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&source),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&source),
            _ => Err(MotifError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up parameters by name
    pub fn get(&self, name: &str) -> Result<&AnimationParameters> {
        self.params
            .get(name)
            .ok_or_else(|| MotifError::UnknownPreset(name.to_string()))
    }

    /// Add or replace an entry, returning the previous value
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        params: AnimationParameters,
    ) -> Option<AnimationParameters> {
        self.params.insert(name.into(), params)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnimationParameters)> {
        self.params.iter().map(|(name, params)| (name.as_str(), params))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Report entries the engine is likely to mishandle.
    ///
    /// Nothing here stops such parameters from being used; resolution
    /// forwards them unchanged.
    pub fn lint(&self) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        for (name, params) in self.iter() {
            let mut push = |kind| {
                issues.push(LintIssue {
                    preset: name.to_string(),
                    kind,
                })
            };

            if params.duration() <= 0.0 || !params.duration().is_finite() {
                push(LintKind::NonPositiveDuration(params.duration()));
            }

            if let Some(curve) = params.custom_curve() {
                match curve.len() {
                    0 => push(LintKind::EmptyCurve),
                    1 => push(LintKind::SingleKeyCurve),
                    _ => {}
                }
                for (index, key) in curve.keys().iter().enumerate() {
                    let in_range = |v: f32| (0.0..=1.0).contains(&v);
                    if !in_range(key.time) || !in_range(key.value) {
                        push(LintKind::KeyOutOfRange {
                            index,
                            time: key.time,
                            value: key.value,
                        });
                    }
                }
            }
        }
        issues
    }
}

/// What is suspicious about a library entry
#[derive(Clone, Debug, PartialEq)]
pub enum LintKind {
    NonPositiveDuration(f32),
    EmptyCurve,
    SingleKeyCurve,
    KeyOutOfRange { index: usize, time: f32, value: f32 },
}

/// A lint finding for one library entry
#[derive(Clone, Debug, PartialEq)]
pub struct LintIssue {
    pub preset: String,
    pub kind: LintKind,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LintKind::NonPositiveDuration(duration) => {
                write!(f, "{}: duration {} is not positive", self.preset, duration)
            }
            LintKind::EmptyCurve => write!(f, "{}: custom curve has no keys", self.preset),
            LintKind::SingleKeyCurve => {
                write!(f, "{}: custom curve has a single key and is constant", self.preset)
            }
            LintKind::KeyOutOfRange { index, time, value } => write!(
                f,
                "{}: curve key {} at ({}, {}) is outside [0, 1]",
                self.preset, index, time, value
            ),
        }
    }
}
