//! Error types
//!
//! Resolving an ease onto a handle never fails; these only come out of name
//! parsing and parameter library loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the parameter library and name lookups
#[derive(Error, Debug)]
pub enum MotifError {
    /// Ease name did not match any named curve
    #[error("Unknown ease: {0}")]
    UnknownEase(String),

    /// Library has no entry with this name
    #[error("Unknown parameter preset: {0}")]
    UnknownPreset(String),

    /// Library file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Library file extension is not one we can parse
    #[error("Unsupported library format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// TOML library failed to parse
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Library failed to serialize to TOML
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON library failed to parse or serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, MotifError>;
