//! Inspector error types

use motif_animation::MotifError;
use thiserror::Error;

/// Rejected edits. The form is left unchanged when one of these is returned.
#[derive(Error, Debug)]
pub enum InspectorError {
    /// Duration text is not a number
    #[error("Invalid duration: {0:?}")]
    InvalidDuration(String),

    /// Named ease lookup failed
    #[error(transparent)]
    Ease(#[from] MotifError),

    /// Curve key index does not exist
    #[error("Curve key {index} out of range ({len} keys)")]
    KeyIndex { index: usize, len: usize },
}

/// Result type for inspector edits
pub type Result<T> = std::result::Result<T, InspectorError>;
