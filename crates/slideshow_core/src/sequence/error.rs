//! Error types for sequence resolution.
//!
//! Missing folders and empty matches are not errors: the resolver returns an
//! empty file list and the caller decides whether the clip can be created.

use thiserror::Error;

/// Result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors raised while interpreting a user supplied sequence pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The file name has no extension separator, or the index does not fit.
    #[error("Invalid sequence pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The file name does not end with a run of digits.
    #[error("Sequence pattern '{pattern}' has no numeric suffix")]
    NoNumericSuffix { pattern: String },
}

impl SequenceError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing numeric suffix error.
    pub fn no_numeric_suffix(pattern: impl Into<String>) -> Self {
        Self::NoNumericSuffix {
            pattern: pattern.into(),
        }
    }
}
