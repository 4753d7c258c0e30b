//! Error types for clip settings.

use thiserror::Error;

/// Result type for clip operations.
pub type ClipResult<T> = Result<T, ClipError>;

/// Errors raised while reading durations or producer properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    /// Frame rate is not a positive finite number.
    #[error("Invalid frame rate: {fps}")]
    InvalidFrameRate { fps: f64 },

    /// Timecode is not `hh:mm:ss:ff`.
    #[error("Invalid timecode '{value}': {reason}")]
    InvalidTimecode { value: String, reason: String },

    /// A producer property holds a value of the wrong type.
    #[error("Invalid value for property '{key}': '{value}'")]
    InvalidProperty { key: String, value: String },
}

impl ClipError {
    /// Create an invalid timecode error.
    pub fn invalid_timecode(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimecode {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
