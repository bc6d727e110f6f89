use thiserror::Error;

/// Errors raised by pattern construction and conversions.
#[derive(Debug, Error)]
pub enum TimeError {
    /// The input does not match the pattern, or names an impossible calendar value.
    #[error("Failed to parse '{input}' with pattern '{pattern}': {reason}")]
    Parse {
        input: String,
        pattern: String,
        reason: String,
    },

    /// The pattern text could not be translated.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The value falls outside the representable date range.
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

impl TimeError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        TimeError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true for [`TimeError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, TimeError::Parse { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimeError>;
