//! Card error types.

use thiserror::Error;

/// Errors surfaced by catalog card operations.
///
/// Classification itself never fails; these come from the optional
/// validation and parsing paths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    /// Input that violates a documented precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration value out of range.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CardError {
    /// Check if this error was caused by caller-supplied data.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CardError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for CardError {
    fn from(e: serde_json::Error) -> Self {
        CardError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CardError {
    fn from(e: toml::de::Error) -> Self {
        CardError::Serialization(e.to_string())
    }
}

impl From<chrono::ParseError> for CardError {
    fn from(e: chrono::ParseError) -> Self {
        CardError::InvalidInput(format!("unparsable date: {}", e))
    }
}
