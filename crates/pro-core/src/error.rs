//! Error types for PRO core.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// Configuration parsed but is not usable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Parse(err.to_string())
    }
}
