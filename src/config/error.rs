//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Timeout string could not be parsed as a number of seconds.
    #[error("failed to parse judge timeout '{value}': {source}")]
    TimeoutParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Timeout must be positive; zero would make every attempt fail.
    #[error("invalid judge timeout '{value}': must be at least 1 second")]
    InvalidTimeout { value: String },

    /// Model name was set to an empty string.
    #[error("judge model name must not be empty")]
    EmptyModel,
}
