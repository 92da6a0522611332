//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during logging setup
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Failed to install the global subscriber
    #[error("Failed to initialize logging: {0}")]
    InitFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
