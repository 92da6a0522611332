//! Errors raised at the renderer's input and loading boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// Role outside user / assistant / system.
    #[error("unknown message role '{0}' (expected user, assistant or system)")]
    UnknownRole(String),

    /// Message JSON could not be parsed.
    #[error("invalid chat message: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    /// A view primitive module failed to resolve.
    #[error("failed to load view primitives '{module}': {reason}")]
    PrimitiveLoad { module: String, reason: String },
}
