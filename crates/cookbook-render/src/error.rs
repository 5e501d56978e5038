//! Renderer error types

use thiserror::Error;

/// Result type alias for render operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors raised while rendering artifacts
#[derive(Error, Debug)]
pub enum RenderError {
    /// No renderer registered under the requested name
    #[error("unknown renderer: {0}")]
    UnknownRenderer(String),

    /// I/O error while writing artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
