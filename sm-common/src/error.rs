//! Common error types for Session Master

use thiserror::Error;

/// Common result type for Session Master operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Session Master modules
#[derive(Error, Debug)]
pub enum Error {
    /// Outbound HTTP request failed (network, timeout, non-success status)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model invocation failed or returned a malformed payload
    #[error("Model invocation error: {0}")]
    ModelInvocation(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
