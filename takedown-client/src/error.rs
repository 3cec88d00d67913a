//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never completed (connect failure, timeout, body read)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response completed but did not match the expected shape
    #[error("Invalid response: {0}")]
    Protocol(String),

    /// Authentication required (session has been cleared)
    #[error("Authentication required")]
    Unauthorized,

    /// Backend rejected the request with a non-2xx status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
