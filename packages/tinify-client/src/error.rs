//! Error types for the Tinify client.

use thiserror::Error;

/// Result type for Tinify client operations.
pub type Result<T> = std::result::Result<T, TinifyError>;

/// Tinify client errors.
#[derive(Debug, Error)]
pub enum TinifyError {
    /// Non-2xx HTTP response from the compression API.
    #[error("Tinify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Connection, timeout, or other transport failure.
    #[error("request to Tinify failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The shrink response carried no `Location` header for the output.
    #[error("Tinify response missing compressed output location")]
    MissingLocation,
}
