//! Error types for the ImgBB client.

use thiserror::Error;

/// Result type for ImgBB client operations.
pub type Result<T> = std::result::Result<T, ImgbbError>;

/// ImgBB client errors.
#[derive(Debug, Error)]
pub enum ImgbbError {
    /// Non-2xx HTTP response from the hosting API.
    #[error("ImgBB API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Connection, timeout, or other transport failure.
    #[error("request to ImgBB failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("failed to decode ImgBB response: {0}")]
    Decode(#[from] serde_json::Error),
}
