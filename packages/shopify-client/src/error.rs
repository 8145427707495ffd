//! Error types for the Shopify client.

use thiserror::Error;

/// Result type for Shopify client operations.
pub type Result<T> = std::result::Result<T, ShopifyError>;

/// Shopify client errors.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Non-2xx HTTP response from the Admin API.
    #[error("Shopify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Connection, timeout, or other transport failure.
    #[error("request to Shopify failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("failed to decode Shopify response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Top-level `errors` array in the GraphQL response.
    #[error("GraphQL request returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// Field-level user errors in a mutation payload.
    #[error("fileUpdate returned user errors: {}", .0.join("; "))]
    UserErrors(Vec<String>),
}
