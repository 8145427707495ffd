//! Tinify (TinyPNG) compression API client.
//!
//! Supports the single flow this service needs: hand the API a source URL,
//! let it compress the image, and download the compressed bytes.
//!
//! # Example
//!
//! ```rust,ignore
//! use tinify_client::TinifyClient;
//!
//! let client = TinifyClient::new(api_key);
//! let compressed = client.compress_from_url("https://cdn.example/photo.jpg").await?;
//! ```

pub mod error;

pub use error::{Result, TinifyError};

use bytes::Bytes;
use serde_json::json;
use std::time::Duration;

const SHRINK_URL: &str = "https://api.tinify.com/shrink";

/// Total-request timeout. A hung compression call must not stall a batch forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct TinifyClient {
    client: reqwest::Client,
    api_key: String,
}

impl TinifyClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("HTTP client with static configuration should build"),
            api_key: api_key.into(),
        }
    }

    /// Compress the image at `source_url` and return the compressed bytes.
    ///
    /// Two-step flow: POST the source URL to `/shrink`, then GET the
    /// compressed output the API addresses via the `Location` header.
    pub async fn compress_from_url(&self, source_url: &str) -> Result<Bytes> {
        let resp = self
            .client
            .post(SHRINK_URL)
            .basic_auth("api", Some(&self.api_key))
            .json(&json!({ "source": { "url": source_url } }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TinifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or(TinifyError::MissingLocation)?;

        tracing::debug!(source_url, output = %location, "Image shrunk, downloading output");
        self.download(&location).await
    }

    async fn download(&self, output_url: &str) -> Result<Bytes> {
        let resp = self
            .client
            .get(output_url)
            .basic_auth("api", Some(&self.api_key))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TinifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.bytes().await?)
    }
}
