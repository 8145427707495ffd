//! ImgBB image hosting API client.
//!
//! Uploads base64-encoded image bytes as multipart form content and returns
//! the durable public URL the host assigns.
//!
//! # Example
//!
//! ```rust,ignore
//! use imgbb_client::ImgbbClient;
//!
//! let client = ImgbbClient::new(api_key);
//! let hosted = client.upload(base64_bytes, None).await?;
//! println!("{}", hosted.url);
//! ```

pub mod error;
pub mod types;

pub use error::{ImgbbError, Result};
pub use types::{UploadResponse, UploadedImage};

use reqwest::multipart::Form;
use std::time::Duration;

const UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Total-request timeout. A hung upload must not stall a batch forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct ImgbbClient {
    client: reqwest::Client,
    api_key: String,
}

impl ImgbbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("HTTP client with static configuration should build"),
            api_key: api_key.into(),
        }
    }

    /// Upload a base64-encoded image, optionally expiring after
    /// `expiration` seconds. Returns the hosted image record.
    pub async fn upload(
        &self,
        image_base64: String,
        expiration: Option<u64>,
    ) -> Result<UploadedImage> {
        let mut query: Vec<(&str, String)> = vec![("key", self.api_key.clone())];
        if let Some(seconds) = expiration {
            query.push(("expiration", seconds.to_string()));
        }

        let form = Form::new().text("image", image_base64);

        let resp = self
            .client
            .post(UPLOAD_URL)
            .query(&query)
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ImgbbError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed: UploadResponse = serde_json::from_str(&text)?;

        tracing::debug!(url = %parsed.data.url, "Image uploaded to ImgBB");
        Ok(parsed.data)
    }
}
