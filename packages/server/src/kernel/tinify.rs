use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use tinify_client::TinifyClient;

use super::BaseImageCompressor;

/// Tinify implementation of BaseImageCompressor
pub struct TinifyCompressor {
    client: TinifyClient,
}

impl TinifyCompressor {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: TinifyClient::new(api_key),
        }
    }
}

#[async_trait]
impl BaseImageCompressor for TinifyCompressor {
    async fn compress(&self, source_url: &str) -> Result<Bytes> {
        self.client
            .compress_from_url(source_url)
            .await
            .with_context(|| format!("Tinify compression failed for {source_url}"))
    }
}
