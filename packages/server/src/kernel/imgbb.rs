use anyhow::{Context, Result};
use async_trait::async_trait;
use imgbb_client::ImgbbClient;

use super::BaseImageHost;

/// ImgBB implementation of BaseImageHost
pub struct ImgbbHost {
    client: ImgbbClient,
    expiration: Option<u64>,
}

impl ImgbbHost {
    pub fn new(api_key: &str, expiration: Option<u64>) -> Self {
        Self {
            client: ImgbbClient::new(api_key),
            expiration,
        }
    }
}

#[async_trait]
impl BaseImageHost for ImgbbHost {
    async fn upload(&self, image_base64: String) -> Result<String> {
        let hosted = self
            .client
            .upload(image_base64, self.expiration)
            .await
            .context("ImgBB upload failed")?;
        Ok(hosted.url)
    }
}
