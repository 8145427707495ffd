use anyhow::{Context, Result};
use async_trait::async_trait;
use shopify_client::ShopifyClient;

use super::BaseCatalog;
use crate::domains::images::AssetRecord;

/// Shopify Admin API implementation of BaseCatalog
pub struct ShopifyCatalog {
    client: ShopifyClient,
}

impl ShopifyCatalog {
    pub fn new(store_domain: &str, access_token: &str) -> Self {
        Self {
            client: ShopifyClient::new(store_domain, access_token),
        }
    }
}

#[async_trait]
impl BaseCatalog for ShopifyCatalog {
    async fn list_image_files(&self, limit: u32) -> Result<Option<Vec<AssetRecord>>> {
        let data = self
            .client
            .files_query(limit)
            .await
            .context("Shopify files query failed")?;

        let Some(connection) = data.and_then(|d| d.files) else {
            return Ok(None);
        };

        // Non-MediaImage nodes project to empty objects through the inline
        // fragment; drop anything without an id and a source URL.
        let records = connection
            .edges
            .into_iter()
            .filter_map(|edge| {
                let node = edge.node;
                let id = node.id?;
                let image = node.image?;
                let source_url = image.url?;
                Some(AssetRecord {
                    id,
                    source_url,
                    width: image.width.unwrap_or(0),
                    height: image.height.unwrap_or(0),
                })
            })
            .collect();

        Ok(Some(records))
    }

    async fn update_file_source(&self, id: &str, original_source: &str) -> Result<()> {
        self.client
            .file_update(id, original_source)
            .await
            .with_context(|| format!("Shopify fileUpdate failed for {id}"))?;
        Ok(())
    }
}
