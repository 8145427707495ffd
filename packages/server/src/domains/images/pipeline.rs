//! The four-stage image refresh pipeline.
//!
//! List -> Compress -> Publish -> Update, strictly in input order: each stage
//! consumes the entire output of the previous one before the next begins,
//! one outbound call at a time. Compression and publishing fail fast on the
//! first item error; catalog updates are isolated per item and every outcome
//! is recorded.

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::kernel::{BaseCatalog, BaseImageCompressor, BaseImageHost};

use super::ids::FileIdGenerator;
use super::models::{
    AssetRecord, CompressedAsset, PipelineOutcome, PublishedAsset, UpdateResult,
};

/// Extensions eligible for compression; first substring match wins.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

/// Stage-tagged pipeline failure.
///
/// Only the fail-fast stages appear here; update failures are captured per
/// item inside [`PipelineOutcome`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("catalog listing failed: {0:#}")]
    CatalogQuery(anyhow::Error),

    #[error("compressing asset {asset_id} failed: {cause:#}")]
    Compression {
        asset_id: String,
        cause: anyhow::Error,
    },

    #[error("publishing asset {asset_id} failed: {cause:#}")]
    Publish {
        asset_id: String,
        cause: anyhow::Error,
    },
}

impl PipelineError {
    /// Name of the stage that aborted the run.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::CatalogQuery(_) => "listing",
            PipelineError::Compression { .. } => "compressing",
            PipelineError::Publish { .. } => "publishing",
        }
    }
}

/// Find the first supported extension occurring in `source_url`.
///
/// Substring match, not suffix match: CDN source URLs carry query strings
/// after the extension.
fn supported_extension(source_url: &str) -> Option<&'static str> {
    SUPPORTED_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| source_url.contains(ext))
}

pub struct ImageRefreshPipeline<C, Z, H> {
    catalog: C,
    compressor: Z,
    host: H,
    images_dir: PathBuf,
}

impl<C, Z, H> ImageRefreshPipeline<C, Z, H>
where
    C: BaseCatalog,
    Z: BaseImageCompressor,
    H: BaseImageHost,
{
    pub fn new(catalog: C, compressor: Z, host: H, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            compressor,
            host,
            images_dir: images_dir.into(),
        }
    }

    /// Run one full batch: list, compress, publish, update.
    ///
    /// A fail-fast stage error aborts the run immediately; no later stage is
    /// invoked and no stage is retried.
    pub async fn run(&self, batch_size: u32) -> Result<PipelineOutcome, PipelineError> {
        let records = self.list_assets(batch_size).await?;
        tracing::info!(count = records.len(), "Listed image assets");

        let compressed = self.compress_all(&records).await?;
        tracing::info!(count = compressed.len(), "Compressed assets");

        let published = self.publish_all(&compressed).await?;
        tracing::info!(count = published.len(), "Published assets");

        let outcome = self.update_all(&published).await;
        tracing::info!(
            succeeded = outcome.succeeded(),
            failed = outcome.failed(),
            "Catalog updates finished"
        );
        Ok(outcome)
    }

    /// List up to `limit` image assets from the catalog.
    ///
    /// A response without the files collection is not a failure: the batch
    /// continues with zero assets, the continuation behavior callers have
    /// always relied on. Transport and decode failures abort the run.
    pub async fn list_assets(&self, limit: u32) -> Result<Vec<AssetRecord>, PipelineError> {
        match self.catalog.list_image_files(limit).await {
            Ok(Some(records)) => Ok(records),
            Ok(None) => {
                tracing::error!("Catalog response missing the files collection; treating as empty batch");
                Ok(Vec::new())
            }
            Err(cause) => Err(PipelineError::CatalogQuery(cause)),
        }
    }

    /// Compress every supported asset, in input order.
    ///
    /// Records without a supported extension are dropped silently - expected
    /// filtering, not an error. The first compression or write failure aborts
    /// the whole batch; no partial result escapes.
    pub async fn compress_all(
        &self,
        records: &[AssetRecord],
    ) -> Result<Vec<CompressedAsset>, PipelineError> {
        let mut ids = FileIdGenerator::new();
        let mut compressed = Vec::new();

        for record in records {
            let Some(extension) = supported_extension(&record.source_url) else {
                tracing::debug!(
                    asset_id = %record.id,
                    url = %record.source_url,
                    "Skipping asset without supported extension"
                );
                continue;
            };

            let bytes = self
                .compressor
                .compress(&record.source_url)
                .await
                .map_err(|cause| PipelineError::Compression {
                    asset_id: record.id.clone(),
                    cause,
                })?;

            let local_path = self
                .images_dir
                .join(format!("{}{}", ids.generate(), extension));
            self.persist(&local_path, &bytes)
                .await
                .map_err(|cause| PipelineError::Compression {
                    asset_id: record.id.clone(),
                    cause,
                })?;

            compressed.push(CompressedAsset {
                asset_id: record.id.clone(),
                local_path,
            });
        }

        Ok(compressed)
    }

    async fn persist(&self, path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.images_dir)
            .await
            .with_context(|| format!("creating {}", self.images_dir.display()))?;
        tokio::fs::write(path, bytes)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Publish every compressed file, in input order.
    ///
    /// The first read or upload failure aborts the whole batch, discarding
    /// the uploads already done; callers short-circuit on the error.
    pub async fn publish_all(
        &self,
        compressed: &[CompressedAsset],
    ) -> Result<Vec<PublishedAsset>, PipelineError> {
        let mut published = Vec::new();

        for asset in compressed {
            let bytes = tokio::fs::read(&asset.local_path)
                .await
                .with_context(|| format!("reading {}", asset.local_path.display()))
                .map_err(|cause| PipelineError::Publish {
                    asset_id: asset.asset_id.clone(),
                    cause,
                })?;

            let public_url = self
                .host
                .upload(BASE64.encode(&bytes))
                .await
                .map_err(|cause| PipelineError::Publish {
                    asset_id: asset.asset_id.clone(),
                    cause,
                })?;

            published.push(PublishedAsset {
                asset_id: asset.asset_id.clone(),
                public_url,
            });
        }

        Ok(published)
    }

    /// Update the catalog for every published asset, in input order.
    ///
    /// Isolated per item: each outcome is recorded independently and a
    /// failure never aborts the remaining updates.
    pub async fn update_all(&self, published: &[PublishedAsset]) -> PipelineOutcome {
        let mut results = Vec::with_capacity(published.len());

        for asset in published {
            match self
                .catalog
                .update_file_source(&asset.asset_id, &asset.public_url)
                .await
            {
                Ok(()) => results.push(UpdateResult::success(&asset.asset_id)),
                Err(cause) => {
                    tracing::warn!(
                        asset_id = %asset.asset_id,
                        error = %cause,
                        "Catalog update failed"
                    );
                    results.push(UpdateResult::failure(&asset.asset_id, format!("{cause:#}")));
                }
            }
        }

        PipelineOutcome { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_substring_based() {
        assert_eq!(
            supported_extension("https://cdn.example/photo.jpg?hmac=abc"),
            Some(".jpg")
        );
        assert_eq!(supported_extension("https://cdn.example/p.jpeg"), Some(".jpeg"));
        assert_eq!(supported_extension("https://cdn.example/p.webp"), Some(".webp"));
        assert_eq!(supported_extension("https://cdn.example/p.gif"), None);
    }
}
