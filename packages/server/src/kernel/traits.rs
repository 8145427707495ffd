// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no pipeline logic. The refresh
// pipeline is generic over them so tests can swap in recording mocks.
//
// Naming convention: Base* for trait names (e.g., BaseCatalog)

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

use crate::domains::images::AssetRecord;

// =============================================================================
// Catalog Trait (Infrastructure - asset listing and mutation)
// =============================================================================

#[async_trait]
pub trait BaseCatalog: Send + Sync {
    /// List up to `limit` image file records.
    ///
    /// `Ok(None)` means the response decoded but lacked the files collection;
    /// the caller owns the empty-batch-with-diagnostic semantics for that
    /// case. Transport and decode failures are `Err`.
    async fn list_image_files(&self, limit: u32) -> Result<Option<Vec<AssetRecord>>>;

    /// Point the asset's canonical source at `original_source`.
    async fn update_file_source(&self, id: &str, original_source: &str) -> Result<()>;
}

// =============================================================================
// Compressor Trait (Infrastructure - remote image compression)
// =============================================================================

#[async_trait]
pub trait BaseImageCompressor: Send + Sync {
    /// Compress the image at `source_url` and return the compressed bytes.
    async fn compress(&self, source_url: &str) -> Result<Bytes>;
}

// =============================================================================
// Image Host Trait (Infrastructure - public hosting)
// =============================================================================

#[async_trait]
pub trait BaseImageHost: Send + Sync {
    /// Upload a base64-encoded image and return its durable public URL.
    async fn upload(&self, image_base64: String) -> Result<String>;
}
