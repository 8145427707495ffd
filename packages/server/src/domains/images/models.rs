//! Data model for the image refresh pipeline.
//!
//! Every record is batch-scoped: nothing outlives one pipeline invocation
//! except the compressed files left on disk.

use serde::Serialize;
use std::path::PathBuf;

/// An image asset as listed from the catalog.
///
/// `id` is the catalog identifier (a Shopify GID) that threads every later
/// stage; it is never regenerated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    pub source_url: String,
    pub width: i32,
    pub height: i32,
}

/// A compressed asset persisted to local storage.
#[derive(Debug, Clone)]
pub struct CompressedAsset {
    pub asset_id: String,
    pub local_path: PathBuf,
}

/// A compressed asset republished to the public host.
#[derive(Debug, Clone)]
pub struct PublishedAsset {
    pub asset_id: String,
    pub public_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStatus {
    Success,
    Failure,
}

/// Terminal record of the pipeline, one per published asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub asset_id: String,
    pub status: UpdateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl UpdateResult {
    pub fn success(asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            status: UpdateStatus::Success,
            detail: None,
        }
    }

    pub fn failure(asset_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            status: UpdateStatus::Failure,
            detail: Some(detail.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == UpdateStatus::Success
    }
}

/// Ordered aggregate of every update outcome in the batch.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutcome {
    pub results: Vec<UpdateResult>,
}

impl PipelineOutcome {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}
