pub mod ids;
pub mod models;
pub mod pipeline;

pub use ids::FileIdGenerator;
pub use models::{
    AssetRecord, CompressedAsset, PipelineOutcome, PublishedAsset, UpdateResult, UpdateStatus,
};
pub use pipeline::{ImageRefreshPipeline, PipelineError, SUPPORTED_EXTENSIONS};
