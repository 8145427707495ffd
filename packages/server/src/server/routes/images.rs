use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::images::{AssetRecord, PipelineError, PipelineOutcome};
use crate::server::app::AppState;

/// Page size the catalog is queried with when the caller does not say.
const DEFAULT_BATCH_SIZE: u32 = 27;

#[derive(Debug, Deserialize)]
pub struct BatchParams {
    pub limit: Option<u32>,
}

/// Error payload for a run aborted by a fail-fast stage.
#[derive(Debug, Serialize)]
pub struct StageErrorResponse {
    pub stage: &'static str,
    pub error: String,
}

fn stage_error(e: PipelineError) -> (StatusCode, Json<StageErrorResponse>) {
    tracing::error!(stage = e.stage(), error = %e, "Image refresh aborted");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(StageErrorResponse {
            stage: e.stage(),
            error: e.to_string(),
        }),
    )
}

/// Run the full refresh pipeline over one batch.
///
/// Returns the per-asset update outcomes, or the stage-tagged error when a
/// fail-fast stage aborted the batch.
pub async fn refresh_images_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<BatchParams>,
) -> Result<Json<PipelineOutcome>, (StatusCode, Json<StageErrorResponse>)> {
    let limit = params.limit.unwrap_or(DEFAULT_BATCH_SIZE);

    state
        .pipeline
        .run(limit)
        .await
        .map(Json)
        .map_err(stage_error)
}

/// List the current image assets without touching them.
pub async fn list_images_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<BatchParams>,
) -> Result<Json<Vec<AssetRecord>>, (StatusCode, Json<StageErrorResponse>)> {
    let limit = params.limit.unwrap_or(DEFAULT_BATCH_SIZE);

    state
        .pipeline
        .list_assets(limit)
        .await
        .map(Json)
        .map_err(stage_error)
}
