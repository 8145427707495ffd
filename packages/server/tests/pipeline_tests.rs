//! Integration tests for the image refresh pipeline.
//!
//! Drives the four-stage pipeline against recording mocks:
//! - extension filtering is total and silent
//! - compress and publish fail fast and abort the batch
//! - catalog updates are isolated per item
//! - a listing failure stops the run before any downstream call

use refresh_core::domains::images::{
    AssetRecord, ImageRefreshPipeline, PipelineError, UpdateStatus,
};
use refresh_core::kernel::test_dependencies::{MockCatalog, MockCompressor, MockImageHost};
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

fn gid(n: u64) -> String {
    format!("gid://shopify/MediaImage/{n}")
}

fn record(id: &str, source_url: &str) -> AssetRecord {
    AssetRecord {
        id: id.to_string(),
        source_url: source_url.to_string(),
        width: 700,
        height: 500,
    }
}

struct TestPipeline {
    catalog: MockCatalog,
    compressor: MockCompressor,
    host: MockImageHost,
    pipeline: ImageRefreshPipeline<MockCatalog, MockCompressor, MockImageHost>,
    images_dir: TempDir,
}

/// Wire a pipeline to the given mocks; clones share call logs with the test.
fn build_pipeline(
    catalog: MockCatalog,
    compressor: MockCompressor,
    host: MockImageHost,
) -> TestPipeline {
    let images_dir = TempDir::new().expect("Failed to create scratch images dir");
    let pipeline = ImageRefreshPipeline::new(
        catalog.clone(),
        compressor.clone(),
        host.clone(),
        images_dir.path(),
    );
    TestPipeline {
        catalog,
        compressor,
        host,
        pipeline,
        images_dir,
    }
}

// =============================================================================
// Extension Filtering
// =============================================================================

#[tokio::test]
async fn unsupported_extensions_are_dropped_end_to_end() {
    let records = vec![
        record(&gid(1), "https://cdn.example/a.jpg?hmac=1"),
        record(&gid(2), "https://cdn.example/b.gif"),
        record(&gid(3), "https://cdn.example/c.png"),
    ];
    let t = build_pipeline(
        MockCatalog::new().with_records(records),
        MockCompressor::new(),
        MockImageHost::new(),
    );

    let outcome = t.pipeline.run(27).await.expect("run should succeed");

    // The .gif record never reaches any downstream stage.
    assert_eq!(
        t.compressor.compress_calls(),
        vec![
            "https://cdn.example/a.jpg?hmac=1".to_string(),
            "https://cdn.example/c.png".to_string(),
        ]
    );
    assert_eq!(t.host.upload_calls().len(), 2);
    assert_eq!(outcome.results.len(), 2);
    assert!(outcome.results.iter().all(|r| r.is_success()));
    assert_eq!(outcome.succeeded(), 2);

    // The catalog was pointed at exactly the URLs the host returned, in order.
    let update_calls = t.catalog.update_calls();
    assert_eq!(update_calls.len(), 2);
    assert_eq!(update_calls[0].0, gid(1));
    assert_eq!(update_calls[1].0, gid(3));
    let returned: Vec<String> = t.host.returned_urls();
    assert_eq!(update_calls[0].1, returned[0]);
    assert_eq!(update_calls[1].1, returned[1]);
}

#[tokio::test]
async fn compressed_files_use_generated_names_and_keep_the_extension() {
    let records = vec![
        record(&gid(1), "https://cdn.example/a.png"),
        record(&gid(2), "https://cdn.example/b.jpg?size=700"),
    ];
    let t = build_pipeline(
        MockCatalog::new(),
        MockCompressor::new(),
        MockImageHost::new(),
    );

    let compressed = t
        .pipeline
        .compress_all(&records)
        .await
        .expect("compression should succeed");

    assert_eq!(compressed.len(), 2);
    for (asset, extension) in compressed.iter().zip([".png", ".jpg"]) {
        let name = asset
            .local_path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("compressed file has a name");
        let stem = name.strip_suffix(extension).expect("extension preserved");
        assert_eq!(stem.len(), 10);
        assert!(stem.chars().all(|c| c.is_ascii_digit()));
        assert!(asset.local_path.starts_with(t.images_dir.path()));

        let contents = std::fs::read(&asset.local_path).expect("compressed file written");
        assert!(contents.starts_with(b"compressed:"));
    }
}

// =============================================================================
// Fail-Fast Stages
// =============================================================================

#[tokio::test]
async fn compression_failure_aborts_the_whole_batch() {
    let records = vec![
        record(&gid(1), "https://cdn.example/a.jpg"),
        record(&gid(2), "https://cdn.example/b.jpg"),
        record(&gid(3), "https://cdn.example/c.jpg"),
    ];
    let t = build_pipeline(
        MockCatalog::new().with_records(records),
        MockCompressor::new().with_failure_for("https://cdn.example/b.jpg"),
        MockImageHost::new(),
    );

    let err = t.pipeline.run(27).await.expect_err("run should abort");

    assert_eq!(err.stage(), "compressing");
    match err {
        PipelineError::Compression { asset_id, .. } => assert_eq!(asset_id, gid(2)),
        other => panic!("expected compression error, got {other:?}"),
    }

    // Item 1 compressed before the abort, but nothing was forwarded: no
    // upload and no catalog update happened.
    assert_eq!(t.compressor.compress_calls().len(), 2);
    assert!(t.host.upload_calls().is_empty());
    assert!(t.catalog.update_calls().is_empty());
}

#[tokio::test]
async fn publish_failure_aborts_before_any_catalog_update() {
    let records = vec![
        record(&gid(1), "https://cdn.example/a.jpg"),
        record(&gid(2), "https://cdn.example/b.jpg"),
    ];
    let t = build_pipeline(
        MockCatalog::new().with_records(records),
        MockCompressor::new(),
        MockImageHost::new().with_failure_on_call(2),
    );

    let err = t.pipeline.run(27).await.expect_err("run should abort");

    assert_eq!(err.stage(), "publishing");
    match err {
        PipelineError::Publish { asset_id, .. } => assert_eq!(asset_id, gid(2)),
        other => panic!("expected publish error, got {other:?}"),
    }
    assert_eq!(t.host.upload_calls().len(), 2);
    assert!(t.catalog.update_calls().is_empty());
}

#[tokio::test]
async fn listing_transport_failure_stops_the_run_before_any_stage() {
    let t = build_pipeline(
        MockCatalog::new().with_transport_error("GraphQL request failed with status 500"),
        MockCompressor::new(),
        MockImageHost::new(),
    );

    let err = t.pipeline.run(27).await.expect_err("run should abort");

    assert_eq!(err.stage(), "listing");
    assert!(matches!(err, PipelineError::CatalogQuery(_)));
    assert!(t.compressor.compress_calls().is_empty());
    assert!(t.host.upload_calls().is_empty());
    assert!(t.catalog.update_calls().is_empty());
}

#[tokio::test]
async fn missing_files_collection_is_an_empty_batch_not_an_error() {
    let t = build_pipeline(
        MockCatalog::new().with_missing_collection(),
        MockCompressor::new(),
        MockImageHost::new(),
    );

    let outcome = t.pipeline.run(27).await.expect("run should succeed");

    assert!(outcome.results.is_empty());
    assert_eq!(t.catalog.list_calls(), vec![27]);
    assert!(t.compressor.compress_calls().is_empty());
    assert!(t.host.upload_calls().is_empty());
    assert!(t.catalog.update_calls().is_empty());
}

// =============================================================================
// Isolated Update Stage
// =============================================================================

#[tokio::test]
async fn update_failures_are_isolated_per_item() {
    let records = vec![
        record(&gid(1), "https://cdn.example/a.jpg"),
        record(&gid(2), "https://cdn.example/b.jpg"),
        record(&gid(3), "https://cdn.example/c.jpg"),
    ];
    let t = build_pipeline(
        MockCatalog::new()
            .with_records(records)
            .with_failing_update(&gid(2)),
        MockCompressor::new(),
        MockImageHost::new(),
    );

    let outcome = t.pipeline.run(27).await.expect("run should succeed");

    // Every item got its own result, in input order; the failure did not
    // stop the items after it.
    assert_eq!(outcome.results.len(), 3);
    assert_eq!(outcome.results[0].asset_id, gid(1));
    assert_eq!(outcome.results[1].asset_id, gid(2));
    assert_eq!(outcome.results[2].asset_id, gid(3));

    assert_eq!(outcome.results[0].status, UpdateStatus::Success);
    assert_eq!(outcome.results[1].status, UpdateStatus::Failure);
    assert!(outcome.results[1].detail.is_some());
    assert_eq!(outcome.results[2].status, UpdateStatus::Success);

    assert_eq!(outcome.succeeded(), 2);
    assert_eq!(outcome.failed(), 1);
    assert_eq!(t.catalog.update_calls().len(), 3);
}

// =============================================================================
// Identity
// =============================================================================

#[tokio::test]
async fn every_result_carries_an_id_the_catalog_issued() {
    let listed = vec![
        record(&gid(10), "https://cdn.example/a.jpg"),
        record(&gid(11), "https://cdn.example/b.webp"),
        record(&gid(12), "https://cdn.example/c.svg"),
    ];
    let listed_ids: Vec<String> = listed.iter().map(|r| r.id.clone()).collect();
    let t = build_pipeline(
        MockCatalog::new().with_records(listed),
        MockCompressor::new(),
        MockImageHost::new(),
    );

    let outcome = t.pipeline.run(27).await.expect("run should succeed");

    assert_eq!(outcome.results.len(), 2);
    for result in &outcome.results {
        assert!(
            listed_ids.contains(&result.asset_id),
            "{} was never issued by the catalog",
            result.asset_id
        );
    }
}
