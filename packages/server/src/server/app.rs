//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::images::ImageRefreshPipeline;
use crate::kernel::{ImgbbHost, ShopifyCatalog, TinifyCompressor};
use crate::server::routes::{health_handler, list_images_handler, refresh_images_handler};

/// The pipeline wired to the live service clients.
pub type LivePipeline = ImageRefreshPipeline<ShopifyCatalog, TinifyCompressor, ImgbbHost>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<LivePipeline>,
}

/// Build the Axum application router
///
/// Service clients are constructed once from the configuration and shared
/// through [`AppState`]; handlers never touch the environment.
pub fn build_app(config: &Config) -> Router {
    let catalog = ShopifyCatalog::new(&config.store_url, &config.shopify_access_token);
    let compressor = TinifyCompressor::new(&config.tinify_api_key);
    let host = ImgbbHost::new(&config.imgbb_api_key, config.imgbb_expiration);

    let pipeline = Arc::new(ImageRefreshPipeline::new(
        catalog,
        compressor,
        host,
        config.images_dir.clone(),
    ));

    let app_state = AppState { pipeline };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/refresh-images", get(refresh_images_handler))
        .route("/product-images", get(list_images_handler))
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
