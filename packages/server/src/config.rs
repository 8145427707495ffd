use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub shopify_access_token: String,
    pub tinify_api_key: String,
    pub imgbb_api_key: String,
    pub imgbb_expiration: Option<u64>,
    pub images_dir: PathBuf,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            store_url: env::var("STORE_URL").context("STORE_URL must be set")?,
            shopify_access_token: env::var("SHOPIFY_ACCESS_TOKEN")
                .context("SHOPIFY_ACCESS_TOKEN must be set")?,
            tinify_api_key: env::var("TINIFY_API_KEY").context("TINIFY_API_KEY must be set")?,
            imgbb_api_key: env::var("IMGBB_API_KEY").context("IMGBB_API_KEY must be set")?,
            imgbb_expiration: match env::var("IMGBB_EXPIRATION") {
                Ok(raw) => Some(
                    raw.parse()
                        .context("IMGBB_EXPIRATION must be a number of seconds")?,
                ),
                Err(_) => None,
            },
            images_dir: env::var("IMAGES_DIR")
                .unwrap_or_else(|_| "images".to_string())
                .into(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}
