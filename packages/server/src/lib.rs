// Shopify Image Refresh - API Core
//
// Lists MediaImage files from the Shopify catalog, recompresses each through
// Tinify, republishes the compressed bytes to ImgBB, and points the file's
// original source at the new public URL.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
