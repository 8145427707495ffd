//! Kernel module - service infrastructure and dependencies.

pub mod imgbb;
pub mod shopify;
pub mod test_dependencies;
pub mod tinify;
pub mod traits;

pub use imgbb::ImgbbHost;
pub use shopify::ShopifyCatalog;
pub use tinify::TinifyCompressor;
pub use traits::*;
