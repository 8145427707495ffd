use serde::Deserialize;

/// Envelope for ImgBB API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub data: UploadedImage,
    pub success: bool,
    pub status: u16,
}

/// The hosted image as returned by the upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    /// Durable public URL of the hosted image.
    pub url: String,
    pub display_url: Option<String>,
    pub delete_url: Option<String>,
    pub size: Option<u64>,
    pub expiration: Option<String>,
}
