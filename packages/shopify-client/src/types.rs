use serde::{Deserialize, Serialize};

/// Top-level GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single entry of the top-level `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` payload of the files query.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesQueryData {
    pub files: Option<FileConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConnection {
    pub edges: Vec<FileEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileEdge {
    pub node: MediaImageNode,
}

/// A file node projected through the `... on MediaImage` inline fragment.
///
/// Non-image file nodes project to empty objects, so every field is optional
/// and callers filter on `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaImageNode {
    pub id: Option<String>,
    pub image: Option<ImageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    pub url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Input object for the `fileUpdate` mutation.
#[derive(Debug, Clone, Serialize)]
pub struct FileUpdateInput {
    pub id: String,
    #[serde(rename = "originalSource")]
    pub original_source: String,
}

/// `data` payload of the `fileUpdate` mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct FileUpdateData {
    #[serde(rename = "fileUpdate")]
    pub file_update: Option<FileUpdatePayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileUpdatePayload {
    pub files: Option<Vec<MediaImageNode>>,
    #[serde(rename = "userErrors")]
    pub user_errors: Vec<UserError>,
}

/// Field-level user error returned by a mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct UserError {
    pub field: Option<Vec<String>>,
    pub message: String,
}
