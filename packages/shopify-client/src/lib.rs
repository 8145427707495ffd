//! Shopify Admin GraphQL API client.
//!
//! A minimal client for the two Admin API operations this service needs:
//! listing `MediaImage` file nodes and reassigning a file's original source.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::ShopifyClient;
//!
//! let client = ShopifyClient::new("my-shop.myshopify.com", token);
//!
//! let data = client.files_query(27).await?;
//! client.file_update("gid://shopify/MediaImage/123", "https://cdn.example/new.jpg").await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, ShopifyError};
pub use types::{
    FileUpdateInput, FileUpdatePayload, FilesQueryData, ImageInfo, MediaImageNode, UserError,
};

use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use types::{FileUpdateData, GraphQlResponse};

const API_VERSION: &str = "2023-10";
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Total-request timeout. A hung Admin API call must not stall a batch forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const FILES_QUERY: &str = r#"
query listImageFiles($first: Int!) {
  files(first: $first) {
    edges {
      node {
        ... on MediaImage {
          id
          image {
            url
            width
            height
          }
        }
      }
    }
  }
}"#;

const FILE_UPDATE_MUTATION: &str = r#"
mutation fileUpdate($input: [FileUpdateInput!]!) {
  fileUpdate(files: $input) {
    files {
      ... on MediaImage {
        id
        image {
          url
        }
      }
    }
    userErrors {
      field
      message
    }
  }
}"#;

pub struct ShopifyClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl ShopifyClient {
    /// Create a client for `store_domain` (e.g. `my-shop.myshopify.com`).
    pub fn new(store_domain: impl AsRef<str>, access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("HTTP client with static configuration should build"),
            endpoint: format!(
                "https://{}/admin/api/{}/graphql.json",
                store_domain.as_ref(),
                API_VERSION
            ),
            access_token: access_token.into(),
        }
    }

    /// Fetch up to `first` file nodes projected through the `MediaImage`
    /// inline fragment.
    ///
    /// Returns `Ok(None)` when the response decoded but carried no `data`
    /// object; callers decide how to treat the missing collection.
    pub async fn files_query(&self, first: u32) -> Result<Option<FilesQueryData>> {
        let body = json!({
            "query": FILES_QUERY,
            "variables": { "first": first },
        });
        self.execute::<FilesQueryData>(&body).await
    }

    /// Point the canonical source of the file identified by `id` at
    /// `original_source`. Field-level user errors fail the call.
    pub async fn file_update(&self, id: &str, original_source: &str) -> Result<FileUpdatePayload> {
        let input = FileUpdateInput {
            id: id.to_string(),
            original_source: original_source.to_string(),
        };
        let body = json!({
            "query": FILE_UPDATE_MUTATION,
            "variables": { "input": [input] },
        });

        let payload = self
            .execute::<FileUpdateData>(&body)
            .await?
            .and_then(|data| data.file_update)
            .ok_or_else(|| ShopifyError::GraphQl(vec!["fileUpdate payload missing".to_string()]))?;

        if !payload.user_errors.is_empty() {
            return Err(ShopifyError::UserErrors(
                payload
                    .user_errors
                    .iter()
                    .map(|e| e.message.clone())
                    .collect(),
            ));
        }

        tracing::debug!(file_id = id, "Shopify file source updated");
        Ok(payload)
    }

    /// POST a GraphQL document and decode the typed `data` payload.
    async fn execute<T: DeserializeOwned>(&self, body: &serde_json::Value) -> Result<Option<T>> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed: GraphQlResponse<T> = serde_json::from_str(&text)?;

        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                return Err(ShopifyError::GraphQl(
                    errors.into_iter().map(|e| e.message).collect(),
                ));
            }
        }

        Ok(parsed.data)
    }
}
