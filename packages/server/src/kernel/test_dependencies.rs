// Mock implementations for testing
//
// Recording mocks for the three service seams. Integration tests assert on
// captured calls and queue per-item failures. All state sits behind Arc so a
// clone handed to the pipeline shares its call log with the test.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::{BaseCatalog, BaseImageCompressor, BaseImageHost};
use crate::domains::images::AssetRecord;

// =============================================================================
// Mock Catalog
// =============================================================================

/// What the mock catalog returns from a list call.
#[derive(Debug, Clone)]
enum ListBehavior {
    Records(Vec<AssetRecord>),
    MissingCollection,
    TransportError(String),
}

#[derive(Clone)]
pub struct MockCatalog {
    list_behavior: Arc<Mutex<ListBehavior>>,
    list_calls: Arc<Mutex<Vec<u32>>>,
    update_calls: Arc<Mutex<Vec<(String, String)>>>,
    failing_update_ids: Arc<Mutex<HashSet<String>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            list_behavior: Arc::new(Mutex::new(ListBehavior::Records(Vec::new()))),
            list_calls: Arc::new(Mutex::new(Vec::new())),
            update_calls: Arc::new(Mutex::new(Vec::new())),
            failing_update_ids: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn with_records(self, records: Vec<AssetRecord>) -> Self {
        *self.list_behavior.lock().unwrap() = ListBehavior::Records(records);
        self
    }

    /// List responses decode but carry no files collection.
    pub fn with_missing_collection(self) -> Self {
        *self.list_behavior.lock().unwrap() = ListBehavior::MissingCollection;
        self
    }

    /// List calls fail at the transport level.
    pub fn with_transport_error(self, message: &str) -> Self {
        *self.list_behavior.lock().unwrap() = ListBehavior::TransportError(message.to_string());
        self
    }

    /// Updates for `id` are rejected; other updates succeed.
    pub fn with_failing_update(self, id: &str) -> Self {
        self.failing_update_ids
            .lock()
            .unwrap()
            .insert(id.to_string());
        self
    }

    /// Limits passed to every list call.
    pub fn list_calls(&self) -> Vec<u32> {
        self.list_calls.lock().unwrap().clone()
    }

    /// `(id, original_source)` pairs of every update call, in order.
    pub fn update_calls(&self) -> Vec<(String, String)> {
        self.update_calls.lock().unwrap().clone()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCatalog for MockCatalog {
    async fn list_image_files(&self, limit: u32) -> Result<Option<Vec<AssetRecord>>> {
        self.list_calls.lock().unwrap().push(limit);

        match self.list_behavior.lock().unwrap().clone() {
            ListBehavior::Records(records) => Ok(Some(records)),
            ListBehavior::MissingCollection => Ok(None),
            ListBehavior::TransportError(message) => Err(anyhow!(message)),
        }
    }

    async fn update_file_source(&self, id: &str, original_source: &str) -> Result<()> {
        self.update_calls
            .lock()
            .unwrap()
            .push((id.to_string(), original_source.to_string()));

        if self.failing_update_ids.lock().unwrap().contains(id) {
            return Err(anyhow!("update rejected for {id}"));
        }
        Ok(())
    }
}

// =============================================================================
// Mock Compressor
// =============================================================================

#[derive(Clone)]
pub struct MockCompressor {
    failing_urls: Arc<Mutex<HashSet<String>>>,
    compress_calls: Arc<Mutex<Vec<String>>>,
}

impl MockCompressor {
    pub fn new() -> Self {
        Self {
            failing_urls: Arc::new(Mutex::new(HashSet::new())),
            compress_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Compression of `source_url` fails; other URLs compress.
    pub fn with_failure_for(self, source_url: &str) -> Self {
        self.failing_urls
            .lock()
            .unwrap()
            .insert(source_url.to_string());
        self
    }

    /// Source URLs of every compress call, in order.
    pub fn compress_calls(&self) -> Vec<String> {
        self.compress_calls.lock().unwrap().clone()
    }
}

impl Default for MockCompressor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseImageCompressor for MockCompressor {
    async fn compress(&self, source_url: &str) -> Result<Bytes> {
        self.compress_calls
            .lock()
            .unwrap()
            .push(source_url.to_string());

        if self.failing_urls.lock().unwrap().contains(source_url) {
            return Err(anyhow!("compression failed for {source_url}"));
        }
        Ok(Bytes::from(format!("compressed:{source_url}")))
    }
}

// =============================================================================
// Mock Image Host
// =============================================================================

#[derive(Clone)]
pub struct MockImageHost {
    fail_on_call: Arc<Mutex<Option<usize>>>,
    upload_calls: Arc<Mutex<Vec<String>>>,
    returned_urls: Arc<Mutex<Vec<String>>>,
}

impl MockImageHost {
    pub fn new() -> Self {
        Self {
            fail_on_call: Arc::new(Mutex::new(None)),
            upload_calls: Arc::new(Mutex::new(Vec::new())),
            returned_urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The nth upload (1-based) fails; earlier and later uploads succeed.
    pub fn with_failure_on_call(self, n: usize) -> Self {
        *self.fail_on_call.lock().unwrap() = Some(n);
        self
    }

    /// Base64 payloads of every upload call, in order.
    pub fn upload_calls(&self) -> Vec<String> {
        self.upload_calls.lock().unwrap().clone()
    }

    /// Public URLs handed back for successful uploads, in order.
    pub fn returned_urls(&self) -> Vec<String> {
        self.returned_urls.lock().unwrap().clone()
    }
}

impl Default for MockImageHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseImageHost for MockImageHost {
    async fn upload(&self, image_base64: String) -> Result<String> {
        let call_number = {
            let mut calls = self.upload_calls.lock().unwrap();
            calls.push(image_base64);
            calls.len()
        };

        if *self.fail_on_call.lock().unwrap() == Some(call_number) {
            return Err(anyhow!("upload {call_number} rejected"));
        }

        let url = format!("https://i.ibb.co/mock{call_number}/image.jpg");
        self.returned_urls.lock().unwrap().push(url.clone());
        Ok(url)
    }
}
