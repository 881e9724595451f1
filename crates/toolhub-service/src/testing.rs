//! In-memory fakes of the gateway traits for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_core::traits::fetcher::{AssetFetcher, AssetProbe};
use toolhub_core::traits::gateway::CmpGateway;
use toolhub_core::types::{AuthContext, ForwardedCredentials, PageRequest};

use crate::context::RequestContext;

pub fn ctx() -> RequestContext {
    RequestContext::new(AuthContext::Forwarded(ForwardedCredentials {
        token_type: "Bearer".to_string(),
        access_token: "test-token".to_string(),
        org_sso_id: None,
    }))
}

/// Serves listings by offset slicing and documents by exact endpoint.
#[derive(Debug, Default)]
pub struct FakeGateway {
    listings: HashMap<String, Vec<Value>>,
    /// Explicit page sequences, served in order regardless of offset.
    scripted_pages: Mutex<HashMap<String, Vec<Vec<Value>>>>,
    documents: HashMap<String, Value>,
    failing: Vec<String>,
    pub calls: Mutex<Vec<String>>,
    pub patches: Mutex<Vec<(String, Value)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, endpoint: &str, records: Vec<Value>) -> Self {
        self.listings.insert(endpoint.to_string(), records);
        self
    }

    pub fn with_pages(self, endpoint: &str, pages: Vec<Vec<Value>>) -> Self {
        self.scripted_pages
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), pages);
        self
    }

    pub fn with_document(mut self, endpoint: &str, body: Value) -> Self {
        self.documents.insert(endpoint.to_string(), body);
        self
    }

    pub fn failing_on(mut self, endpoint: &str) -> Self {
        self.failing.push(endpoint.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == endpoint)
            .count()
    }

    fn record(&self, endpoint: &str) -> AppResult<()> {
        self.calls.lock().unwrap().push(endpoint.to_string());
        if self.failing.iter().any(|f| f == endpoint) {
            return Err(AppError::external(format!("{endpoint} returned 503")));
        }
        Ok(())
    }
}

#[async_trait]
impl CmpGateway for FakeGateway {
    async fn get_json(&self, _auth: &AuthContext, endpoint: &str) -> AppResult<Value> {
        self.record(endpoint)?;
        self.documents
            .get(endpoint)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("{endpoint} returned 404 Not Found")))
    }

    async fn get_page(
        &self,
        _auth: &AuthContext,
        endpoint: &str,
        page: PageRequest,
    ) -> AppResult<Vec<Value>> {
        self.record(endpoint)?;

        if let Some(pages) = self.scripted_pages.lock().unwrap().get_mut(endpoint) {
            return Ok(if pages.is_empty() {
                Vec::new()
            } else {
                pages.remove(0)
            });
        }

        let records = self
            .listings
            .get(endpoint)
            .ok_or_else(|| AppError::not_found(format!("{endpoint} returned 404 Not Found")))?;
        let start = (page.offset as usize).min(records.len());
        let end = (start + page.page_size as usize).min(records.len());
        Ok(records[start..end].to_vec())
    }

    async fn patch_json(
        &self,
        _auth: &AuthContext,
        endpoint: &str,
        body: &Value,
    ) -> AppResult<Value> {
        self.record(endpoint)?;
        self.patches
            .lock()
            .unwrap()
            .push((endpoint.to_string(), body.clone()));
        let mut updated = self
            .documents
            .get(endpoint)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("{endpoint} returned 404 Not Found")))?;
        if let (Value::Object(target), Value::Object(changes)) = (&mut updated, body) {
            for (key, value) in changes {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(updated)
    }
}

/// Answers probes from a table; unknown URLs fail like an unreachable host.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    probes: HashMap<String, AssetProbe>,
    downloads: HashMap<String, Bytes>,
    pub probed: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, url: &str, size: Option<u64>, content_type: &str) -> Self {
        self.probes.insert(
            url.to_string(),
            AssetProbe {
                size_bytes: size,
                content_type: Some(content_type.to_string()),
            },
        );
        self
    }

    pub fn with_download(mut self, url: &str, body: impl Into<Bytes>) -> Self {
        self.downloads.insert(url.to_string(), body.into());
        self
    }
}

#[async_trait]
impl AssetFetcher for FakeFetcher {
    async fn probe(&self, url: &str) -> AppResult<AssetProbe> {
        self.probed.lock().unwrap().push(url.to_string());
        self.probes
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::external(format!("Request to {url} failed: connection refused")))
    }

    async fn download(&self, url: &str) -> AppResult<Bytes> {
        self.downloads
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("{url} returned 404 Not Found")))
    }
}
