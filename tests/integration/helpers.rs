//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use bytes::Bytes;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use toolhub_core::config::AppConfig;
use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_core::traits::fetcher::{AssetFetcher, AssetProbe};
use toolhub_core::traits::gateway::CmpGateway;
use toolhub_core::types::{AuthContext, PageRequest};

/// In-memory CMP: listings are served by offset, documents by exact path.
#[derive(Debug, Default)]
pub struct StubCmp {
    listings: HashMap<String, Vec<Value>>,
    documents: HashMap<String, Value>,
    failing: Vec<String>,
    /// Every endpoint touched, with the authorization used.
    pub calls: Mutex<Vec<(String, String)>>,
    pub patches: Mutex<Vec<(String, Value)>>,
}

impl StubCmp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, endpoint: &str, records: Vec<Value>) -> Self {
        self.listings.insert(endpoint.to_string(), records);
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

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| e == endpoint)
            .count()
    }

    fn record(&self, auth: &AuthContext, endpoint: &str) -> AppResult<()> {
        let who = match auth {
            AuthContext::Forwarded(creds) => creds.access_token.clone(),
            AuthContext::ClientCredentials => "client-credentials".to_string(),
        };
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), who));
        if self.failing.iter().any(|f| f == endpoint) {
            return Err(AppError::external(format!(
                "{endpoint} returned 503 Service Unavailable"
            )));
        }
        Ok(())
    }

    fn document(&self, endpoint: &str) -> AppResult<Value> {
        self.documents
            .get(endpoint)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("{endpoint} returned 404 Not Found")))
    }
}

#[async_trait]
impl CmpGateway for StubCmp {
    async fn get_json(&self, auth: &AuthContext, endpoint: &str) -> AppResult<Value> {
        self.record(auth, endpoint)?;
        self.document(endpoint)
    }

    async fn get_page(
        &self,
        auth: &AuthContext,
        endpoint: &str,
        page: PageRequest,
    ) -> AppResult<Vec<Value>> {
        self.record(auth, endpoint)?;
        let records = self
            .listings
            .get(endpoint)
            .ok_or_else(|| AppError::not_found(format!("{endpoint} returned 404 Not Found")))?;
        let start = (page.offset as usize).min(records.len());
        let end = (start + page.page_size as usize).min(records.len());
        Ok(records[start..end].to_vec())
    }

    async fn patch_json(&self, auth: &AuthContext, endpoint: &str, body: &Value) -> AppResult<Value> {
        self.record(auth, endpoint)?;
        self.patches
            .lock()
            .unwrap()
            .push((endpoint.to_string(), body.clone()));
        let mut updated = self.document(endpoint)?;
        if let (Value::Object(target), Value::Object(changes)) = (&mut updated, body) {
            for (key, value) in changes {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(updated)
    }
}

/// Public web stand-in: probes and downloads answered from tables.
#[derive(Debug, Default)]
pub struct StubWeb {
    probes: HashMap<String, AssetProbe>,
    downloads: HashMap<String, Bytes>,
}

impl StubWeb {
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
impl AssetFetcher for StubWeb {
    async fn probe(&self, url: &str) -> AppResult<AssetProbe> {
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

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The remote the services talk to
    pub cmp: Arc<StubCmp>,
}

impl TestApp {
    /// Create a test application without client credentials.
    pub fn new(cmp: StubCmp, web: StubWeb) -> Self {
        Self::build(cmp, web, false)
    }

    /// Create a test application that falls back to client credentials.
    pub fn with_client_credentials(cmp: StubCmp, web: StubWeb) -> Self {
        Self::build(cmp, web, true)
    }

    fn build(cmp: StubCmp, web: StubWeb, client_credentials: bool) -> Self {
        let mut config = AppConfig::default();
        config.cmp.page_size = 2;

        let cmp = Arc::new(cmp);
        let state = toolhub_api::AppState::new(
            config,
            cmp.clone(),
            Arc::new(web),
            client_credentials,
        );

        Self {
            router: toolhub_api::build_app(state),
            cmp,
        }
    }

    /// Invoke a tool with a forwarded caller token.
    pub async fn call_tool(&self, name: &str, parameters: Value) -> TestResponse {
        let body = json!({
            "parameters": parameters,
            "auth": {
                "provider": "OptiID",
                "credentials": {
                    "token_type": "Bearer",
                    "access_token": "caller-token",
                    "org_sso_id": "org-1"
                }
            }
        });
        self.request("POST", &format!("/tools/{name}"), Some(body))
            .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` for non-JSON bodies
    pub body: Value,
    /// Raw body text
    pub text: String,
}
