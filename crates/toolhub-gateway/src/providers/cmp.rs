//! CMP REST API gateway over reqwest.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use toolhub_core::config::CmpConfig;
use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_core::traits::gateway::CmpGateway;
use toolhub_core::types::{AuthContext, PageRequest};

use crate::auth::headers::{client_credentials_headers, forwarded_headers};
use crate::auth::token::TokenCache;
use crate::error::{status_error, transport_error};

/// Authenticated HTTP access to the CMP REST API.
#[derive(Debug, Clone)]
pub struct HttpCmpGateway {
    /// Shared HTTP client.
    client: reqwest::Client,
    /// API base URL without trailing slash.
    base_url: String,
    /// Client-credentials token cache, when configured.
    tokens: Option<Arc<TokenCache>>,
}

impl HttpCmpGateway {
    /// Create a gateway from configuration.
    pub fn new(config: &CmpConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Url::parse(&config.base_url)
            .map_err(|e| AppError::configuration(format!("Invalid cmp.base_url: {e}")))?;

        let tokens = TokenCache::from_config(client.clone(), config).map(Arc::new);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Whether calls without forwarded credentials can be served.
    pub fn has_client_credentials(&self) -> bool {
        self.tokens.is_some()
    }

    /// Resolve a relative API path or absolute navigation link.
    fn resolve(&self, endpoint: &str) -> AppResult<Url> {
        let raw = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
        };
        Url::parse(&raw).map_err(|e| AppError::validation(format!("Invalid endpoint '{raw}': {e}")))
    }

    /// A client-credentials token the remote rejected is not reused.
    async fn drop_rejected_token(&self, auth: &AuthContext) {
        if let (AuthContext::ClientCredentials, Some(tokens)) = (auth, &self.tokens) {
            warn!("Client-credentials token rejected, discarding it");
            tokens.invalidate().await;
        }
    }

    async fn headers(&self, auth: &AuthContext) -> AppResult<HeaderMap> {
        match auth {
            AuthContext::Forwarded(creds) => forwarded_headers(creds),
            AuthContext::ClientCredentials => {
                let tokens = self.tokens.as_ref().ok_or_else(|| {
                    AppError::authentication("No caller credentials and no client credentials configured")
                })?;
                client_credentials_headers(&tokens.access_token().await?)
            }
        }
    }

    async fn execute(
        &self,
        auth: &AuthContext,
        request: reqwest::RequestBuilder,
        target: &str,
    ) -> AppResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, target))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.drop_rejected_token(auth).await;
            }
            return Err(status_error(status, target));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, target))?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Set `offset`/`page_size`, replacing any pagination already on the URL.
pub fn paged_url(mut url: Url, page: PageRequest) -> Url {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "offset" && key != "page_size")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair("offset", &page.offset.to_string())
        .append_pair("page_size", &page.page_size.to_string());
    url
}

/// The `data` records of a listing page; a body without them is an empty page.
pub fn page_records(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[async_trait]
impl CmpGateway for HttpCmpGateway {
    async fn get_json(&self, auth: &AuthContext, endpoint: &str) -> AppResult<Value> {
        let url = self.resolve(endpoint)?;
        debug!(url = %url, "GET");
        let request = self.client.get(url.clone()).headers(self.headers(auth).await?);
        self.execute(auth, request, url.path()).await
    }

    async fn get_page(
        &self,
        auth: &AuthContext,
        endpoint: &str,
        page: PageRequest,
    ) -> AppResult<Vec<Value>> {
        let url = paged_url(self.resolve(endpoint)?, page);
        debug!(url = %url, offset = page.offset, "GET page");
        let request = self.client.get(url.clone()).headers(self.headers(auth).await?);
        let body = self.execute(auth, request, url.path()).await?;
        Ok(page_records(body))
    }

    async fn patch_json(
        &self,
        auth: &AuthContext,
        endpoint: &str,
        body: &Value,
    ) -> AppResult<Value> {
        let url = self.resolve(endpoint)?;
        debug!(url = %url, "PATCH");
        let request = self
            .client
            .patch(url.clone())
            .headers(self.headers(auth).await?)
            .json(body);
        self.execute(auth, request, url.path()).await
    }
}
