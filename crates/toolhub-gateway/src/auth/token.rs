//! OAuth client-credentials token cache.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use toolhub_core::config::CmpConfig;
use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;

use crate::error::{status_error, transport_error};

/// Token endpoint response body.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

/// A token together with the instant it stops being usable.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        now + margin < self.expires_at
    }
}

/// Process-wide cache of the client-credentials access token.
///
/// The `(token, expiry)` pair is replaced as one value. Two callers that see
/// an expired token at the same time may both refresh; the last write wins
/// and both tokens are valid.
pub struct TokenCache {
    /// Shared HTTP client.
    client: reqwest::Client,
    /// Token endpoint.
    auth_url: String,
    /// OAuth client id.
    client_id: String,
    /// OAuth client secret.
    client_secret: String,
    /// Refresh this long before the reported expiry.
    margin: Duration,
    /// Current token, if any.
    current: RwLock<Option<Arc<CachedToken>>>,
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache")
            .field("auth_url", &self.auth_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl TokenCache {
    /// Create a token cache for the given client.
    pub fn new(
        client: reqwest::Client,
        auth_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        margin_seconds: i64,
    ) -> Self {
        Self {
            client,
            auth_url: auth_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            margin: Duration::seconds(margin_seconds.max(0)),
            current: RwLock::new(None),
        }
    }

    /// Build a cache from configuration, or `None` when no client is configured.
    pub fn from_config(client: reqwest::Client, config: &CmpConfig) -> Option<Self> {
        config.client_credentials().map(|(id, secret)| {
            Self::new(
                client,
                config.auth_url.clone(),
                id,
                secret,
                config.token_expiry_margin_seconds,
            )
        })
    }

    /// Returns a usable access token, exchanging credentials when the cached
    /// one is missing or about to expire.
    pub async fn access_token(&self) -> AppResult<String> {
        let cached = self.current.read().await.clone();
        if let Some(token) = cached {
            if token.is_fresh(Utc::now(), self.margin) {
                return Ok(token.access_token.clone());
            }
        }

        let fresh = Arc::new(self.exchange().await?);
        let access_token = fresh.access_token.clone();
        *self.current.write().await = Some(fresh);
        Ok(access_token)
    }

    /// Drops the cached token so the next call exchanges again.
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
    }

    async fn exchange(&self) -> AppResult<CachedToken> {
        debug!(auth_url = %self.auth_url, "Requesting client-credentials token");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .client
            .post(&self.auth_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| transport_error(e, &self.auth_url))?;

        let status = response.status();
        if !status.is_success() {
            let err = status_error(status, &self.auth_url);
            return Err(AppError::authentication(format!(
                "Token exchange failed: {}",
                err.message
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| transport_error(e, &self.auth_url))?;

        let expires_at = Utc::now() + Duration::seconds(body.expires_in);
        info!(expires_at = %expires_at, "Client-credentials token refreshed");

        Ok(CachedToken {
            access_token: body.access_token,
            expires_at,
        })
    }
}
