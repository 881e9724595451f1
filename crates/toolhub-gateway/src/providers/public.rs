//! Unauthenticated fetcher for public asset URLs and signed download links.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tracing::debug;

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_core::traits::fetcher::{AssetFetcher, AssetProbe};

use crate::error::{status_error, transport_error};

/// Fetches public URLs without CMP credentials.
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: reqwest::Client,
}

impl HttpAssetFetcher {
    /// Create a fetcher with the given per-request timeout.
    pub fn new(timeout_seconds: u64) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn probe(&self, url: &str) -> AppResult<AssetProbe> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| transport_error(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, url));
        }

        // Read the header directly: the body of a HEAD response is always empty.
        let headers = response.headers();
        let size_bytes = headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        debug!(url, ?size_bytes, ?content_type, "Probed asset");
        Ok(AssetProbe {
            size_bytes,
            content_type,
        })
    }

    async fn download(&self, url: &str) -> AppResult<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, url));
        }

        response.bytes().await.map_err(|e| transport_error(e, url))
    }
}
