//! Unauthenticated access to publicly reachable asset URLs.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Metadata reported by a header-only request.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssetProbe {
    /// Declared `Content-Length`, if reported and numeric.
    pub size_bytes: Option<u64>,
    /// Declared `Content-Type`, if reported.
    pub content_type: Option<String>,
}

/// Fetches public URLs: metadata probes and whole-body downloads.
#[async_trait]
pub trait AssetFetcher: Send + Sync + std::fmt::Debug + 'static {
    /// Probe a URL without downloading its body.
    async fn probe(&self, url: &str) -> AppResult<AssetProbe>;

    /// Download a URL's full body into memory.
    async fn download(&self, url: &str) -> AppResult<Bytes>;
}
