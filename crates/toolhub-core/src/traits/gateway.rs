//! Remote gateway trait for the DAM platform REST API.

use async_trait::async_trait;
use serde_json::Value;

use crate::result::AppResult;
use crate::types::{AuthContext, PageRequest};

/// Authenticated access to the DAM platform.
///
/// `endpoint` is either a path relative to the configured base URL
/// (e.g. `/v3/folders`) or an absolute URL taken from a navigation link.
/// The production implementation lives in `toolhub-gateway`.
#[async_trait]
pub trait CmpGateway: Send + Sync + std::fmt::Debug + 'static {
    /// GET a single JSON document.
    async fn get_json(&self, auth: &AuthContext, endpoint: &str) -> AppResult<Value>;

    /// GET one page of a listing endpoint and return its `data` records.
    async fn get_page(
        &self,
        auth: &AuthContext,
        endpoint: &str,
        page: PageRequest,
    ) -> AppResult<Vec<Value>>;

    /// PATCH a JSON body and return the updated remote object.
    async fn patch_json(&self, auth: &AuthContext, endpoint: &str, body: &Value)
    -> AppResult<Value>;
}
