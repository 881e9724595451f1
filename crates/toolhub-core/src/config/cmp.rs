//! Remote DAM platform (CMP) configuration.

use serde::{Deserialize, Serialize};

/// Connection, credential, and traversal settings for the CMP REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmpConfig {
    /// REST API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OAuth token endpoint used for the client-credentials exchange.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// OAuth client id. Client-credentials mode is off unless both id and
    /// secret are set.
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth client secret.
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Records requested per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Deepest folder level link-following will descend to.
    #[serde(default = "default_max_tree_depth")]
    pub max_tree_depth: usize,
    /// Seconds before expiry at which a cached token is treated as stale.
    #[serde(default = "default_expiry_margin")]
    pub token_expiry_margin_seconds: i64,
}

impl CmpConfig {
    /// Returns the client id and secret when client-credentials mode is configured.
    pub fn client_credentials(&self) -> Option<(&str, &str)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some((id.as_str(), secret.as_str()))
            }
            _ => None,
        }
    }
}

impl Default for CmpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_url: default_auth_url(),
            client_id: None,
            client_secret: None,
            page_size: default_page_size(),
            request_timeout_seconds: default_request_timeout(),
            max_tree_depth: default_max_tree_depth(),
            token_expiry_margin_seconds: default_expiry_margin(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.cmp.optimizely.com".to_string()
}

fn default_auth_url() -> String {
    "https://accounts.cmp.optimizely.com/o/oauth2/v1/token".to_string()
}

fn default_page_size() -> u64 {
    100
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_tree_depth() -> usize {
    32
}

fn default_expiry_margin() -> i64 {
    30
}
