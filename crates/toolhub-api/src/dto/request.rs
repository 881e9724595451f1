//! Request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;

/// Body of `POST /tools/{name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Tool parameters; absent means none.
    #[serde(default)]
    pub parameters: ToolParameters,
    /// Credentials injected by the calling platform.
    #[serde(default)]
    pub auth: Option<ToolAuth>,
}

/// Caller authentication block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolAuth {
    /// Identity provider name, e.g. `OptiID`.
    #[serde(default)]
    pub provider: Option<String>,
    /// Provider credentials.
    #[serde(default)]
    pub credentials: Option<ToolCredentials>,
}

/// Provider credentials forwarded to the remote API.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ToolCredentials {
    /// Authorization scheme, `Bearer` when absent.
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub org_sso_id: Option<String>,
    /// Other provider fields, ignored.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl std::fmt::Debug for ToolCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolCredentials")
            .field("token_type", &self.token_type)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("org_sso_id", &self.org_sso_id)
            .finish_non_exhaustive()
    }
}

/// Tool parameter object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolParameters(pub Map<String, Value>);

impl ToolParameters {
    /// A required identifier-like parameter.
    ///
    /// Strings must be non-blank; numbers are accepted and rendered as text.
    pub fn required(&self, name: &str) -> AppResult<String> {
        match self.0.get(name) {
            Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            Some(Value::Number(value)) => Ok(value.to_string()),
            _ => Err(AppError::missing_parameter(name)),
        }
    }
}
