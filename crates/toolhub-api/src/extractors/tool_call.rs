//! `ToolCall` extractor: resolves the tool, its parameters, and the caller's credentials.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_core::types::{AuthContext, ForwardedCredentials};
use toolhub_service::context::RequestContext;

use crate::dto::request::{ToolAuth, ToolParameters, ToolRequest};
use crate::error::ApiError;
use crate::state::AppState;
use crate::tools::Tool;

/// A fully resolved tool invocation.
#[derive(Debug, Clone)]
pub struct ToolCall {
    /// The tool named in the path.
    pub tool: Tool,
    /// Credentials for every remote call the tool makes.
    pub ctx: RequestContext,
    /// Parameters from the body.
    pub parameters: ToolParameters,
}

impl FromRequest<AppState> for ToolCall {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let Path(name) = Path::<String>::from_request_parts(&mut parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        let tool = Tool::from_name(&name)
            .ok_or_else(|| AppError::not_found(format!("Unknown tool: {name}")))?;

        let raw = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        let request: ToolRequest = if raw.is_empty() {
            ToolRequest::default()
        } else {
            serde_json::from_slice(&raw)
                .map_err(|e| AppError::validation(format!("Invalid tool request body: {e}")))?
        };

        let auth = resolve_auth(request.auth.as_ref(), state.client_credentials)?;

        Ok(Self {
            tool,
            ctx: RequestContext::new(auth),
            parameters: request.parameters,
        })
    }
}

/// Picks how remote calls are authenticated.
///
/// A forwarded access token wins; otherwise the configured client
/// credentials are used; otherwise the call is rejected.
pub fn resolve_auth(auth: Option<&ToolAuth>, client_credentials: bool) -> AppResult<AuthContext> {
    let forwarded = auth
        .and_then(|auth| auth.credentials.as_ref())
        .and_then(|creds| {
            let access_token = creds.access_token.as_deref().filter(|t| !t.is_empty())?;
            Some(ForwardedCredentials {
                token_type: creds
                    .token_type
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "Bearer".to_string()),
                access_token: access_token.to_string(),
                org_sso_id: creds.org_sso_id.clone().filter(|id| !id.is_empty()),
            })
        });

    match forwarded {
        Some(creds) => Ok(AuthContext::Forwarded(creds)),
        None if client_credentials => Ok(AuthContext::ClientCredentials),
        None => Err(AppError::authentication(
            "Missing caller credentials and no client credentials configured",
        )),
    }
}
