//! Request header assembly for CMP API calls.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_core::types::ForwardedCredentials;

/// Correlation id header sent with every request.
pub const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
/// Token flavour header required for forwarded identity-provider tokens.
pub const AUTH_TOKEN_TYPE: HeaderName = HeaderName::from_static("x-auth-token-type");
/// Organization header for forwarded identity-provider tokens.
pub const ORG_SSO_ID: HeaderName = HeaderName::from_static("x-org-sso-id");

const REQUEST_ID_DIGITS: usize = 10;

/// A fresh ten-digit numeric correlation id.
pub fn generate_request_id() -> String {
    (0..REQUEST_ID_DIGITS)
        .map(|_| char::from(b'0' + rand::random_range(0..10u8)))
        .collect()
}

/// Headers for a call made with caller-supplied credentials.
pub fn forwarded_headers(creds: &ForwardedCredentials) -> AppResult<HeaderMap> {
    let mut headers = base_headers()?;
    headers.insert(AUTH_TOKEN_TYPE, HeaderValue::from_static("opti-id"));
    headers.insert(AUTHORIZATION, sensitive(&creds.authorization())?);
    if let Some(org) = creds.org_sso_id.as_deref().filter(|org| !org.is_empty()) {
        headers.insert(ORG_SSO_ID, value(org)?);
    }
    Ok(headers)
}

/// Headers for a call made with the cached client-credentials token.
pub fn client_credentials_headers(access_token: &str) -> AppResult<HeaderMap> {
    let mut headers = base_headers()?;
    headers.insert(AUTHORIZATION, sensitive(&format!("Bearer {access_token}"))?);
    Ok(headers)
}

fn base_headers() -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(REQUEST_ID, value(&generate_request_id())?);
    Ok(headers)
}

fn value(raw: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(raw)
        .map_err(|_| AppError::authentication("Credential contains characters not allowed in a header"))
}

fn sensitive(raw: &str) -> AppResult<HeaderValue> {
    let mut header = value(raw)?;
    header.set_sensitive(true);
    Ok(header)
}
