//! Liveness handlers.

/// GET /
pub async fn root() -> &'static str {
    "CMP tool server is up. See /discovery for the available tools."
}

/// GET /_status
pub async fn status() -> &'static str {
    tracing::debug!("Status probe");
    "All Ok! App Running..."
}
