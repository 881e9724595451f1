//! Discovery document handler.

use axum::Json;

use crate::dto::response::DiscoveryResponse;
use crate::tools::Tool;

/// GET /discovery
pub async fn discovery() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse {
        functions: Tool::ALL.into_iter().map(Tool::definition).collect(),
    })
}
