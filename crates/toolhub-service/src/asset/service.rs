//! Asset record operations.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::info;

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_core::traits::gateway::CmpGateway;

use crate::context::RequestContext;
use crate::endpoints;

/// Reads and updates asset records.
#[derive(Debug, Clone)]
pub struct AssetService {
    /// Remote gateway.
    gateway: Arc<dyn CmpGateway>,
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(gateway: Arc<dyn CmpGateway>) -> Self {
        Self { gateway }
    }

    /// Moves an image into another folder and returns the updated record.
    pub async fn update_folder_location(
        &self,
        ctx: &RequestContext,
        asset_id: &str,
        folder_id: &str,
    ) -> AppResult<Value> {
        let image = self
            .gateway
            .patch_json(
                &ctx.auth,
                &endpoints::image(asset_id),
                &json!({ "folder_id": folder_id }),
            )
            .await?;

        info!(asset_id = %asset_id, folder_id = %folder_id, "Image moved");
        Ok(image)
    }

    /// Resolves the download URL of a raw file asset.
    pub async fn download_url(&self, ctx: &RequestContext, asset_id: &str) -> AppResult<String> {
        let record = self
            .gateway
            .get_json(&ctx.auth, &endpoints::raw_file(asset_id))
            .await?;

        record
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| AppError::not_found(format!("Asset {asset_id} has no download URL")))
    }
}
