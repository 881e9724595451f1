//! Tool invocation handler.

use axum::Json;
use axum::extract::State;
use serde_json::Value;
use tracing::{error, info};

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;
use toolhub_service::context::RequestContext;

use crate::dto::request::ToolParameters;
use crate::dto::response::{
    BriefResponse, FieldsResponse, FolderResponse, FoldersResponse, ImageResponse,
};
use crate::error::ApiError;
use crate::extractors::ToolCall;
use crate::state::AppState;
use crate::tools::Tool;

/// POST /tools/{name}
pub async fn invoke(
    State(state): State<AppState>,
    call: ToolCall,
) -> Result<Json<Value>, ApiError> {
    let ToolCall {
        tool,
        ctx,
        parameters,
    } = call;

    info!(
        tool = tool.name(),
        forwarded = ctx.is_forwarded(),
        "Tool invoked"
    );

    match run(&state, tool, &ctx, &parameters).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => Err(report_failure(tool, e).into()),
    }
}

async fn run(
    state: &AppState,
    tool: Tool,
    ctx: &RequestContext,
    params: &ToolParameters,
) -> AppResult<Value> {
    let result = match tool {
        Tool::GetCmpRootFolders => serde_json::to_value(FoldersResponse {
            folders: state.folder_service.list_root_folders(ctx).await?,
        })?,
        Tool::GetCmpFields => serde_json::to_value(FieldsResponse {
            fields: state.field_service.list_fields(ctx).await?,
        })?,
        Tool::GetCmpAllFolders => serde_json::to_value(FoldersResponse {
            folders: state.folder_service.list_all_folders(ctx).await?,
        })?,
        Tool::GetCmpFolderAndItsChildren => {
            let folder_id = params.required("folder_id")?;
            serde_json::to_value(FolderResponse {
                folder: state
                    .folder_service
                    .get_folder_with_children(ctx, &folder_id)
                    .await?,
            })?
        }
        Tool::UpdateAssetFolderLocation => {
            let asset_id = params.required("asset_id")?;
            let folder_id = params.required("folder_id")?;
            serde_json::to_value(ImageResponse {
                image: state
                    .asset_service
                    .update_folder_location(ctx, &asset_id, &folder_id)
                    .await?,
            })?
        }
        Tool::GetTaskBrief => {
            let task_id = params.required("task_id")?;
            let response = match state.task_service.get_brief(ctx, &task_id).await? {
                Some(brief) => BriefResponse::Brief { brief },
                None => BriefResponse::no_brief(),
            };
            serde_json::to_value(response)?
        }
        Tool::ValidateAssets => {
            let asset_id = params.required("asset_id")?;
            let url_column = params.required("url_column")?;
            serde_json::to_value(
                state
                    .asset_validator
                    .validate(ctx, &asset_id, &url_column)
                    .await?,
            )?
        }
    };
    Ok(result)
}

/// Turns a tool failure into what the caller sees.
///
/// Parameter errors pass through. Other failures are logged in full and
/// replaced by the tool's generic message, keeping the error kind.
fn report_failure(tool: Tool, err: AppError) -> AppError {
    if err.is_missing_parameter() {
        return err;
    }

    error!(tool = tool.name(), kind = %err.kind, error = %err.message, "Tool failed");
    match tool.failure_message() {
        Some(message) => AppError::new(err.kind, message),
        None => AppError::new(err.kind, format!("{} failed: {}", tool.name(), err.message)),
    }
}
