//! Response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use toolhub_entity::field::Field;
use toolhub_entity::folder::Folder;

use crate::tools::ToolDefinition;

/// `GET /discovery` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    /// Every callable tool.
    pub functions: Vec<ToolDefinition>,
}

/// Folder listing result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldersResponse {
    pub folders: Vec<Folder>,
}

/// Single folder subtree result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderResponse {
    pub folder: Folder,
}

/// Field listing result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldsResponse {
    pub fields: Vec<Field>,
}

/// Updated image record, as returned by the remote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub image: Value,
}

/// Task brief result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BriefResponse {
    Brief { brief: Value },
    Message { message: String },
}

impl BriefResponse {
    /// Reply used when the task carries no brief.
    pub fn no_brief() -> Self {
        Self::Message {
            message: "No brief available for this task.".to_string(),
        }
    }
}
