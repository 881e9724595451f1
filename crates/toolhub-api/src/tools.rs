//! The tool catalogue: names, parameters, and discovery metadata.

use serde::{Deserialize, Serialize};

/// A callable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    GetCmpRootFolders,
    GetCmpFields,
    GetCmpAllFolders,
    GetCmpFolderAndItsChildren,
    UpdateAssetFolderLocation,
    GetTaskBrief,
    ValidateAssets,
}

impl Tool {
    /// Every tool, in discovery order.
    pub const ALL: [Tool; 7] = [
        Tool::GetCmpRootFolders,
        Tool::GetCmpFields,
        Tool::GetCmpAllFolders,
        Tool::GetCmpFolderAndItsChildren,
        Tool::UpdateAssetFolderLocation,
        Tool::GetTaskBrief,
        Tool::ValidateAssets,
    ];

    /// Looks a tool up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Wire name used in the route and the discovery document.
    pub fn name(self) -> &'static str {
        match self {
            Tool::GetCmpRootFolders => "get_cmp_root_folders",
            Tool::GetCmpFields => "get_cmp_fields",
            Tool::GetCmpAllFolders => "get_cmp_all_folders",
            Tool::GetCmpFolderAndItsChildren => "get_cmp_folder_and_its_children",
            Tool::UpdateAssetFolderLocation => "update_asset_folder_location",
            Tool::GetTaskBrief => "get_task_brief",
            Tool::ValidateAssets => "validate_assets",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::GetCmpRootFolders => "Lists the root-level folders of the CMP library",
            Tool::GetCmpFields => "Lists every CMP metadata field",
            Tool::GetCmpAllFolders => "Lists every CMP folder nested under its parent",
            Tool::GetCmpFolderAndItsChildren => {
                "Fetches one CMP folder together with all of its nested child folders"
            }
            Tool::UpdateAssetFolderLocation => "Moves a CMP image asset into another folder",
            Tool::GetTaskBrief => "Fetches the brief attached to a CMP task",
            Tool::ValidateAssets => {
                "Checks the public asset URLs listed in a DAM spreadsheet before migration"
            }
        }
    }

    /// Generic failure reported to the caller when the tool fails.
    ///
    /// `None` for tools that report the underlying message instead.
    pub fn failure_message(self) -> Option<&'static str> {
        match self {
            Tool::GetCmpRootFolders => Some("Failed to fetch CMP root folders"),
            Tool::GetCmpFields => Some("Failed to fetch CMP fields"),
            Tool::GetCmpAllFolders => Some("Failed to fetch all CMP folders"),
            Tool::GetCmpFolderAndItsChildren => Some("Failed to fetch CMP folder with children"),
            Tool::UpdateAssetFolderLocation => Some("Failed to patch CMP image folder"),
            Tool::GetTaskBrief => Some("Failed to fetch CMP task brief"),
            Tool::ValidateAssets => None,
        }
    }

    pub fn parameters(self) -> Vec<ParameterDefinition> {
        match self {
            Tool::GetCmpRootFolders | Tool::GetCmpFields | Tool::GetCmpAllFolders => Vec::new(),
            Tool::GetCmpFolderAndItsChildren => {
                vec![ParameterDefinition::string("folder_id", "The CMP folder ID to fetch")]
            }
            Tool::UpdateAssetFolderLocation => vec![
                ParameterDefinition::string("asset_id", "The CMP image asset to move"),
                ParameterDefinition::string("folder_id", "The destination folder ID"),
            ],
            Tool::GetTaskBrief => vec![ParameterDefinition::string("task_id", "The CMP task ID")],
            Tool::ValidateAssets => vec![
                ParameterDefinition::string(
                    "asset_id",
                    "DAM asset ID of the spreadsheet listing the public URLs",
                ),
                ParameterDefinition::string(
                    "url_column",
                    "Spreadsheet column holding the public asset URLs",
                ),
            ],
        }
    }

    /// Discovery entry for this tool.
    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
            endpoint: format!("/tools/{}", self.name()),
            http_method: "POST".to_string(),
            auth_requirements: vec![AuthRequirement::default()],
        }
    }
}

/// One parameter of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
    pub required: bool,
}

impl ParameterDefinition {
    fn string(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: "string".to_string(),
            description: description.to_string(),
            required: true,
        }
    }
}

/// Credentials a tool expects the caller to forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRequirement {
    pub provider: String,
    pub scope_bundle: String,
    pub required: bool,
}

impl Default for AuthRequirement {
    fn default() -> Self {
        Self {
            provider: "OptiID".to_string(),
            scope_bundle: "default".to_string(),
            required: true,
        }
    }
}

/// A tool as listed in the discovery document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterDefinition>,
    pub endpoint: String,
    pub http_method: String,
    pub auth_requirements: Vec<AuthRequirement>,
}
