//! Folder entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A folder in the DAM library.
///
/// `children` stays `None` until a tree assembler fills it in, so a folder
/// fetched on its own serializes without a `children` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Parent folder ID (null for root folders).
    #[serde(default)]
    pub parent_folder_id: Option<String>,
    /// Hierarchy navigation links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<FolderLinks>,
    /// Immediate child folders, once assembled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Folder>>,
    /// Remote attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_folder_id.is_none()
    }

    /// The children navigation link, if the remote supplied a non-empty one.
    pub fn children_link(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.children.as_deref())
            .filter(|link| !link.is_empty())
    }

    /// Number of folders in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(Folder::subtree_len)
            .sum::<usize>()
    }
}

/// Navigation links attached to a folder record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderLinks {
    /// This folder.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The parent folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Listing of immediate child folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    /// Listing of assets stored in this folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    /// Other links.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
