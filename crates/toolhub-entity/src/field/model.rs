//! Field entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A metadata field definition in the DAM platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Unique field identifier.
    pub id: String,
    /// Field name.
    #[serde(default)]
    pub name: String,
    /// Remote type tag (e.g. `text`, `choice`).
    #[serde(rename = "type", default)]
    pub field_type: String,
    /// Remote attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
