use crate::node::Node;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Snapshot held by an editor: sample data plus the top-level forest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    #[serde(default)]
    pub scope: Value,
    #[serde(default)]
    pub tree: Vec<Node>,
}

impl EditorState {
    pub fn new(scope: Value, tree: Vec<Node>) -> Self {
        Self { scope, tree }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
