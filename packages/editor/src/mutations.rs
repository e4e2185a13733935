//! # Mutations
//!
//! Serializable editing commands. Each variant maps onto one [`Editor`]
//! operation, so a recorded sequence of mutations replays the same edits
//! against any snapshot.
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Appends to the root or a parent's `content` / `modifiers`
//! - Fails on any id already present in the tree
//!
//! ### Update
//! - Replaces args only; id, type and modifiers are kept
//!
//! ### Move
//! - Detach and re-insert; fails if the target is inside the moved subtree
//!
//! ### Delete
//! - Removes node and all descendants

use crate::editor::Editor;
use crate::errors::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};
use stackblocks_model::{Node, NodeId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    Insert {
        node: Node,
        #[serde(default, rename = "parentId")]
        parent_id: Option<NodeId>,
    },

    Update {
        id: NodeId,
        node: Node,
    },

    Move {
        id: NodeId,
        #[serde(default, rename = "newParentId")]
        new_parent_id: Option<NodeId>,
    },

    Delete {
        id: NodeId,
    },
}

impl Mutation {
    /// Apply to `editor`, returning the successor snapshot
    pub fn apply(&self, editor: &Editor) -> EditorResult<Editor> {
        match self {
            Mutation::Insert { node, parent_id } => {
                editor.insert(node.clone(), parent_id.as_deref())
            }
            Mutation::Update { id, node } => editor.update(id, node.clone()),
            Mutation::Move { id, new_parent_id } => editor.move_node(id, new_parent_id.as_deref()),
            Mutation::Delete { id } => editor.delete(id),
        }
    }

    /// Check that the ids this mutation refers to exist in `editor`
    pub fn validate(&self, editor: &Editor) -> EditorResult<()> {
        let target = match self {
            Mutation::Insert { .. } => None,
            Mutation::Update { id, .. } | Mutation::Move { id, .. } | Mutation::Delete { id } => {
                Some(id)
            }
        };
        if let Some(id) = target {
            if editor.select(id).is_none() {
                return Err(EditorError::NotFound(id.clone()));
            }
        }

        let parent = match self {
            Mutation::Insert { parent_id, .. } => parent_id.as_ref(),
            Mutation::Move { new_parent_id, .. } => new_parent_id.as_ref(),
            Mutation::Update { .. } | Mutation::Delete { .. } => None,
        };
        if let Some(parent_id) = parent {
            if editor.select(parent_id).is_none() {
                return Err(EditorError::ParentNotFound(parent_id.clone()));
            }
        }

        Ok(())
    }

    /// Id of the node this mutation acts on
    pub fn node_id(&self) -> &str {
        match self {
            Mutation::Insert { node, .. } => &node.id,
            Mutation::Update { id, .. } | Mutation::Move { id, .. } | Mutation::Delete { id } => id,
        }
    }
}
