//! Error types for the editor

use stackblocks_model::{BlockType, NodeId, NodeType};
use thiserror::Error;

/// Caller-contract violations raised by tree edits
///
/// The UI is expected to prevent these (e.g. by refusing invalid drop
/// targets); they are never transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    #[error("Parent not found: {0}")]
    ParentNotFound(NodeId),

    #[error("Modifiers cannot be placed at the root")]
    RootModifier,

    #[error("Cannot insert a modifier into modifier {0}")]
    ModifierIntoModifier(NodeId),

    #[error("Cannot insert a modifier into control {0}")]
    ModifierIntoControl(NodeId),

    #[error("Parent {0} cannot hold this block")]
    InvalidParent(NodeId),

    #[error("Templates only live at the root, not inside {0}")]
    NestedTemplate(NodeId),

    #[error("Block type mismatch: expected {expected}, found {found}")]
    BlockTypeMismatch { expected: BlockType, found: BlockType },

    #[error("Id mismatch: expected {expected}, found {found}")]
    IdMismatch { expected: NodeId, found: NodeId },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: NodeType, found: NodeType },

    #[error("Duplicate id: {0}")]
    DuplicateId(NodeId),

    #[error("Cannot move {node_id} into its own subtree at {parent_id}")]
    CycleDetected { node_id: NodeId, parent_id: NodeId },
}

pub type EditorResult<T> = Result<T, EditorError>;
