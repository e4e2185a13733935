//! # Editor
//!
//! Copy-on-write handle over an [`EditorState`].
//!
//! Every edit clones the current state, mutates the clone and returns it in a
//! new `Editor`. The receiver is never touched, so older snapshots stay valid
//! and two edits started from the same snapshot simply yield two independent
//! successors. Which one to keep is the caller's call.
//!
//! ## Placement rules
//!
//! - Modifiers attach to a view's `modifiers`; never at the root, never to a
//!   modifier or control.
//! - Views and controls go into a parent's `content`; the parent must have one.
//! - Templates only live at the root.

use crate::equality::structurally_equal;
use crate::errors::{EditorError, EditorResult};
use crate::locator::{remove_at, resolve_mut, search, select, Selection};
use stackblocks_common::IdCollector;
use stackblocks_evaluator::{Evaluator, Preview};
use stackblocks_model::{Block, EditorState, Node, NodeType, Value};
use std::collections::HashSet;
use tracing::debug;

/// Immutable editor snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Editor {
    state: EditorState,
}

impl Editor {
    pub fn new(state: EditorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn tree(&self) -> &[Node] {
        &self.state.tree
    }

    pub fn scope(&self) -> &Value {
        &self.state.scope
    }

    /// Same tree against different sample data
    pub fn with_scope(&self, scope: Value) -> Editor {
        Editor::new(EditorState::new(scope, self.state.tree.clone()))
    }

    /// Append `node` to the root (`None`) or to the given parent
    pub fn insert(&self, node: Node, parent_id: Option<&str>) -> EditorResult<Editor> {
        if parent_id.is_none() && node.is_modifier() {
            return Err(EditorError::RootModifier);
        }

        let mut state = self.state.clone();
        check_fresh_ids(&state.tree, &node)?;

        let node_id = node.id.clone();
        attach(&mut state.tree, node, parent_id)?;
        debug!(node_id = %node_id, parent_id = ?parent_id, "Inserted node");

        Ok(Editor::new(state))
    }

    /// Overwrite the args of node `id` with those of `replacement`
    ///
    /// Id, block type, type and modifiers always come from the existing node.
    pub fn update(&self, id: &str, replacement: Node) -> EditorResult<Editor> {
        let mut state = self.state.clone();
        let path = select(&state.tree, id)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?
            .path;
        let existing = resolve_mut(&mut state.tree, &path)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?;

        if existing.block_type() != replacement.block_type() {
            return Err(EditorError::BlockTypeMismatch {
                expected: existing.block_type(),
                found: replacement.block_type(),
            });
        }
        if replacement.id != id {
            return Err(EditorError::IdMismatch {
                expected: id.to_string(),
                found: replacement.id,
            });
        }
        if existing.node_type() != replacement.node_type() {
            return Err(EditorError::TypeMismatch {
                expected: existing.node_type(),
                found: replacement.node_type(),
            });
        }

        match (&mut existing.block, replacement.block) {
            (Block::View(current), Block::View(next)) => current.kind = next.kind,
            (Block::Control(current), Block::Control(next)) => *current = next,
            (Block::Modifier(current), Block::Modifier(next)) => *current = next,
            (Block::Template(current), Block::Template(next)) => *current = next,
            (current, next) => {
                return Err(EditorError::BlockTypeMismatch {
                    expected: current.block_type(),
                    found: next.block_type(),
                })
            }
        }
        debug!(node_id = %id, "Updated node args");

        Ok(Editor::new(state))
    }

    /// Detach node `id` with its whole subtree and re-attach it under
    /// `new_parent_id` (or the root) using the insert rules
    pub fn move_node(&self, id: &str, new_parent_id: Option<&str>) -> EditorResult<Editor> {
        let mut state = self.state.clone();
        let Selection { path, item } =
            select(&state.tree, id).ok_or_else(|| EditorError::NotFound(id.to_string()))?;

        if let Some(parent_id) = new_parent_id {
            let into_self = item.id == parent_id
                || search(std::slice::from_ref(item), |node| node.id == parent_id).is_some();
            if into_self {
                return Err(EditorError::CycleDetected {
                    node_id: id.to_string(),
                    parent_id: parent_id.to_string(),
                });
            }
        }

        let node = remove_at(&mut state.tree, &path)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?;
        attach(&mut state.tree, node, new_parent_id)?;
        debug!(node_id = %id, new_parent_id = ?new_parent_id, "Moved node");

        Ok(Editor::new(state))
    }

    /// Remove node `id` and all of its descendants
    pub fn delete(&self, id: &str) -> EditorResult<Editor> {
        let mut state = self.state.clone();
        let path = select(&state.tree, id)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?
            .path;

        remove_at(&mut state.tree, &path).ok_or_else(|| EditorError::NotFound(id.to_string()))?;
        debug!(node_id = %id, "Deleted node");

        Ok(Editor::new(state))
    }

    pub fn select(&self, id: &str) -> Option<Selection<'_>> {
        select(&self.state.tree, id)
    }

    /// Whether any node of `node_type` exists below `parent_id`, or anywhere
    /// in the tree when `parent_id` is `None`
    pub fn contains(&self, node_type: NodeType, parent_id: Option<&str>) -> EditorResult<bool> {
        let matches = |node: &Node| node.node_type() == node_type;

        let Some(parent_id) = parent_id else {
            return Ok(search(&self.state.tree, matches).is_some());
        };

        let parent = select(&self.state.tree, parent_id)
            .ok_or_else(|| EditorError::ParentNotFound(parent_id.to_string()))?
            .item;
        let in_content = parent
            .content()
            .is_some_and(|content| search(content, matches).is_some());
        let in_modifiers = parent
            .modifiers()
            .is_some_and(|modifiers| search(modifiers, matches).is_some());

        Ok(in_content || in_modifiers)
    }

    /// Same tree shape, types, args and modifier order, ignoring ids
    pub fn equals(&self, other: &Editor) -> bool {
        structurally_equal(&self.state.tree, &other.state.tree)
    }

    /// Render a preview with default evaluator options
    pub fn render(&self) -> Preview {
        Evaluator::new().render_tree(&self.state)
    }
}

impl From<EditorState> for Editor {
    fn from(state: EditorState) -> Self {
        Editor::new(state)
    }
}

/// Place `node` according to the placement rules
fn attach(tree: &mut Vec<Node>, node: Node, parent_id: Option<&str>) -> EditorResult<()> {
    let Some(parent_id) = parent_id else {
        if node.is_modifier() {
            return Err(EditorError::RootModifier);
        }
        tree.push(node);
        return Ok(());
    };

    let path = select(tree, parent_id)
        .ok_or_else(|| EditorError::ParentNotFound(parent_id.to_string()))?
        .path;
    let parent = resolve_mut(tree, &path)
        .ok_or_else(|| EditorError::ParentNotFound(parent_id.to_string()))?;

    match &node.block {
        Block::Modifier(_) => {
            match parent.block {
                Block::Modifier(_) => {
                    return Err(EditorError::ModifierIntoModifier(parent_id.to_string()))
                }
                Block::Control(_) => {
                    return Err(EditorError::ModifierIntoControl(parent_id.to_string()))
                }
                Block::View(_) | Block::Template(_) => {}
            }
            parent
                .modifiers_mut()
                .ok_or_else(|| EditorError::InvalidParent(parent_id.to_string()))?
                .push(node);
        }
        Block::Template(_) => return Err(EditorError::NestedTemplate(parent_id.to_string())),
        Block::View(_) | Block::Control(_) => {
            parent
                .content_mut()
                .ok_or_else(|| EditorError::InvalidParent(parent_id.to_string()))?
                .push(node);
        }
    }

    Ok(())
}

/// Reject a node whose subtree reuses an id already in `tree` or repeats one
fn check_fresh_ids(tree: &[Node], node: &Node) -> EditorResult<()> {
    let mut seen: HashSet<&str> = IdCollector::collect(tree).into_iter().collect();
    for id in IdCollector::collect(std::slice::from_ref(node)) {
        if !seen.insert(id) {
            return Err(EditorError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}
