//! # Tree Locator
//!
//! Depth-first search over a block forest producing addressable paths.
//!
//! Visiting order is pre-order: top-level nodes left to right, and for each
//! node its `content` subtree (left to right) before its `modifiers`. Ids are
//! unique within a tree, so the order only matters if that invariant is
//! broken, in which case the first node in this order wins.
//!
//! Paths are index based and go stale after any structural edit; always
//! locate again instead of caching them.

use serde::{Deserialize, Serialize};
use stackblocks_model::Node;

/// Which array a path step indexes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Top-level tree or a `content` array
    Block,
    /// A view's `modifiers` array
    Modifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub kind: StepKind,
    pub index: usize,
}

impl PathStep {
    pub fn block(index: usize) -> Self {
        Self {
            kind: StepKind::Block,
            index,
        }
    }

    pub fn modifier(index: usize) -> Self {
        Self {
            kind: StepKind::Modifier,
            index,
        }
    }
}

pub type NodePath = Vec<PathStep>;

/// A located node and the path that reaches it
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub path: NodePath,
    pub item: &'a Node,
}

/// Locate a node by id
pub fn select<'a>(tree: &'a [Node], id: &str) -> Option<Selection<'a>> {
    search(tree, |node| node.id == id)
}

/// First node, in visiting order, matching `predicate`
pub fn search<'a, F>(tree: &'a [Node], mut predicate: F) -> Option<Selection<'a>>
where
    F: FnMut(&Node) -> bool,
{
    let mut stack: Vec<(NodePath, &'a Node)> = tree
        .iter()
        .enumerate()
        .rev()
        .map(|(index, node)| (vec![PathStep::block(index)], node))
        .collect();

    while let Some((path, node)) = stack.pop() {
        if predicate(node) {
            return Some(Selection { path, item: node });
        }

        // Pushed in reverse so content pops before modifiers, left to right
        if let Some(modifiers) = node.modifiers() {
            for (index, modifier) in modifiers.iter().enumerate().rev() {
                stack.push((child_path(&path, PathStep::modifier(index)), modifier));
            }
        }
        if let Some(content) = node.content() {
            for (index, child) in content.iter().enumerate().rev() {
                stack.push((child_path(&path, PathStep::block(index)), child));
            }
        }
    }

    None
}

fn child_path(parent: &[PathStep], step: PathStep) -> NodePath {
    let mut path = Vec::with_capacity(parent.len() + 1);
    path.extend_from_slice(parent);
    path.push(step);
    path
}

/// Follow a path from the root
pub fn resolve<'a>(tree: &'a [Node], path: &[PathStep]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    if first.kind != StepKind::Block {
        return None;
    }

    let mut node = tree.get(first.index)?;
    for step in rest {
        node = match step.kind {
            StepKind::Block => node.content()?.get(step.index)?,
            StepKind::Modifier => node.modifiers()?.get(step.index)?,
        };
    }
    Some(node)
}

pub fn resolve_mut<'a>(tree: &'a mut [Node], path: &[PathStep]) -> Option<&'a mut Node> {
    let (first, rest) = path.split_first()?;
    if first.kind != StepKind::Block {
        return None;
    }

    let mut node = tree.get_mut(first.index)?;
    for step in rest {
        node = match step.kind {
            StepKind::Block => node.content_mut()?.get_mut(step.index)?,
            StepKind::Modifier => node.modifiers_mut()?.get_mut(step.index)?,
        };
    }
    Some(node)
}

/// Locate a node by id for in-place editing
pub fn select_mut<'a>(tree: &'a mut [Node], id: &str) -> Option<(NodePath, &'a mut Node)> {
    let path = select(tree, id)?.path;
    let node = resolve_mut(tree, &path)?;
    Some((path, node))
}

/// Detach the node at `path` from whichever array its last step addresses
pub fn remove_at(tree: &mut Vec<Node>, path: &[PathStep]) -> Option<Node> {
    let (last, parent_path) = path.split_last()?;

    let siblings = if parent_path.is_empty() {
        if last.kind != StepKind::Block {
            return None;
        }
        tree
    } else {
        let parent = resolve_mut(tree, parent_path)?;
        match last.kind {
            StepKind::Block => parent.content_mut()?,
            StepKind::Modifier => parent.modifiers_mut()?,
        }
    };

    if last.index < siblings.len() {
        Some(siblings.remove(last.index))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackblocks_model::*;

    fn text(id: &str) -> Node {
        Node::view(
            id,
            View::Text(TextArgs {
                value: id.to_string(),
            }),
        )
    }

    /// root
    ///   a (content: a1)  modifiers: [bg (content: bg1), pad]
    ///   b
    /// solo
    fn sample() -> Vec<Node> {
        vec![
            Node::view(
                "root",
                View::VStack(StackArgs {
                    spacing: None,
                    content: vec![
                        Node::view(
                            "a",
                            View::HStack(StackArgs {
                                spacing: None,
                                content: vec![text("a1")],
                            }),
                        )
                        .with_modifier(Node::modifier(
                            "bg",
                            Modifier::Background(BackgroundArgs {
                                content: vec![text("bg1")],
                            }),
                        ))
                        .with_modifier(Node::modifier(
                            "pad",
                            Modifier::Padding(PaddingArgs::default()),
                        )),
                        text("b"),
                    ],
                }),
            ),
            text("solo"),
        ]
    }

    #[test]
    fn test_select_every_id() {
        let tree = sample();
        for id in ["root", "a", "a1", "bg", "bg1", "pad", "b", "solo"] {
            let selection = select(&tree, id).unwrap();
            assert_eq!(selection.item.id, id);
            assert_eq!(resolve(&tree, &selection.path).unwrap().id, id);
        }
        assert!(select(&tree, "missing").is_none());
    }

    #[test]
    fn test_paths() {
        let tree = sample();
        assert_eq!(select(&tree, "solo").unwrap().path, vec![PathStep::block(1)]);
        assert_eq!(
            select(&tree, "bg1").unwrap().path,
            vec![
                PathStep::block(0),
                PathStep::block(0),
                PathStep::modifier(0),
                PathStep::block(0)
            ]
        );
        assert_eq!(
            select(&tree, "pad").unwrap().path,
            vec![PathStep::block(0), PathStep::block(0), PathStep::modifier(1)]
        );
    }

    #[test]
    fn test_visiting_order_is_content_before_modifiers() {
        let tree = sample();
        let mut visited = Vec::new();
        search(&tree, |node| {
            visited.push(node.id.clone());
            false
        });
        assert_eq!(
            visited,
            vec!["root", "a", "a1", "bg", "bg1", "pad", "b", "solo"]
        );
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_in_order() {
        let tree = vec![
            text("dup").with_modifier(Node::modifier(
                "dup",
                Modifier::Padding(PaddingArgs::default()),
            )),
        ];
        assert!(!select(&tree, "dup").unwrap().item.is_modifier());
    }

    #[test]
    fn test_resolve_rejects_bad_paths() {
        let tree = sample();
        assert!(resolve(&tree, &[]).is_none());
        assert!(resolve(&tree, &[PathStep::modifier(0)]).is_none());
        assert!(resolve(&tree, &[PathStep::block(1), PathStep::block(0)]).is_none());
        assert!(resolve(&tree, &[PathStep::block(9)]).is_none());
    }

    #[test]
    fn test_select_mut_edits_in_place() {
        let mut tree = sample();
        let (_, node) = select_mut(&mut tree, "b").unwrap();
        node.id = "renamed".to_string();
        assert!(select(&tree, "renamed").is_some());
        assert!(select(&tree, "b").is_none());
    }

    #[test]
    fn test_remove_at() {
        let mut tree = sample();
        let path = select(&tree, "pad").unwrap().path;
        assert_eq!(remove_at(&mut tree, &path).unwrap().id, "pad");
        assert!(select(&tree, "pad").is_none());
        assert!(select(&tree, "bg").is_some());

        let path = select(&tree, "root").unwrap().path;
        let removed = remove_at(&mut tree, &path).unwrap();
        assert_eq!(removed.content().unwrap().len(), 2);
        assert_eq!(tree.len(), 1);
        assert!(select(&tree, "a1").is_none());

        assert!(remove_at(&mut tree, &[PathStep::block(5)]).is_none());
    }
}
