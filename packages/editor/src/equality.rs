//! # Structural Equality
//!
//! Compares two trees while ignoring node ids. Everything else counts: tree
//! shape, block types, types, args (including nested content) and modifier
//! order.

use stackblocks_common::{walk_node_mut, VisitorMut};
use stackblocks_model::Node;

/// Blanks every id it visits
struct Anonymizer;

impl VisitorMut for Anonymizer {
    fn visit_node_mut(&mut self, node: &mut Node) {
        node.id.clear();
        walk_node_mut(self, node);
    }

    fn visit_modifier_mut(&mut self, modifier: &mut Node) {
        modifier.id.clear();
        walk_node_mut(self, modifier);
    }
}

/// Copy of `tree` with all ids emptied
pub fn anonymize(tree: &[Node]) -> Vec<Node> {
    let mut copy = tree.to_vec();
    Anonymizer.visit_tree_mut(&mut copy);
    copy
}

pub fn structurally_equal(a: &[Node], b: &[Node]) -> bool {
    a.len() == b.len() && anonymize(a) == anonymize(b)
}
