use stackblocks_model::Node;

/// Visitor pattern for traversing block trees immutably
///
/// Default implementations walk the entire tree: a node's content first, then
/// its modifiers, both left to right. Override `visit_node` or
/// `visit_modifier` to act on nodes; call the matching `walk_*` to keep
/// descending.
pub trait Visitor: Sized {
    fn visit_tree(&mut self, tree: &[Node]) {
        walk_tree(self, tree);
    }

    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    /// Called for entries of a view's `modifiers` array
    fn visit_modifier(&mut self, modifier: &Node) {
        walk_node(self, modifier);
    }
}

/// Mutable visitor pattern for transforming block trees
pub trait VisitorMut: Sized {
    fn visit_tree_mut(&mut self, tree: &mut [Node]) {
        walk_tree_mut(self, tree);
    }

    fn visit_node_mut(&mut self, node: &mut Node) {
        walk_node_mut(self, node);
    }

    fn visit_modifier_mut(&mut self, modifier: &mut Node) {
        walk_node_mut(self, modifier);
    }
}

// Default walk implementations for immutable visitor

pub fn walk_tree<V: Visitor>(visitor: &mut V, tree: &[Node]) {
    for node in tree {
        visitor.visit_node(node);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    if let Some(content) = node.content() {
        for child in content {
            visitor.visit_node(child);
        }
    }
    if let Some(modifiers) = node.modifiers() {
        for modifier in modifiers {
            visitor.visit_modifier(modifier);
        }
    }
}

// Default walk implementations for mutable visitor

pub fn walk_tree_mut<V: VisitorMut>(visitor: &mut V, tree: &mut [Node]) {
    for node in tree {
        visitor.visit_node_mut(node);
    }
}

pub fn walk_node_mut<V: VisitorMut>(visitor: &mut V, node: &mut Node) {
    if let Some(content) = node.content_mut() {
        for child in content {
            visitor.visit_node_mut(child);
        }
    }
    if let Some(modifiers) = node.modifiers_mut() {
        for modifier in modifiers {
            visitor.visit_modifier_mut(modifier);
        }
    }
}

/// Collects every id in visiting order
#[derive(Debug, Default)]
pub struct IdCollector<'a> {
    pub ids: Vec<&'a str>,
}

impl<'a> IdCollector<'a> {
    pub fn collect(tree: &'a [Node]) -> Vec<&'a str> {
        let mut collector = IdCollector::default();
        for node in tree {
            collector.push(node);
        }
        collector.ids
    }

    // The lifetime-carrying walk can't go through `Visitor`, whose methods
    // borrow per call.
    fn push(&mut self, node: &'a Node) {
        self.ids.push(&node.id);
        if let Some(content) = node.content() {
            for child in content {
                self.push(child);
            }
        }
        if let Some(modifiers) = node.modifiers() {
            for modifier in modifiers {
                self.push(modifier);
            }
        }
    }
}
