//! # Scope Evaluator
//!
//! Walks a block tree against a [`Scope`] and produces the preview the
//! learner sees. Evaluation is a pure function of `(node, scope)`: nothing is
//! cached between calls and the whole tree is re-rendered on every change.
//!
//! ## Soft failures
//!
//! A half-configured block is a normal authoring state, so resolution
//! failures never abort a render. The offending node renders nothing, an
//! [`EvalError`] is recorded as a diagnostic and logged with `warn!`:
//!
//! - `if` whose condition is neither a boolean in scope nor `true`/`false`
//! - ForEach whose `data` does not resolve to an array
//! - ForEach with an element lacking the configured id field
//!
//! ## Modifier composition
//!
//! A view's modifiers are applied last-to-first: the final entry wraps the
//! view directly and each earlier entry wraps the result. Font and colour
//! attributes set closer to the view win over outer ones.

use crate::preview::{Axis, Preview, RenderNode};
use crate::scope::Scope;
use stackblocks_model::*;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Binding name used when a ForEach does not configure one
pub const DEFAULT_BINDING: &str = "$0";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Condition '{condition}' on {node_id} does not resolve to a boolean")]
    UnresolvedCondition { node_id: NodeId, condition: String },

    #[error("ForEach data '{path}' on {node_id} is not an array")]
    DataNotArray { node_id: NodeId, path: String },

    #[error("ForEach element {index} on {node_id} has no '{key}' field")]
    MissingIdKey {
        node_id: NodeId,
        key: String,
        index: usize,
    },
}

impl EvalError {
    pub fn node_id(&self) -> &str {
        match self {
            EvalError::UnresolvedCondition { node_id, .. }
            | EvalError::DataNotArray { node_id, .. }
            | EvalError::MissingIdKey { node_id, .. } => node_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorOptions {
    /// Binding name for ForEach elements when the block leaves `item` unset
    pub default_binding: String,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            default_binding: DEFAULT_BINDING.to_string(),
        }
    }
}

/// Evaluator
#[derive(Debug, Default)]
pub struct Evaluator {
    options: EvaluatorOptions,
    diagnostics: Vec<EvalError>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Soft failures recorded since the last `take_diagnostics`
    pub fn diagnostics(&self) -> &[EvalError] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<EvalError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Render every top-level node of an editor snapshot
    #[instrument(skip(self, state), fields(nodes = state.tree.len()))]
    pub fn render_tree(&mut self, state: &EditorState) -> Preview {
        self.diagnostics.clear();
        let scope = Scope::new(&state.scope);
        let nodes = self.render_children(&state.tree, &scope);
        debug!(rendered = nodes.len(), "Rendered preview");

        Preview {
            nodes,
            diagnostics: self.take_diagnostics(),
        }
    }

    /// Render one node; `None` means the node contributes nothing
    pub fn render(&mut self, node: &Node, scope: &Scope<'_>) -> Option<RenderNode> {
        match &node.block {
            Block::View(view) => {
                let host = self.render_view(node, &view.kind, scope)?;
                Some(self.apply_modifiers(host, &view.modifiers, scope))
            }

            Block::Control(Control::If(args)) => match resolve_condition(&args.condition, scope)
            {
                Some(true) => Some(RenderNode::group(self.render_children(&args.content, scope))),
                Some(false) => None,
                None => {
                    self.report(EvalError::UnresolvedCondition {
                        node_id: node.id.clone(),
                        condition: args.condition.clone(),
                    });
                    None
                }
            },

            // A modifier means nothing without a host view
            Block::Modifier(_) => None,

            Block::Template(Template::Content(args)) => {
                Some(RenderNode::group(self.render_children(&args.content, scope)))
            }

            Block::Template(Template::Code(args)) => Some(RenderNode::Code {
                source: outline(&args.content),
            }),
        }
    }

    fn render_children(&mut self, content: &[Node], scope: &Scope<'_>) -> Vec<RenderNode> {
        content
            .iter()
            .filter_map(|child| self.render(child, scope))
            .collect()
    }

    fn render_view(&mut self, node: &Node, view: &View, scope: &Scope<'_>) -> Option<RenderNode> {
        let rendered = match view {
            View::Color(args) => RenderNode::Color {
                color: args.color,
                style: Default::default(),
            },
            View::Spacer(args) => RenderNode::Spacer {
                min_length: args.min_length,
            },
            View::Text(args) => RenderNode::text(resolve_text(&args.value, scope)),
            View::Image(args) => RenderNode::Image {
                system_name: args.system_name.clone(),
                style: Default::default(),
            },
            View::HStack(args) => self.render_stack(Axis::Horizontal, args, scope),
            View::VStack(args) => self.render_stack(Axis::Vertical, args, scope),
            View::ZStack(args) => self.render_stack(Axis::Depth, args, scope),
            View::ForEach(args) => return self.render_for_each(node, args, scope),
        };
        Some(rendered)
    }

    fn render_stack(&mut self, axis: Axis, args: &StackArgs, scope: &Scope<'_>) -> RenderNode {
        RenderNode::Stack {
            axis,
            spacing: args.spacing,
            children: self.render_children(&args.content, scope),
            style: Default::default(),
        }
    }

    fn render_for_each(
        &mut self,
        node: &Node,
        args: &ForEachArgs,
        scope: &Scope<'_>,
    ) -> Option<RenderNode> {
        let Some(items) = scope.lookup(&args.data).and_then(Value::as_array) else {
            self.report(EvalError::DataNotArray {
                node_id: node.id.clone(),
                path: args.data.clone(),
            });
            return None;
        };

        let binding = args
            .item
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.options.default_binding.as_str())
            .to_string();

        let mut seen: Vec<&Value> = Vec::new();
        let mut children = Vec::new();

        for (index, item) in items.iter().enumerate() {
            let Some(key) = element_key(item, &args.id) else {
                self.report(EvalError::MissingIdKey {
                    node_id: node.id.clone(),
                    key: args.id.clone(),
                    index,
                });
                return None;
            };

            if seen.contains(&key) {
                debug!(node_id = %node.id, index, "Skipping duplicate ForEach element");
                continue;
            }
            seen.push(key);

            let item_scope = scope.extend(&binding, item);
            children.extend(self.render_children(&args.content, &item_scope));
        }

        Some(RenderNode::group(children))
    }

    fn apply_modifiers(
        &mut self,
        host: RenderNode,
        modifiers: &[Node],
        scope: &Scope<'_>,
    ) -> RenderNode {
        modifiers.iter().rev().fold(host, |current, modifier| {
            let Block::Modifier(kind) = &modifier.block else {
                debug!(node_id = %modifier.id, "Ignoring non-modifier in modifiers");
                return current;
            };
            self.apply_modifier(current, kind, scope)
        })
    }

    fn apply_modifier(
        &mut self,
        mut current: RenderNode,
        modifier: &Modifier,
        scope: &Scope<'_>,
    ) -> RenderNode {
        match modifier {
            Modifier::Font(args) => {
                current.apply_font(args.font);
                current
            }
            Modifier::ForegroundColor(args) => {
                current.apply_foreground_color(args.color);
                current
            }
            Modifier::Background(args) => RenderNode::Background {
                content: Box::new(current),
                layer: self.render_children(&args.content, scope),
            },
            Modifier::Padding(args) => RenderNode::Padding {
                amount: args.amount,
                content: Box::new(current),
            },
            Modifier::Frame(args) => RenderNode::Frame {
                width: args.width,
                height: args.height,
                content: Box::new(current),
            },
        }
    }

    fn report(&mut self, error: EvalError) {
        warn!(error = %error, "Block could not be resolved against scope");
        self.diagnostics.push(error);
    }
}

/// Render a single node with default options, discarding diagnostics
pub fn render(node: &Node, scope: &Scope<'_>) -> Option<RenderNode> {
    Evaluator::new().render(node, scope)
}

/// Boolean in scope first, then the literals `true` / `false`
pub fn resolve_condition(condition: &str, scope: &Scope<'_>) -> Option<bool> {
    let condition = condition.trim();
    if let Some(value) = scope.lookup(condition).and_then(Value::as_bool) {
        return Some(value);
    }

    match condition {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// A string bound at the value's path, otherwise the literal with wrapping
/// quotes stripped and `\(path)` segments interpolated
pub fn resolve_text(value: &str, scope: &Scope<'_>) -> String {
    if let Some(text) = scope.lookup(value).and_then(Value::as_str) {
        return text.to_string();
    }

    interpolate(strip_wrapping_quotes(value), scope)
}

/// Remove one matching pair of `"` or `'` around the whole literal
fn strip_wrapping_quotes(literal: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            literal
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(literal)
}

fn interpolate(literal: &str, scope: &Scope<'_>) -> String {
    let mut output = String::with_capacity(literal.len());
    let mut rest = literal;

    while let Some(start) = rest.find("\\(") {
        let after = &rest[start + 2..];
        let Some(end) = after.find(')') else {
            break;
        };

        output.push_str(&rest[..start]);
        match scope.lookup(&after[..end]) {
            Some(value) => output.push_str(&value.to_string()),
            // Unresolved segments stay visible so the learner can spot them
            None => output.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    output.push_str(rest);
    output
}

fn element_key<'v>(item: &'v Value, id: &str) -> Option<&'v Value> {
    match id.trim() {
        "self" | "\\.self" => Some(item),
        key => item.get(key.strip_prefix("\\.").unwrap_or(key)),
    }
}
