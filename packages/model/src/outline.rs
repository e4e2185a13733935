use crate::node::*;
use std::fmt::Write;

/// Outliner renders the editable block tree as indented text
///
/// One line per block. A view's children come first, then its modifiers as
/// `.name(args)` lines at the same depth. Background modifiers list their own
/// content one level deeper.
pub struct Outliner {
    indent_level: usize,
    indent_string: String,
}

impl Outliner {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            indent_string: "  ".to_string(),
        }
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent_level: 0,
            indent_string: indent.to_string(),
        }
    }

    /// Outline a forest of top-level nodes
    pub fn outline(&mut self, tree: &[Node]) -> String {
        let mut output = String::new();
        for node in tree {
            self.outline_node(node, &mut output);
        }
        output
    }

    fn outline_node(&mut self, node: &Node, output: &mut String) {
        self.write_indent(output);
        output.push_str(&head(node));
        output.push('\n');

        self.indent_level += 1;
        if let Some(content) = node.content() {
            for child in content {
                self.outline_node(child, output);
            }
        }
        if let Some(modifiers) = node.modifiers() {
            for modifier in modifiers {
                self.outline_node(modifier, output);
            }
        }
        self.indent_level -= 1;
    }

    fn write_indent(&self, output: &mut String) {
        for _ in 0..self.indent_level {
            output.push_str(&self.indent_string);
        }
    }
}

impl Default for Outliner {
    fn default() -> Self {
        Self::new()
    }
}

/// Outline with the default two-space indent
pub fn outline(tree: &[Node]) -> String {
    Outliner::new().outline(tree)
}

fn head(node: &Node) -> String {
    match &node.block {
        Block::View(view) => view_head(&view.kind),
        Block::Control(Control::If(args)) => format!("if {}", args.condition),
        Block::Modifier(modifier) => modifier_head(modifier),
        Block::Template(Template::Content(_)) => "content".to_string(),
        Block::Template(Template::Code(_)) => "code".to_string(),
    }
}

fn view_head(view: &View) -> String {
    match view {
        View::Color(args) => format!("Color(.{})", args.color),
        View::Spacer(args) => match args.min_length {
            Some(min) => format!("Spacer(minLength: {})", min),
            None => "Spacer()".to_string(),
        },
        View::Text(args) => format!("Text({})", args.value),
        View::Image(args) => format!("Image(systemName: \"{}\")", args.system_name),
        View::HStack(args) => stack_head("HStack", args),
        View::VStack(args) => stack_head("VStack", args),
        View::ZStack(args) => stack_head("ZStack", args),
        View::ForEach(args) => {
            let mut head = format!("ForEach({}, id: \\.{})", args.data, args.id);
            if let Some(item) = &args.item {
                let _ = write!(head, " {{ {} in }}", item);
            }
            head
        }
    }
}

fn stack_head(name: &str, args: &StackArgs) -> String {
    match args.spacing {
        Some(spacing) => format!("{}(spacing: {})", name, spacing),
        None => name.to_string(),
    }
}

fn modifier_head(modifier: &Modifier) -> String {
    match modifier {
        Modifier::Font(args) => format!(".font(.{})", args.font),
        Modifier::ForegroundColor(args) => format!(".foregroundColor(.{})", args.color),
        Modifier::Background(_) => ".background".to_string(),
        Modifier::Padding(args) => match args.amount {
            Some(amount) => format!(".padding({})", amount),
            None => ".padding()".to_string(),
        },
        Modifier::Frame(args) => {
            let mut parts = Vec::new();
            if let Some(width) = args.width {
                parts.push(format!("width: {}", width));
            }
            if let Some(height) = args.height {
                parts.push(format!("height: {}", height));
            }
            format!(".frame({})", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_nested_tree() {
        let tree = vec![Node::view(
            "stack",
            View::VStack(StackArgs {
                spacing: Some(8.0),
                content: vec![
                    Node::view(
                        "title",
                        View::Text(TextArgs {
                            value: "\"Hello\"".to_string(),
                        }),
                    )
                    .with_modifier(Node::modifier(
                        "font",
                        Modifier::Font(FontArgs {
                            font: FontStyle::Title,
                        }),
                    ))
                    .with_modifier(Node::modifier(
                        "bg",
                        Modifier::Background(BackgroundArgs {
                            content: vec![Node::view(
                                "fill",
                                View::Color(ColorArgs {
                                    color: NamedColor::Yellow,
                                }),
                            )],
                        }),
                    )),
                    Node::control(
                        "cond",
                        Control::If(IfArgs {
                            condition: "$0.completed".to_string(),
                            content: vec![Node::view("gap", View::Spacer(SpacerArgs::default()))],
                        }),
                    ),
                ],
            }),
        )];

        let expected = "\
VStack(spacing: 8)
  Text(\"Hello\")
    .font(.title)
    .background
      Color(.yellow)
  if $0.completed
    Spacer()
";
        assert_eq!(outline(&tree), expected);
    }

    #[test]
    fn test_outline_for_each_and_frame() {
        let tree = vec![Node::view(
            "list",
            View::ForEach(ForEachArgs {
                data: "todos".to_string(),
                id: "id".to_string(),
                item: Some("todo".to_string()),
                content: vec![],
            }),
        )
        .with_modifier(Node::modifier(
            "frame",
            Modifier::Frame(FrameArgs {
                width: Some(100.0),
                height: None,
            }),
        ))];

        let mut outliner = Outliner::with_indent("\t");
        assert_eq!(
            outliner.outline(&tree),
            "ForEach(todos, id: \\.id) { todo in }\n\t.frame(width: 100)\n"
        );
    }

    #[test]
    fn test_outline_empty() {
        assert_eq!(outline(&[]), "");
    }
}
