use crate::evaluator::EvalError;
use serde::Serialize;
use stackblocks_model::{FontStyle, NamedColor};
use std::fmt;

/// Presentation attributes merged onto a rendered view
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<NamedColor>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        self.font.is_none() && self.foreground_color.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
    Depth,
}

/// Preview output node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    Color {
        color: NamedColor,
        style: Style,
    },
    Spacer {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_length: Option<f64>,
    },
    Text {
        content: String,
        style: Style,
    },
    Image {
        system_name: String,
        style: Style,
    },
    Stack {
        axis: Axis,
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<f64>,
        children: Vec<RenderNode>,
        style: Style,
    },
    /// Transparent sequence produced by `if`, ForEach and content templates
    Group { children: Vec<RenderNode> },
    /// Host drawn over a layer rendered from the modifier's own content
    Background {
        content: Box<RenderNode>,
        layer: Vec<RenderNode>,
    },
    Padding {
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<f64>,
        content: Box<RenderNode>,
    },
    Frame {
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
        content: Box<RenderNode>,
    },
    /// Block outline shown by code templates
    Code { source: String },
}

impl RenderNode {
    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text {
            content: content.into(),
            style: Style::default(),
        }
    }

    pub fn group(children: Vec<RenderNode>) -> Self {
        RenderNode::Group { children }
    }

    /// Set the font unless a modifier closer to the host already did
    pub fn apply_font(&mut self, font: FontStyle) {
        self.apply_style(&|style: &mut Style| {
            style.font.get_or_insert(font);
        });
    }

    pub fn apply_foreground_color(&mut self, color: NamedColor) {
        self.apply_style(&|style: &mut Style| {
            style.foreground_color.get_or_insert(color);
        });
    }

    fn apply_style(&mut self, update: &dyn Fn(&mut Style)) {
        match self {
            RenderNode::Color { style, .. }
            | RenderNode::Text { style, .. }
            | RenderNode::Image { style, .. }
            | RenderNode::Stack { style, .. } => update(style),
            RenderNode::Group { children } => {
                for child in children {
                    child.apply_style(update);
                }
            }
            RenderNode::Background { content, .. }
            | RenderNode::Padding { content, .. }
            | RenderNode::Frame { content, .. } => content.apply_style(update),
            RenderNode::Spacer { .. } | RenderNode::Code { .. } => {}
        }
    }

    /// Visible text in render order, handy for assertions and the CLI
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RenderNode::Text { content, .. } => out.push(content),
            RenderNode::Stack { children, .. } | RenderNode::Group { children } => {
                for child in children {
                    child.collect_texts(out);
                }
            }
            RenderNode::Background { content, layer } => {
                for child in layer {
                    child.collect_texts(out);
                }
                content.collect_texts(out);
            }
            RenderNode::Padding { content, .. } | RenderNode::Frame { content, .. } => {
                content.collect_texts(out)
            }
            RenderNode::Color { .. }
            | RenderNode::Spacer { .. }
            | RenderNode::Image { .. }
            | RenderNode::Code { .. } => {}
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            RenderNode::Color { color, style } => {
                writeln!(f, "{}Color {}{}", indent, color, StyleSuffix(style))
            }
            RenderNode::Spacer { .. } => writeln!(f, "{}Spacer", indent),
            RenderNode::Text { content, style } => {
                writeln!(f, "{}Text {:?}{}", indent, content, StyleSuffix(style))
            }
            RenderNode::Image { system_name, style } => {
                writeln!(f, "{}Image {}{}", indent, system_name, StyleSuffix(style))
            }
            RenderNode::Stack {
                axis,
                children,
                style,
                ..
            } => {
                let name = match axis {
                    Axis::Horizontal => "HStack",
                    Axis::Vertical => "VStack",
                    Axis::Depth => "ZStack",
                };
                writeln!(f, "{}{}{}", indent, name, StyleSuffix(style))?;
                for child in children {
                    child.write_tree(f, depth + 1)?;
                }
                Ok(())
            }
            RenderNode::Group { children } => {
                for child in children {
                    child.write_tree(f, depth)?;
                }
                Ok(())
            }
            RenderNode::Background { content, layer } => {
                writeln!(f, "{}Background", indent)?;
                for child in layer {
                    child.write_tree(f, depth + 1)?;
                }
                content.write_tree(f, depth + 1)
            }
            RenderNode::Padding { content, .. } => {
                writeln!(f, "{}Padding", indent)?;
                content.write_tree(f, depth + 1)
            }
            RenderNode::Frame {
                width,
                height,
                content,
            } => {
                writeln!(f, "{}Frame {:?}x{:?}", indent, width, height)?;
                content.write_tree(f, depth + 1)
            }
            RenderNode::Code { source } => {
                for line in source.lines() {
                    writeln!(f, "{}| {}", indent, line)?;
                }
                Ok(())
            }
        }
    }
}

struct StyleSuffix<'a>(&'a Style);

impl fmt::Display for StyleSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" [")?;
        let mut first = true;
        if let Some(font) = self.0.font {
            write!(f, "font: {}", font)?;
            first = false;
        }
        if let Some(color) = self.0.foreground_color {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "foregroundColor: {}", color)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

/// Rendered top-level nodes plus any soft failures met on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preview {
    pub nodes: Vec<RenderNode>,
    pub diagnostics: Vec<EvalError>,
}

impl Preview {
    pub fn texts(&self) -> Vec<&str> {
        self.nodes.iter().flat_map(|node| node.texts()).collect()
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            node.write_tree(f, 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_style_wins() {
        let mut node = RenderNode::text("Hi");
        node.apply_font(FontStyle::Title);
        node.apply_font(FontStyle::Caption);
        node.apply_foreground_color(NamedColor::Red);

        assert_eq!(
            node,
            RenderNode::Text {
                content: "Hi".to_string(),
                style: Style {
                    font: Some(FontStyle::Title),
                    foreground_color: Some(NamedColor::Red),
                },
            }
        );
    }

    #[test]
    fn test_style_reaches_host_through_wrappers() {
        let mut node = RenderNode::Padding {
            amount: None,
            content: Box::new(RenderNode::group(vec![
                RenderNode::text("a"),
                RenderNode::text("b"),
            ])),
        };
        node.apply_foreground_color(NamedColor::Blue);

        let RenderNode::Padding { content, .. } = &node else {
            panic!("Expected padding");
        };
        let RenderNode::Group { children } = content.as_ref() else {
            panic!("Expected group");
        };
        for child in children {
            let RenderNode::Text { style, .. } = child else {
                panic!("Expected text");
            };
            assert_eq!(style.foreground_color, Some(NamedColor::Blue));
        }
    }

    #[test]
    fn test_display_tree() {
        let node = RenderNode::Stack {
            axis: Axis::Vertical,
            spacing: None,
            children: vec![RenderNode::text("Milk"), RenderNode::Spacer { min_length: None }],
            style: Style {
                font: Some(FontStyle::Headline),
                foreground_color: None,
            },
        };

        assert_eq!(
            node.to_string(),
            "VStack [font: headline]\n  Text \"Milk\"\n  Spacer\n"
        );
    }
}
