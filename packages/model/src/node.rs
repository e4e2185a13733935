use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a node within a tree
pub type NodeId = String;

/// Block tree element
///
/// Serialized as `{"id", "blockType", "type", "args", "modifiers"}`, the shape
/// drag payloads and lesson fixtures use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(flatten)]
    pub block: Block,
}

/// First-level tag: decides which editor operations are legal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockType", rename_all = "lowercase")]
pub enum Block {
    View(ViewBlock),
    Control(Control),
    Modifier(Modifier),
    Template(Template),
}

/// A view plus the modifiers attached to it
///
/// Modifiers are stored outer-to-inner: the last entry sits closest to the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewBlock {
    #[serde(flatten)]
    pub kind: View,
    #[serde(default)]
    pub modifiers: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args")]
pub enum View {
    Color(ColorArgs),
    Spacer(SpacerArgs),
    Text(TextArgs),
    Image(ImageArgs),
    HStack(StackArgs),
    VStack(StackArgs),
    ZStack(StackArgs),
    ForEach(ForEachArgs),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args", rename_all = "lowercase")]
pub enum Control {
    If(IfArgs),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args", rename_all = "camelCase")]
pub enum Modifier {
    Font(FontArgs),
    ForegroundColor(ForegroundColorArgs),
    Background(BackgroundArgs),
    Padding(PaddingArgs),
    Frame(FrameArgs),
}

/// Root-level scenario wrappers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args", rename_all = "lowercase")]
pub enum Template {
    /// Renders its content as a live preview
    Content(TemplateArgs),
    /// Renders the block outline of its content
    Code(TemplateArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamedColor {
    Red,
    Orange,
    Yellow,
    Green,
    Mint,
    Teal,
    Blue,
    Indigo,
    Purple,
    Pink,
    Brown,
    Gray,
    Black,
    White,
    Primary,
    Secondary,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    LargeTitle,
    Title,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorArgs {
    pub color: NamedColor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextArgs {
    /// Scope path or literal, optionally quoted
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageArgs {
    pub system_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForEachArgs {
    /// Dotted scope path of the collection
    pub data: String,
    /// Element field used for de-duplication, or `self`
    pub id: String,
    /// Binding name for the current element; the evaluator default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfArgs {
    pub condition: String,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontArgs {
    pub font: FontStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForegroundColorArgs {
    pub color: NamedColor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackgroundArgs {
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaddingArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateArgs {
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    View,
    Control,
    Modifier,
    Template,
}

/// Two-level type tag, unique across block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    View(ViewType),
    Control(ControlType),
    Modifier(ModifierType),
    Template(TemplateType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    Color,
    Spacer,
    Text,
    Image,
    HStack,
    VStack,
    ZStack,
    ForEach,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlType {
    If,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierType {
    Font,
    ForegroundColor,
    Background,
    Padding,
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateType {
    Content,
    Code,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, block: Block) -> Self {
        Self {
            id: id.into(),
            block,
        }
    }

    pub fn view(id: impl Into<NodeId>, kind: View) -> Self {
        Self::new(
            id,
            Block::View(ViewBlock {
                kind,
                modifiers: Vec::new(),
            }),
        )
    }

    pub fn control(id: impl Into<NodeId>, control: Control) -> Self {
        Self::new(id, Block::Control(control))
    }

    pub fn modifier(id: impl Into<NodeId>, modifier: Modifier) -> Self {
        Self::new(id, Block::Modifier(modifier))
    }

    pub fn template(id: impl Into<NodeId>, template: Template) -> Self {
        Self::new(id, Block::Template(template))
    }

    /// Append a modifier (builder style). Ignored on non-view nodes.
    pub fn with_modifier(mut self, modifier: Node) -> Self {
        if let Some(modifiers) = self.modifiers_mut() {
            modifiers.push(modifier);
        }
        self
    }

    /// Append a child (builder style). Ignored on leaf nodes.
    pub fn with_child(mut self, child: Node) -> Self {
        if let Some(content) = self.content_mut() {
            content.push(child);
        }
        self
    }

    pub fn block_type(&self) -> BlockType {
        self.block.block_type()
    }

    pub fn node_type(&self) -> NodeType {
        self.block.node_type()
    }

    pub fn is_modifier(&self) -> bool {
        matches!(self.block, Block::Modifier(_))
    }

    /// Child nodes, if this node's args carry a `content` field
    pub fn content(&self) -> Option<&Vec<Node>> {
        match &self.block {
            Block::View(view) => view.kind.content(),
            Block::Control(Control::If(args)) => Some(&args.content),
            Block::Modifier(Modifier::Background(args)) => Some(&args.content),
            Block::Modifier(_) => None,
            Block::Template(Template::Content(args) | Template::Code(args)) => Some(&args.content),
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.block {
            Block::View(view) => view.kind.content_mut(),
            Block::Control(Control::If(args)) => Some(&mut args.content),
            Block::Modifier(Modifier::Background(args)) => Some(&mut args.content),
            Block::Modifier(_) => None,
            Block::Template(Template::Content(args) | Template::Code(args)) => {
                Some(&mut args.content)
            }
        }
    }

    /// Attached modifiers; only views have them
    pub fn modifiers(&self) -> Option<&Vec<Node>> {
        match &self.block {
            Block::View(view) => Some(&view.modifiers),
            _ => None,
        }
    }

    pub fn modifiers_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.block {
            Block::View(view) => Some(&mut view.modifiers),
            _ => None,
        }
    }
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::View(_) => BlockType::View,
            Block::Control(_) => BlockType::Control,
            Block::Modifier(_) => BlockType::Modifier,
            Block::Template(_) => BlockType::Template,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Block::View(view) => NodeType::View(view.kind.view_type()),
            Block::Control(Control::If(_)) => NodeType::Control(ControlType::If),
            Block::Modifier(modifier) => NodeType::Modifier(modifier.modifier_type()),
            Block::Template(Template::Content(_)) => NodeType::Template(TemplateType::Content),
            Block::Template(Template::Code(_)) => NodeType::Template(TemplateType::Code),
        }
    }
}

impl View {
    pub fn view_type(&self) -> ViewType {
        match self {
            View::Color(_) => ViewType::Color,
            View::Spacer(_) => ViewType::Spacer,
            View::Text(_) => ViewType::Text,
            View::Image(_) => ViewType::Image,
            View::HStack(_) => ViewType::HStack,
            View::VStack(_) => ViewType::VStack,
            View::ZStack(_) => ViewType::ZStack,
            View::ForEach(_) => ViewType::ForEach,
        }
    }

    pub fn content(&self) -> Option<&Vec<Node>> {
        match self {
            View::HStack(args) | View::VStack(args) | View::ZStack(args) => Some(&args.content),
            View::ForEach(args) => Some(&args.content),
            View::Color(_) | View::Spacer(_) | View::Text(_) | View::Image(_) => None,
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            View::HStack(args) | View::VStack(args) | View::ZStack(args) => {
                Some(&mut args.content)
            }
            View::ForEach(args) => Some(&mut args.content),
            View::Color(_) | View::Spacer(_) | View::Text(_) | View::Image(_) => None,
        }
    }
}

impl Modifier {
    pub fn modifier_type(&self) -> ModifierType {
        match self {
            Modifier::Font(_) => ModifierType::Font,
            Modifier::ForegroundColor(_) => ModifierType::ForegroundColor,
            Modifier::Background(_) => ModifierType::Background,
            Modifier::Padding(_) => ModifierType::Padding,
            Modifier::Frame(_) => ModifierType::Frame,
        }
    }
}

impl NodeType {
    pub fn block_type(&self) -> BlockType {
        match self {
            NodeType::View(_) => BlockType::View,
            NodeType::Control(_) => BlockType::Control,
            NodeType::Modifier(_) => BlockType::Modifier,
            NodeType::Template(_) => BlockType::Template,
        }
    }

    /// Tag as it appears in the `type` field on the wire
    pub fn name(&self) -> &'static str {
        match self {
            NodeType::View(ViewType::Color) => "Color",
            NodeType::View(ViewType::Spacer) => "Spacer",
            NodeType::View(ViewType::Text) => "Text",
            NodeType::View(ViewType::Image) => "Image",
            NodeType::View(ViewType::HStack) => "HStack",
            NodeType::View(ViewType::VStack) => "VStack",
            NodeType::View(ViewType::ZStack) => "ZStack",
            NodeType::View(ViewType::ForEach) => "ForEach",
            NodeType::Control(ControlType::If) => "if",
            NodeType::Modifier(ModifierType::Font) => "font",
            NodeType::Modifier(ModifierType::ForegroundColor) => "foregroundColor",
            NodeType::Modifier(ModifierType::Background) => "background",
            NodeType::Modifier(ModifierType::Padding) => "padding",
            NodeType::Modifier(ModifierType::Frame) => "frame",
            NodeType::Template(TemplateType::Content) => "content",
            NodeType::Template(TemplateType::Code) => "code",
        }
    }

    pub const ALL: [NodeType; 16] = [
        NodeType::View(ViewType::Color),
        NodeType::View(ViewType::Spacer),
        NodeType::View(ViewType::Text),
        NodeType::View(ViewType::Image),
        NodeType::View(ViewType::HStack),
        NodeType::View(ViewType::VStack),
        NodeType::View(ViewType::ZStack),
        NodeType::View(ViewType::ForEach),
        NodeType::Control(ControlType::If),
        NodeType::Modifier(ModifierType::Font),
        NodeType::Modifier(ModifierType::ForegroundColor),
        NodeType::Modifier(ModifierType::Background),
        NodeType::Modifier(ModifierType::Padding),
        NodeType::Modifier(ModifierType::Frame),
        NodeType::Template(TemplateType::Content),
        NodeType::Template(TemplateType::Code),
    ];

    /// Look up a tag by block type and wire name
    pub fn parse(block_type: BlockType, name: &str) -> Option<NodeType> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.block_type() == block_type && t.name() == name)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockType::View => "view",
            BlockType::Control => "control",
            BlockType::Modifier => "modifier",
            BlockType::Template => "template",
        };
        f.write_str(name)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.block_type(), self.name())
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamedColor::Red => "red",
            NamedColor::Orange => "orange",
            NamedColor::Yellow => "yellow",
            NamedColor::Green => "green",
            NamedColor::Mint => "mint",
            NamedColor::Teal => "teal",
            NamedColor::Blue => "blue",
            NamedColor::Indigo => "indigo",
            NamedColor::Purple => "purple",
            NamedColor::Pink => "pink",
            NamedColor::Brown => "brown",
            NamedColor::Gray => "gray",
            NamedColor::Black => "black",
            NamedColor::White => "white",
            NamedColor::Primary => "primary",
            NamedColor::Secondary => "secondary",
            NamedColor::Clear => "clear",
        };
        f.write_str(name)
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontStyle::LargeTitle => "largeTitle",
            FontStyle::Title => "title",
            FontStyle::Headline => "headline",
            FontStyle::Subheadline => "subheadline",
            FontStyle::Body => "body",
            FontStyle::Callout => "callout",
            FontStyle::Footnote => "footnote",
            FontStyle::Caption => "caption",
        };
        f.write_str(name)
    }
}
