//! Palette factories: every block starts life here with a fresh id and
//! default args.

use crate::id_generator::IdGenerator;
use crate::node::*;

/// Creates palette blocks
#[derive(Debug, Clone)]
pub struct NodeFactory {
    ids: IdGenerator,
}

impl NodeFactory {
    pub fn new(ids: IdGenerator) -> Self {
        Self { ids }
    }

    /// Create a node of the given type with default args
    pub fn create(&mut self, node_type: NodeType) -> Node {
        Node::new(self.ids.new_id(), default_block(node_type))
    }

    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }
}

/// Default args for a fresh block
pub fn default_block(node_type: NodeType) -> Block {
    match node_type {
        NodeType::View(view_type) => Block::View(ViewBlock {
            kind: default_view(view_type),
            modifiers: Vec::new(),
        }),
        NodeType::Control(ControlType::If) => Block::Control(Control::If(IfArgs {
            condition: "true".to_string(),
            content: Vec::new(),
        })),
        NodeType::Modifier(modifier_type) => Block::Modifier(default_modifier(modifier_type)),
        NodeType::Template(TemplateType::Content) => {
            Block::Template(Template::Content(TemplateArgs::default()))
        }
        NodeType::Template(TemplateType::Code) => {
            Block::Template(Template::Code(TemplateArgs::default()))
        }
    }
}

fn default_view(view_type: ViewType) -> View {
    match view_type {
        ViewType::Color => View::Color(ColorArgs {
            color: NamedColor::Blue,
        }),
        ViewType::Spacer => View::Spacer(SpacerArgs::default()),
        ViewType::Text => View::Text(TextArgs {
            value: "Text".to_string(),
        }),
        ViewType::Image => View::Image(ImageArgs {
            system_name: "star".to_string(),
        }),
        ViewType::HStack => View::HStack(StackArgs::default()),
        ViewType::VStack => View::VStack(StackArgs::default()),
        ViewType::ZStack => View::ZStack(StackArgs::default()),
        ViewType::ForEach => View::ForEach(ForEachArgs {
            data: "items".to_string(),
            id: "id".to_string(),
            item: None,
            content: Vec::new(),
        }),
    }
}

fn default_modifier(modifier_type: ModifierType) -> Modifier {
    match modifier_type {
        ModifierType::Font => Modifier::Font(FontArgs {
            font: FontStyle::Body,
        }),
        ModifierType::ForegroundColor => Modifier::ForegroundColor(ForegroundColorArgs {
            color: NamedColor::Primary,
        }),
        ModifierType::Background => Modifier::Background(BackgroundArgs::default()),
        ModifierType::Padding => Modifier::Padding(PaddingArgs::default()),
        ModifierType::Frame => Modifier::Frame(FrameArgs::default()),
    }
}
