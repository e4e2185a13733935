//! # Stackblocks Editor
//!
//! Immutable editing engine for block trees.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Node / Block / Value / EditorState   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: snapshots + mutations               │
//! │  - Locate nodes by id (DFS paths)           │
//! │  - Insert / update / move / delete          │
//! │  - Structural equality for grading          │
//! │  - Session swaps snapshots, notifies        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: tree + scope → Preview           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stackblocks_editor::Editor;
//! use stackblocks_model::{IdGenerator, ModifierType, NodeFactory, NodeType, ViewType};
//!
//! let mut factory = NodeFactory::new(IdGenerator::new("lesson-1"));
//! let text = factory.create(NodeType::View(ViewType::Text));
//! let font = factory.create(NodeType::Modifier(ModifierType::Font));
//!
//! let editor = Editor::default()
//!     .insert(text.clone(), None)?
//!     .insert(font, Some(&text.id))?;
//!
//! let preview = editor.render();
//! ```

mod editor;
mod equality;
mod errors;
mod locator;
mod mutations;
mod session;

pub use editor::Editor;
pub use equality::{anonymize, structurally_equal};
pub use errors::{EditorError, EditorResult};
pub use locator::{
    remove_at, resolve, resolve_mut, search, select, select_mut, NodePath, PathStep, Selection,
    StepKind,
};
pub use mutations::Mutation;
pub use session::{OnChange, Session, SessionUpdate};
