//! # Stackblocks Model
//!
//! Data contracts for the block tree: nodes, their typed args, the runtime
//! values a scope binds, and the palette factories that mint new blocks.
//!
//! Code that dispatches on a node matches on [`Block`] first and the inner
//! kind second. Type names repeat across block types on the wire, so the
//! two-level tag is what makes matching exhaustive.

pub mod factory;
pub mod id_generator;
pub mod node;
pub mod outline;
pub mod state;
pub mod value;

pub use factory::{default_block, NodeFactory};
pub use id_generator::{get_palette_seed, IdGenerator};
pub use node::*;
pub use outline::{outline, Outliner};
pub use state::EditorState;
pub use value::Value;
