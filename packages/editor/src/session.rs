//! # Edit Session
//!
//! Owns the current [`Editor`] snapshot for one canvas. The session is the
//! only place that swaps snapshots: each applied mutation produces a
//! successor, which replaces the current one, is handed to `on_change`, and
//! gets re-rendered.
//!
//! Failed mutations leave the current snapshot in place and do not notify.

use crate::editor::Editor;
use crate::errors::EditorResult;
use crate::mutations::Mutation;
use stackblocks_evaluator::{Evaluator, Preview};
use tracing::debug;

/// Change callback, invoked with the new snapshot
pub type OnChange = Box<dyn FnMut(&Editor)>;

/// Result of a successfully applied mutation
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    /// Number of snapshots swapped in so far
    pub version: u64,
    pub preview: Preview,
}

pub struct Session {
    editor: Editor,
    on_change: OnChange,
    evaluator: Evaluator,
    version: u64,
}

impl Session {
    pub fn new(editor: Editor, on_change: impl FnMut(&Editor) + 'static) -> Self {
        Self::with_evaluator(editor, on_change, Evaluator::new())
    }

    pub fn with_evaluator(
        editor: Editor,
        on_change: impl FnMut(&Editor) + 'static,
        evaluator: Evaluator,
    ) -> Self {
        Self {
            editor,
            on_change: Box::new(on_change),
            evaluator,
            version: 0,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn apply(&mut self, mutation: &Mutation) -> EditorResult<SessionUpdate> {
        let next = mutation.apply(&self.editor)?;
        Ok(self.replace(next))
    }

    /// Swap in an editor produced elsewhere (e.g. a direct `Editor` call)
    pub fn replace(&mut self, editor: Editor) -> SessionUpdate {
        self.editor = editor;
        self.version += 1;
        debug!(version = self.version, "Swapped editor snapshot");

        (self.on_change)(&self.editor);

        SessionUpdate {
            version: self.version,
            preview: self.preview(),
        }
    }

    pub fn preview(&mut self) -> Preview {
        self.evaluator.render_tree(self.editor.state())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("editor", &self.editor)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
