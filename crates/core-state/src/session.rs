//! Session lifetime: no editor exists until `create` is issued.

use crate::{Editor, EditorError, HistoryPolicy, Result};

#[derive(Debug, Default)]
pub enum Session {
    #[default]
    Uninitialized,
    Active(Editor),
}

impl Session {
    /// Start a fresh editor (empty buffer, empty history), replacing any current one.
    pub fn create(&mut self, policy: HistoryPolicy) {
        *self = Session::Active(Editor::new(policy));
        tracing::debug!(target: "state.session", ?policy, "session_created");
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Session::Active(_))
    }

    pub fn editor(&self) -> Result<&Editor> {
        match self {
            Session::Active(editor) => Ok(editor),
            Session::Uninitialized => Err(EditorError::NotInitialized),
        }
    }

    pub fn editor_mut(&mut self) -> Result<&mut Editor> {
        match self {
            Session::Active(editor) => Ok(editor),
            Session::Uninitialized => Err(EditorError::NotInitialized),
        }
    }
}
