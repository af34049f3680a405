//! Undo / Redo handling.
//!
//! Delegates to `Editor::undo` / `Editor::redo`; each empty stack is reported
//! with its own message rather than a generic failure.

use super::DispatchResult;
use core_state::{EditorError, HistoryStack, Session};

pub(crate) fn handle_undo(session: &mut Session) -> DispatchResult {
    let editor = match session.editor_mut() {
        Ok(editor) => editor,
        Err(e) => return e.into(),
    };
    match editor.undo() {
        Ok(record) => {
            tracing::trace!(target: "actions.dispatch", op = "undo", unit = record.unit, kind = ?record.kind, "undo");
            DispatchResult::ok("Undo performed")
        }
        Err(EditorError::EmptyHistory(HistoryStack::Undo)) => {
            DispatchResult::failed("Nothing to undo!")
        }
        Err(e) => e.into(),
    }
}

pub(crate) fn handle_redo(session: &mut Session) -> DispatchResult {
    let editor = match session.editor_mut() {
        Ok(editor) => editor,
        Err(e) => return e.into(),
    };
    match editor.redo() {
        Ok(record) => {
            tracing::trace!(target: "actions.dispatch", op = "redo", unit = record.unit, kind = ?record.kind, "redo");
            DispatchResult::ok("Redo performed")
        }
        Err(EditorError::EmptyHistory(HistoryStack::Redo)) => {
            DispatchResult::failed("Redo stack is empty!")
        }
        Err(e) => e.into(),
    }
}
