//! Session lifecycle and file commands (create, open, save).

use super::DispatchResult;
use crate::io_ops::{open_file, write_file};
use core_state::{EditorError, HistoryPolicy, Session};
use std::path::Path;

pub(crate) fn handle_create(session: &mut Session, policy: HistoryPolicy) -> DispatchResult {
    session.create(policy);
    DispatchResult::ok("File has been created")
}

pub(crate) fn handle_open(path: &Path, session: &mut Session) -> DispatchResult {
    let editor = match session.editor_mut() {
        Ok(editor) => editor,
        Err(e) => return e.into(),
    };
    match open_file(editor, path) {
        Ok(count) => {
            tracing::info!(target: "actions.dispatch", file = %path.display(), count, "open");
            DispatchResult::ok("File opened successfully")
        }
        Err(EditorError::Io(e)) => {
            DispatchResult::failed(format!("Error opening {}: {e}", path.display()))
        }
        Err(e) => e.into(),
    }
}

pub(crate) fn handle_save(path: &Path, session: &mut Session) -> DispatchResult {
    let editor = match session.editor() {
        Ok(editor) => editor,
        Err(e) => return e.into(),
    };
    match write_file(editor, path) {
        Ok(count) => {
            tracing::info!(target: "actions.dispatch", file = %path.display(), count, "save");
            DispatchResult::ok("File saved successfully.")
        }
        Err(EditorError::Io(e)) => {
            DispatchResult::failed(format!("Could not save {}: {e}", path.display()))
        }
        Err(e) => e.into(),
    }
}
