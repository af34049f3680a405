//! Content commands: write a sentence, clear, print.

use super::DispatchResult;
use core_state::Session;

pub(crate) fn handle_write(text: &str, session: &mut Session) -> DispatchResult {
    match session.editor_mut() {
        Ok(editor) => {
            let count = editor.write(text);
            tracing::trace!(target: "actions.dispatch", op = "write", count, "edit");
            DispatchResult::ok(format!("Wrote {count} characters"))
        }
        Err(e) => e.into(),
    }
}

pub(crate) fn handle_clear(session: &mut Session) -> DispatchResult {
    match session.editor_mut() {
        Ok(editor) => {
            editor.clear();
            DispatchResult::ok("Content cleared")
        }
        Err(e) => e.into(),
    }
}

pub(crate) fn handle_print(session: &Session) -> DispatchResult {
    match session.editor() {
        Ok(editor) => match editor.render() {
            Some(text) => DispatchResult::ok(text),
            None => DispatchResult::ok("File is empty!"),
        },
        Err(e) => e.into(),
    }
}
