//! Dispatcher applying a `Command` to the editor session.
//!
//! Sub-modules:
//! * `command_parser` - menu input classification
//! * `command` - session lifecycle and file commands (create, open, save, exit)
//! * `edit`    - content commands (write, clear, print)
//! * `undo`    - undo / redo
//!
//! Every `EditorError` is converted into a status message here; the session is
//! never torn down by a failed command.

use crate::Command;
use core_state::{EditorError, HistoryPolicy, Session};

mod command;
pub mod command_parser;
mod edit;
mod undo;

/// Outcome of one command: the status line to show and whether to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub message: String,
    pub quit: bool,
    pub failed: bool,
}

impl DispatchResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            quit: false,
            failed: false,
        }
    }
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            quit: false,
            failed: true,
        }
    }
    pub fn quit() -> Self {
        Self {
            message: "Exiting...".into(),
            quit: true,
            failed: false,
        }
    }
}

impl From<EditorError> for DispatchResult {
    fn from(err: EditorError) -> Self {
        let message = match &err {
            EditorError::NotInitialized => "No file is open. Create one first (option 1).".into(),
            EditorError::NothingToDelete => "There are no characters to delete!".into(),
            other => format!("Error: {other}"),
        };
        DispatchResult::failed(message)
    }
}

/// Apply `command` to `session`. `policy` is used when a new editor is created.
pub fn dispatch(command: Command, session: &mut Session, policy: HistoryPolicy) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", ?command, active = session.is_active(), "dispatch");
    let result = match command {
        Command::Create => command::handle_create(session, policy),
        Command::Open(path) => command::handle_open(&path, session),
        Command::Save(path) => command::handle_save(&path, session),
        Command::Exit => DispatchResult::quit(),
        Command::Write(text) => edit::handle_write(&text, session),
        Command::Clear => edit::handle_clear(session),
        Command::Print => edit::handle_print(session),
        Command::Undo => undo::handle_undo(session),
        Command::Redo => undo::handle_redo(session),
    };
    if result.failed {
        tracing::debug!(target: "actions.dispatch", message = %result.message, "command_failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_editor_command_requires_a_session() {
        let mut session = Session::default();
        for command in [
            Command::Open("x".into()),
            Command::Save("x".into()),
            Command::Write("abc".into()),
            Command::Undo,
            Command::Redo,
            Command::Clear,
            Command::Print,
        ] {
            let result = dispatch(command.clone(), &mut session, HistoryPolicy::default());
            assert!(result.failed, "{command:?} should fail before create");
            assert!(result.message.contains("Create one first"));
        }
        assert!(!session.is_active());
    }

    #[test]
    fn exit_works_without_session() {
        let mut session = Session::default();
        let result = dispatch(Command::Exit, &mut session, HistoryPolicy::default());
        assert!(result.quit);
        assert!(!result.failed);
    }
}
