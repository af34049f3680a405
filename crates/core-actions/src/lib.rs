//! Command surface over the editor session.
//!
//! `Command` is the full set of user-facing operations; each maps 1:1 onto a
//! `Session`/`Editor` call in `dispatcher`. `MenuChoice` classifies raw menu
//! input and knows which follow-up argument (filename, sentence) a choice needs.

use std::path::PathBuf;

pub mod dispatcher;
pub mod io_ops;

pub use dispatcher::command_parser::{MENU, MenuChoice};
pub use dispatcher::{DispatchResult, dispatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create,
    Open(PathBuf),
    Save(PathBuf),
    Write(String),
    Undo,
    Redo,
    Clear,
    Print,
    Exit,
}
