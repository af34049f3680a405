use std::fmt;
use thiserror::Error;

/// Names the stack an [`EditorError::EmptyHistory`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStack {
    Undo,
    Redo,
}

impl fmt::Display for HistoryStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryStack::Undo => f.write_str("undo"),
            HistoryStack::Redo => f.write_str("redo"),
        }
    }
}

/// Recoverable editor conditions. Each is reported and the session continues.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{0} history is empty")]
    EmptyHistory(HistoryStack),
    #[error("there are no characters to delete")]
    NothingToDelete,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no editor session; create one first")]
    NotInitialized,
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;
