//! Editor state: the cell buffer, its undo/redo history, and the session wrapper.
//!
//! Every mutating operation is exactly one code unit wide. `insert_char` and
//! `delete_char` record the affected unit before touching the buffer; undo and
//! redo move records between the two stacks and mutate the buffer directly
//! (they never record anything themselves). The record moves even when the
//! buffer has nothing left to delete; that case is reported as
//! `NothingToDelete` afterwards.
//!
//! History policy:
//! - `UndoStrategy::Literal` realizes undo as a delete at the cursor and redo as
//!   an insert regardless of what the record captured. `Inverse` honors the
//!   record kind, so undoing a delete puts the unit back.
//! - `RedoPolicy::Retain` leaves redo entries in place when a fresh edit lands;
//!   `ClearOnEdit` empties them.
//!
//! Both defaults reproduce the classic behavior of this editor. Telemetry for
//! stack movement lives in `undo` (`state.undo` target); load/save counts are
//! logged under `state.editor`.

use std::io::{Read, Write};

use core_text::Buffer;
use tracing::debug;

pub mod error;
pub mod session;
pub mod undo;

pub use error::{EditorError, HistoryStack, Result};
pub use session::Session;
pub use undo::{
    BufferAction, EditKind, EditRecord, History, HistoryPolicy, RedoPolicy, UndoStrategy,
};

/// One buffer plus the history that belongs to it.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    buffer: Buffer,
    history: History,
    policy: HistoryPolicy,
}

impl Editor {
    pub fn new(policy: HistoryPolicy) -> Self {
        Self {
            buffer: Buffer::new(),
            history: History::new(policy.redo),
            policy,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    /// Record `unit` for undo, then insert it after the cursor.
    pub fn insert_char(&mut self, unit: u8) {
        self.history.record_for_undo(EditRecord::insert(unit));
        self.buffer.insert(unit);
    }

    /// Record the unit under the cursor for undo, then remove it.
    pub fn delete_char(&mut self) -> Result<u8> {
        let unit = self
            .buffer
            .cursor_value()
            .ok_or(EditorError::NothingToDelete)?;
        self.history.record_for_undo(EditRecord::delete(unit));
        self.buffer.delete().ok_or(EditorError::NothingToDelete)
    }

    /// Insert every unit of `text` in order. Each unit is its own undo step.
    pub fn write(&mut self, text: impl AsRef<[u8]>) -> usize {
        let bytes = text.as_ref();
        for &unit in bytes {
            self.insert_char(unit);
        }
        bytes.len()
    }

    /// Replace the buffer with the whole of `source`. Every loaded unit goes
    /// through `insert_char`, so it lands on the undo stack as well. On a read
    /// failure the buffer is left as it was.
    pub fn open<R: Read>(&mut self, mut source: R) -> Result<usize> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        self.buffer.clear();
        let count = self.write(&bytes);
        debug!(target: "state.editor", count, undo_depth = self.history.undo_depth(), "open");
        Ok(count)
    }

    /// Write the content verbatim to `sink`.
    pub fn save<W: Write>(&self, mut sink: W) -> Result<usize> {
        let bytes = self.buffer.to_bytes();
        sink.write_all(&bytes)?;
        sink.flush()?;
        debug!(target: "state.editor", count = bytes.len(), "save");
        Ok(bytes.len())
    }

    /// Reverse the most recent undo record and move it onto the redo stack.
    pub fn undo(&mut self) -> Result<EditRecord> {
        let record = self
            .history
            .undo_step()
            .ok_or(EditorError::EmptyHistory(HistoryStack::Undo))?;
        let action = self.policy.undo.reversal(record);
        self.apply(action)?;
        Ok(record)
    }

    /// Re-apply the most recent redo record and move it back onto the undo stack.
    pub fn redo(&mut self) -> Result<EditRecord> {
        let record = self
            .history
            .redo_step()
            .ok_or(EditorError::EmptyHistory(HistoryStack::Redo))?;
        let action = self.policy.undo.replay(record);
        self.apply(action)?;
        Ok(record)
    }

    /// Empty the buffer. History is kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn render(&self) -> Option<String> {
        self.buffer.render()
    }

    // The record has already moved stacks by the time this runs; a delete on
    // an empty buffer is reported but does not put it back.
    fn apply(&mut self, action: BufferAction) -> Result<()> {
        match action {
            BufferAction::Insert(unit) => {
                self.buffer.insert(unit);
            }
            BufferAction::Delete => {
                if self.buffer.delete().is_none() {
                    debug!(target: "state.editor", "reversal_found_nothing_to_delete");
                    return Err(EditorError::NothingToDelete);
                }
            }
        }
        Ok(())
    }
}
