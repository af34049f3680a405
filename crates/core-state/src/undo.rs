use tracing::trace;

/// Which single-unit edit a history record captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

/// One history entry: the unit inserted or removed and how.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditRecord {
    pub unit: u8,
    pub kind: EditKind,
}

impl EditRecord {
    pub fn insert(unit: u8) -> Self {
        Self {
            unit,
            kind: EditKind::Insert,
        }
    }
    pub fn delete(unit: u8) -> Self {
        Self {
            unit,
            kind: EditKind::Delete,
        }
    }
}

/// How undo/redo turn a record back into a buffer mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UndoStrategy {
    /// Undo is always a delete at the cursor and redo always an insert, whatever
    /// the record kind. Undoing a delete therefore removes another unit.
    #[default]
    Literal,
    /// Honor the record kind: undoing a delete reinserts the removed unit.
    Inverse,
}

/// Whether a fresh edit invalidates the redo stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RedoPolicy {
    /// Redo entries survive new edits and stay replayable.
    #[default]
    Retain,
    /// Any recorded edit empties the redo stack.
    ClearOnEdit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HistoryPolicy {
    pub undo: UndoStrategy,
    pub redo: RedoPolicy,
}

/// Buffer mutation produced by reversing or replaying a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferAction {
    Insert(u8),
    Delete,
}

impl UndoStrategy {
    /// Mutation that undoes `record`.
    pub fn reversal(self, record: EditRecord) -> BufferAction {
        match (self, record.kind) {
            (UndoStrategy::Literal, _) | (UndoStrategy::Inverse, EditKind::Insert) => {
                BufferAction::Delete
            }
            (UndoStrategy::Inverse, EditKind::Delete) => BufferAction::Insert(record.unit),
        }
    }

    /// Mutation that re-applies `record`.
    pub fn replay(self, record: EditRecord) -> BufferAction {
        match (self, record.kind) {
            (UndoStrategy::Literal, _) | (UndoStrategy::Inverse, EditKind::Insert) => {
                BufferAction::Insert(record.unit)
            }
            (UndoStrategy::Inverse, EditKind::Delete) => BufferAction::Delete,
        }
    }
}

/// Undo and redo stacks (top = most recent). Unbounded.
#[derive(Debug, Default, Clone)]
pub struct History {
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
    redo_policy: RedoPolicy,
}

impl History {
    pub fn new(redo_policy: RedoPolicy) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            redo_policy,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
    pub fn peek_undo(&self) -> Option<EditRecord> {
        self.undo_stack.last().copied()
    }
    pub fn peek_redo(&self) -> Option<EditRecord> {
        self.redo_stack.last().copied()
    }

    pub fn record_for_undo(&mut self, record: EditRecord) {
        self.undo_stack.push(record);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), unit = record.unit, kind = ?record.kind, "record");
        if self.redo_policy == RedoPolicy::ClearOnEdit && !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Move the top undo record onto the redo stack and return it.
    pub fn undo_step(&mut self) -> Option<EditRecord> {
        let record = self.undo_stack.pop()?;
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        self.redo_stack.push(record);
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), "redo_push_from_undo");
        Some(record)
    }

    /// Move the top redo record back onto the undo stack and return it.
    pub fn redo_step(&mut self) -> Option<EditRecord> {
        let record = self.redo_stack.pop()?;
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), undo_depth = self.undo_stack.len(), "redo_pop");
        self.undo_stack.push(record);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), "undo_push_from_redo");
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_are_lifo() {
        let mut h = History::default();
        h.record_for_undo(EditRecord::insert(b'a'));
        h.record_for_undo(EditRecord::insert(b'b'));
        assert_eq!(h.undo_step(), Some(EditRecord::insert(b'b')));
        assert_eq!(h.undo_step(), Some(EditRecord::insert(b'a')));
        assert_eq!(h.undo_step(), None);
        assert_eq!(h.redo_depth(), 2);
        assert_eq!(h.redo_step(), Some(EditRecord::insert(b'a')));
        assert_eq!(h.peek_undo(), Some(EditRecord::insert(b'a')));
    }

    #[test]
    fn retain_keeps_redo_across_new_edits() {
        let mut h = History::new(RedoPolicy::Retain);
        h.record_for_undo(EditRecord::insert(b'a'));
        h.undo_step();
        h.record_for_undo(EditRecord::insert(b'z'));
        assert_eq!(h.redo_depth(), 1);
    }

    #[test]
    fn clear_on_edit_drops_redo() {
        let mut h = History::new(RedoPolicy::ClearOnEdit);
        h.record_for_undo(EditRecord::insert(b'a'));
        h.undo_step();
        assert_eq!(h.redo_depth(), 1);
        h.record_for_undo(EditRecord::delete(b'q'));
        assert_eq!(h.redo_depth(), 0);
        assert_eq!(h.undo_depth(), 1);
    }

    #[test]
    fn literal_strategy_ignores_kind() {
        let s = UndoStrategy::Literal;
        assert_eq!(s.reversal(EditRecord::delete(b'x')), BufferAction::Delete);
        assert_eq!(s.replay(EditRecord::delete(b'x')), BufferAction::Insert(b'x'));
    }

    #[test]
    fn inverse_strategy_honors_kind() {
        let s = UndoStrategy::Inverse;
        assert_eq!(s.reversal(EditRecord::insert(b'x')), BufferAction::Delete);
        assert_eq!(s.reversal(EditRecord::delete(b'x')), BufferAction::Insert(b'x'));
        assert_eq!(s.replay(EditRecord::insert(b'x')), BufferAction::Insert(b'x'));
        assert_eq!(s.replay(EditRecord::delete(b'x')), BufferAction::Delete);
    }
}
