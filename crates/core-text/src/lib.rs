//! Cell-arena text buffer with a single edit cursor.
//!
//! Content is an ordered chain of one-byte cells. Cells live in a slot arena and
//! link to their neighbors through generational [`CellId`]s rather than pointers:
//! releasing a cell bumps its slot generation, so an id kept past a delete or
//! clear can never resolve to whatever cell reuses the slot later.
//!
//! Cursor model:
//! - `None` only while the buffer is empty.
//! - `Some(id)` names the cell that the next delete removes; the next insert
//!   lands immediately after it.
//!
//! Insert advances the cursor onto the new cell and delete retreats it onto the
//! predecessor, so in practice the cursor always sits on the last cell.

use anyhow::{Result, ensure};
use tracing::trace;

/// Stable handle to a cell inside a [`Buffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    index: usize,
    generation: u32,
}

impl CellId {
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// One stored code unit plus its neighbor links (non-owning).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: u8,
    prev: Option<CellId>,
    next: Option<CellId>,
}

impl Cell {
    pub fn prev(&self) -> Option<CellId> {
        self.prev
    }
    pub fn next(&self) -> Option<CellId> {
        self.next
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied { generation: u32, cell: Cell },
    Vacant { generation: u32, next_free: Option<usize> },
}

/// Ordered sequence of cells plus the edit cursor. Owns every cell it creates.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    slots: Vec<Slot>,
    free_head: Option<usize>,
    head: Option<CellId>,
    cursor: Option<CellId>,
    len: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer holding `bytes` in order with the cursor on the last one.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        buffer.load(bytes.iter().copied());
        buffer
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cursor(&self) -> Option<CellId> {
        self.cursor
    }

    pub fn head(&self) -> Option<CellId> {
        self.head
    }

    /// Resolve an id to its cell; `None` once the cell has been released.
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        match self.slots.get(id.index)? {
            Slot::Occupied { generation, cell } if *generation == id.generation => Some(cell),
            _ => None,
        }
    }

    /// Code unit under the cursor.
    pub fn cursor_value(&self) -> Option<u8> {
        self.cursor.and_then(|id| self.get(id)).map(|c| c.value)
    }

    /// 1-based document position of the cursor cell (0 when empty).
    pub fn cursor_offset(&self) -> usize {
        let Some(target) = self.cursor else {
            return 0;
        };
        let mut offset = 0;
        let mut at = self.head;
        while let Some(id) = at {
            offset += 1;
            if id == target {
                return offset;
            }
            at = self.get(id).and_then(|c| c.next);
        }
        0
    }

    /// Insert `value` immediately after the cursor and move the cursor onto it.
    pub fn insert(&mut self, value: u8) -> CellId {
        let id = match self.cursor {
            None => {
                // Empty cursor means "before the first cell".
                let next = self.head;
                let id = self.alloc(Cell {
                    value,
                    prev: None,
                    next,
                });
                if let Some(n) = next.and_then(|n| self.cell_mut(n)) {
                    n.prev = Some(id);
                }
                self.head = Some(id);
                id
            }
            Some(cur) => {
                let next = self.get(cur).and_then(|c| c.next);
                let id = self.alloc(Cell {
                    value,
                    prev: Some(cur),
                    next,
                });
                if let Some(n) = next.and_then(|n| self.cell_mut(n)) {
                    n.prev = Some(id);
                }
                if let Some(c) = self.cell_mut(cur) {
                    c.next = Some(id);
                }
                id
            }
        };
        self.cursor = Some(id);
        self.len += 1;
        trace!(target: "text.buffer", len = self.len, unit = value, slot = id.index, "insert");
        id
    }

    /// Remove the cursor cell. Returns the removed unit, or `None` when there is
    /// nothing to delete (buffer left unchanged).
    pub fn delete(&mut self) -> Option<u8> {
        let cur = self.cursor?;
        let cell = self.release(cur)?;
        match cell.prev.and_then(|p| self.cell_mut(p)) {
            Some(p) => p.next = cell.next,
            None => self.head = cell.next,
        }
        if let Some(n) = cell.next.and_then(|n| self.cell_mut(n)) {
            n.prev = cell.prev;
        }
        // Successor fallback keeps "cursor empty iff buffer empty" when a head
        // cell with successors is removed.
        self.cursor = cell.prev.or(cell.next);
        self.len -= 1;
        trace!(target: "text.buffer", len = self.len, unit = cell.value, slot = cur.index, "delete");
        Some(cell.value)
    }

    /// Release every cell and reset the cursor.
    pub fn clear(&mut self) {
        self.free_head = None;
        for index in (0..self.slots.len()).rev() {
            let generation = match &self.slots[index] {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            self.slots[index] = Slot::Vacant {
                generation,
                next_free: self.free_head,
            };
            self.free_head = Some(index);
        }
        let released = self.len;
        self.head = None;
        self.cursor = None;
        self.len = 0;
        trace!(target: "text.buffer", released, "clear");
    }

    /// Replace the content with `units`, leaving the cursor on the last one.
    pub fn load<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = u8>,
    {
        self.clear();
        for unit in units {
            self.insert(unit);
        }
    }

    /// Iterate code units from the first cell to the last.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buffer: self,
            at: self.head,
            remaining: self.len,
        }
    }

    /// Exact content, in order, with no transformation.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Display form of the content. `None` for a buffer with zero cells so callers
    /// can report "empty" distinctly from an empty string.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(String::from_utf8_lossy(&self.to_bytes()).into_owned())
    }

    /// Walk the chain in both directions and verify the structural invariants.
    pub fn check_links(&self) -> Result<()> {
        ensure!(
            self.cursor.is_none() == (self.len == 0),
            "cursor emptiness disagrees with len {}",
            self.len
        );
        if let Some(head) = self.head {
            let cell = self.get(head);
            ensure!(cell.is_some(), "head {head:?} is not live");
            ensure!(cell.and_then(|c| c.prev).is_none(), "head has a predecessor");
        }
        let mut seen = 0usize;
        let mut cursor_found = false;
        let mut prev: Option<CellId> = None;
        let mut at = self.head;
        while let Some(id) = at {
            let Some(cell) = self.get(id) else {
                anyhow::bail!("link to released cell {id:?}");
            };
            ensure!(cell.prev == prev, "back link of {id:?} is {:?}, expected {prev:?}", cell.prev);
            seen += 1;
            ensure!(seen <= self.len, "chain longer than len {}", self.len);
            cursor_found |= self.cursor == Some(id);
            prev = Some(id);
            at = cell.next;
        }
        ensure!(seen == self.len, "chain has {seen} cells, len is {}", self.len);
        ensure!(self.cursor.is_none() || cursor_found, "cursor not in chain");
        let occupied = self
            .slots
            .iter()
            .filter(|s| matches!(s, Slot::Occupied { .. }))
            .count();
        ensure!(occupied == self.len, "{occupied} occupied slots for len {}", self.len);
        Ok(())
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        match self.slots.get_mut(id.index)? {
            Slot::Occupied { generation, cell } if *generation == id.generation => Some(cell),
            _ => None,
        }
    }

    fn alloc(&mut self, cell: Cell) -> CellId {
        if let Some(index) = self.free_head {
            if let Slot::Vacant {
                generation,
                next_free,
            } = self.slots[index]
            {
                self.free_head = next_free;
                self.slots[index] = Slot::Occupied { generation, cell };
                return CellId { index, generation };
            }
        }
        let index = self.slots.len();
        self.slots.push(Slot::Occupied {
            generation: 0,
            cell,
        });
        CellId {
            index,
            generation: 0,
        }
    }

    fn release(&mut self, id: CellId) -> Option<Cell> {
        let slot = self.slots.get_mut(id.index)?;
        let cell = match slot {
            Slot::Occupied { generation, cell } if *generation == id.generation => *cell,
            _ => return None,
        };
        *slot = Slot::Vacant {
            generation: id.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        self.free_head = Some(id.index);
        Some(cell)
    }
}

/// Document-order iterator over a buffer's code units.
pub struct Iter<'a> {
    buffer: &'a Buffer,
    at: Option<CellId>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let cell = self.buffer.get(self.at?)?;
        self.at = cell.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(cell.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Buffer {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_into_empty_sets_head_and_cursor() {
        let mut b = Buffer::new();
        assert!(b.cursor().is_none());
        let id = b.insert(b'a');
        assert_eq!(b.head(), Some(id));
        assert_eq!(b.cursor(), Some(id));
        assert_eq!(b.len(), 1);
        b.check_links().unwrap();
    }

    #[test]
    fn inserts_append_in_document_order() {
        let b = Buffer::from_bytes(b"abc");
        assert_eq!(b.to_bytes(), b"abc");
        assert_eq!(b.cursor_value(), Some(b'c'));
        assert_eq!(b.cursor_offset(), 3);
        b.check_links().unwrap();
    }

    #[test]
    fn delete_retreats_to_predecessor() {
        let mut b = Buffer::from_bytes(b"xy");
        assert_eq!(b.delete(), Some(b'y'));
        assert_eq!(b.cursor_value(), Some(b'x'));
        assert_eq!(b.delete(), Some(b'x'));
        assert!(b.cursor().is_none());
        assert!(b.is_empty());
        b.check_links().unwrap();
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut b = Buffer::new();
        assert_eq!(b.delete(), None);
        assert_eq!(b.len(), 0);
        assert!(b.cursor().is_none());
    }

    #[test]
    fn render_distinguishes_empty() {
        let mut b = Buffer::new();
        assert_eq!(b.render(), None);
        b.insert(b'q');
        assert_eq!(b.render().as_deref(), Some("q"));
    }

    #[test]
    fn released_id_does_not_resolve_after_slot_reuse() {
        let mut b = Buffer::new();
        let first = b.insert(b'a');
        b.delete();
        let second = b.insert(b'b');
        assert_eq!(first.index(), second.index(), "slot reused");
        assert_ne!(first.generation(), second.generation());
        assert!(b.get(first).is_none());
        assert_eq!(b.get(second).map(|c| c.value), Some(b'b'));
    }

    #[test]
    fn clear_invalidates_all_ids() {
        let mut b = Buffer::new();
        let ids: Vec<_> = b"hello".iter().map(|&u| b.insert(u)).collect();
        b.clear();
        assert!(ids.iter().all(|id| b.get(*id).is_none()));
        assert_eq!(b.render(), None);
        b.check_links().unwrap();
        b.insert(b'z');
        assert!(ids.iter().all(|id| b.get(*id).is_none()));
        assert_eq!(b.to_bytes(), b"z");
    }

    #[test]
    fn load_replaces_content() {
        let mut b = Buffer::from_bytes(b"old");
        b.load(b"new text".iter().copied());
        assert_eq!(b.to_bytes(), b"new text");
        assert_eq!(b.cursor_value(), Some(b't'));
        b.check_links().unwrap();
    }

    #[test]
    fn non_ascii_bytes_pass_through() {
        let bytes = [0x00, 0xff, b'\n', 0xc3, 0xa9];
        let b = Buffer::from_bytes(&bytes);
        assert_eq!(b.to_bytes(), bytes);
        assert_eq!(b.iter().len(), 5);
    }
}
