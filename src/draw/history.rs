//! Bounded snapshot history backing undo/redo.

use super::figure::Figure;
use crate::error::{DrawError, DrawResult, HistoryStack};
use std::collections::VecDeque;

/// Maximum number of snapshots retained on the undo stack.
pub const MAX_UNDO_DEPTH: usize = 10;

/// A full copy of a frame's figure sequence at one point in time.
pub type Snapshot = Vec<Figure>;

/// Undo and redo stacks of whole-frame snapshots, most recent first.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: VecDeque<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot onto the undo stack and forgets every redo entry.
    ///
    /// The oldest snapshot is dropped once the stack holds more than
    /// [`MAX_UNDO_DEPTH`] entries.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.undo.push_front(snapshot);
        self.undo.truncate(MAX_UNDO_DEPTH);
        self.redo.clear();
    }

    /// Replaces `live` with the most recent undo snapshot, parking the old
    /// contents on the redo stack.
    ///
    /// # Errors
    /// Returns [`DrawError::HistoryEmpty`] when there is nothing to undo; `live`
    /// is untouched.
    pub fn step_back(&mut self, live: &mut Snapshot) -> DrawResult<()> {
        let restored = self
            .undo
            .pop_front()
            .ok_or(DrawError::HistoryEmpty(HistoryStack::Undo))?;
        self.redo.push_front(std::mem::replace(live, restored));
        Ok(())
    }

    /// Replaces `live` with the most recent redo snapshot, parking the old
    /// contents on the undo stack.
    ///
    /// # Errors
    /// Returns [`DrawError::HistoryEmpty`] when there is nothing to redo; `live`
    /// is untouched.
    pub fn step_forward(&mut self, live: &mut Snapshot) -> DrawResult<()> {
        let restored = self
            .redo
            .pop_front()
            .ok_or(DrawError::HistoryEmpty(HistoryStack::Redo))?;
        self.undo.push_front(std::mem::replace(live, restored));
        self.undo.truncate(MAX_UNDO_DEPTH);
        Ok(())
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo snapshots, most recent first.
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &[Figure]> {
        self.undo.iter().map(Vec::as_slice)
    }
}
