// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the basis search.
//!
//! Every write to the dynamic selection state records the slot and its old value
//! on the trail. Backtracking unwinds the trail to a checkpoint, restoring old
//! values in reverse order, so the search never copies the selection.

/// A single recorded change: `slot` held `old_value` before the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    slot: usize,
    old_value: usize,
}

/// Undo log for the dynamic search state.
///
/// A checkpoint is simply the trail length at some moment; see
/// [`SearchContext::rewind_to`](crate::context::SearchContext::rewind_to).
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Upper bound on trail length. Selection depth is the dimension count, so
    /// reaching this indicates a bug in a predicate.
    const MAX_SIZE: usize = 16384;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
        }
    }

    /// Current position, usable as a checkpoint.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record that `slot` held `old_value` before being overwritten.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds its maximum size.
    pub fn record(&mut self, slot: usize, old_value: usize) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Remove every entry recorded after `checkpoint`, yielding `(slot, old_value)`
    /// pairs newest first so that applying them in order restores the state at
    /// the checkpoint.
    pub fn unwind(&mut self, checkpoint: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let start = checkpoint.min(self.entries.len());
        self.entries
            .drain(start..)
            .rev()
            .map(|entry| (entry.slot, entry.old_value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
