// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Provides O(1) backtracking by recording every change to a DYNAMIC cell.
//! Rewinding replays the recorded old values in reverse order, restoring the
//! cells to their state at the checkpoint.
//!
//! Cells are addressed by index into a `[u64]` register file owned by the
//! caller (see [`crate::context::DynamicState`]), so the trail never holds
//! references into the state it restores.

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEntry {
    /// Index of the cell that changed
    pub cell: usize,
    /// The value before the change
    pub old_value: u64,
}

/// The trail system for O(1) backtracking.
///
/// # Example
///
/// ```
/// use prime_pair_search::trail::Trail;
///
/// let mut cells = [0u64; 2];
/// let mut trail = Trail::new();
///
/// let checkpoint = trail.len();
/// trail.set(&mut cells, 0, 42);
/// trail.set(&mut cells, 1, 7);
/// assert_eq!(cells, [42, 7]);
///
/// trail.rewind_to(&mut cells, checkpoint);
/// assert_eq!(cells, [0, 0]);
/// ```
#[derive(Debug)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum trail size.
    ///
    /// One entry per taken prime plus its running sum, so this bounds the
    /// combination size rather than the number of candidates.
    pub const MAX_SIZE: usize = 16384;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
        }
    }

    /// Rewind to a trail position taken from [`Trail::len`], restoring every
    /// later change in reverse order.
    pub fn rewind_to(&mut self, cells: &mut [u64], checkpoint: usize) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                cells[entry.cell] = entry.old_value;
            }
        }
    }

    /// Set `cells[cell]` to `value`, recording the old value.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub fn set(&mut self, cells: &mut [u64], cell: usize, value: u64) {
        self.record_change(cell, cells[cell]);
        cells[cell] = value;
    }

    /// Record a state change in the trail.
    fn record_change(&mut self, cell: usize, old_value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { cell, old_value });
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rewind_to_position() {
        let mut cells = [0u64; 4];
        let mut trail = Trail::new();

        trail.set(&mut cells, 0, 10);
        trail.set(&mut cells, 1, 20);
        let checkpoint = trail.len();
        assert_eq!(checkpoint, 2);

        trail.set(&mut cells, 2, 30);
        trail.set(&mut cells, 0, 40);
        assert_eq!(cells, [40, 20, 30, 0]);

        trail.rewind_to(&mut cells, checkpoint);
        assert_eq!(trail.len(), 2);
        assert_eq!(cells, [10, 20, 0, 0]);
    }

    #[test]
    fn test_repeated_sets_restore_oldest_value() {
        let mut cells = [5u64];
        let mut trail = Trail::new();

        let checkpoint = trail.len();
        trail.set(&mut cells, 0, 6);
        trail.set(&mut cells, 0, 7);
        trail.set(&mut cells, 0, 8);

        trail.rewind_to(&mut cells, checkpoint);
        assert_eq!(cells, [5]);
    }

    #[test]
    fn test_nested_positions() {
        let mut cells = [0u64; 3];
        let mut trail = Trail::new();

        trail.set(&mut cells, 0, 10);
        let outer = trail.len();

        trail.set(&mut cells, 1, 20);
        let inner = trail.len();

        trail.set(&mut cells, 2, 30);
        assert_eq!(trail.len(), 3);

        trail.rewind_to(&mut cells, inner);
        assert_eq!(cells, [10, 20, 0]);

        trail.rewind_to(&mut cells, outer);
        assert_eq!(cells, [10, 0, 0]);
    }

    #[test]
    fn test_rewind_beyond_end_is_noop() {
        let mut cells = [0u64; 1];
        let mut trail = Trail::new();
        trail.set(&mut cells, 0, 3);

        trail.rewind_to(&mut cells, 5);
        assert_eq!(cells, [3]);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut cells = [0u64; 1];
        let mut trail = Trail::new();
        for i in 0..Trail::MAX_SIZE + 1 {
            trail.set(&mut cells, 0, i as u64);
        }
    }
}
