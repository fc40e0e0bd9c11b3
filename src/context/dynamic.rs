// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use super::MemoizedData;

/// Trailed cells in [`DynamicState::cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
#[repr(usize)]
pub enum Cell {
    /// Number of primes currently selected.
    SelectionLen,
    /// Sum of the selected primes.
    SelectionSum,
}

/// Trail entries written each time a prime is selected.
pub const CELLS_PER_SELECTION: usize = Cell::COUNT;

/// Mutable search state (Tier 2: DYNAMIC).
///
/// The selection is a fixed-capacity buffer whose live prefix is given by
/// the trailed [`Cell::SelectionLen`]. Selecting writes the prime into the
/// first free slot and bumps the length through the trail; rewinding the
/// trail restores the length, which is all that is needed to undo the
/// selection. Slots at or beyond the length are never read.
#[derive(Debug)]
pub struct DynamicState {
    /// Trailed registers, indexed by [`Cell`].
    pub cells: [u64; Cell::COUNT],

    /// Selected primes, in selection order. Only the live prefix is meaningful.
    pub selection: Vec<u64>,
}

impl DynamicState {
    /// Create initial dynamic state from MEMO data.
    pub fn new(memo: &MemoizedData) -> Self {
        Self {
            cells: [0; Cell::COUNT],
            selection: vec![0; memo.target],
        }
    }

    pub fn get(&self, cell: Cell) -> u64 {
        self.cells[cell as usize]
    }
}
