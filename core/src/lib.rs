#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Roll Depot engine.
//!
//! This crate defines the vocabulary that connects the grid snapshot, the
//! peeling system, and the adapters: cell coordinates, cell occupancy, the
//! fixed lattice neighborhood, and the accessibility threshold. Everything
//! here is a plain value type; the crates building on top own all state.

use serde::{Deserialize, Serialize};

/// Minimum number of still-present neighbors a roll needs to stay pinned.
///
/// A roll whose live-neighbor count drops strictly below this value becomes
/// accessible and can be removed. A roll holding exactly this many live
/// neighbors is never removable on its own.
pub const ACCESS_THRESHOLD: u32 = 4;

/// Fixed 8-direction lattice neighborhood expressed as (column, row) steps.
///
/// Covers the four orthogonal and four diagonal unit offsets. Neighbor lists
/// are always derived against this set; it is never extended or filtered at
/// runtime.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Occupancy recorded for a single grid cell.
///
/// The marker character used by text inputs is an interface concern of the
/// loader; once a grid is parsed, only these two states exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// The cell holds a roll.
    Present,
    /// The cell is empty.
    Absent,
}

impl CellState {
    /// Reports whether the cell holds a roll.
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Applies a signed lattice offset to the coordinate.
    ///
    /// Returns `None` when either component would leave the non-negative
    /// coordinate space. Upper grid bounds are the snapshot's concern; this
    /// method only guards the underflow side.
    #[must_use]
    pub fn offset_by(self, column_offset: i32, row_offset: i32) -> Option<Self> {
        let column = self.column.checked_add_signed(column_offset)?;
        let row = self.row.checked_add_signed(row_offset)?;
        Some(Self { column, row })
    }
}
