#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative grid snapshot for the Roll Depot engine.
//!
//! The snapshot is parsed once from text rows supplied by an adapter and is
//! immutable afterwards. It answers presence queries only; the peeling system
//! derives its static adjacency data from these answers and never reads the
//! input text itself.

use roll_depot_core::{CellCoord, CellState};
use thiserror::Error;

/// Marker character identifying a roll in text input unless overridden.
pub const DEFAULT_MARKER: char = '@';

/// Errors raised while constructing a [`GridSnapshot`] from text rows.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Every row must share the length of the first row.
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length established by the first row.
        expected: usize,
        /// Length observed on the offending row.
        len: usize,
    },
    /// Row lengths are bounded by the 32-bit coordinate space.
    #[error("row length {len} exceeds the supported grid width")]
    RowTooWide {
        /// Observed row length.
        len: usize,
    },
    /// Row counts are bounded by the 32-bit coordinate space.
    #[error("row count {rows} exceeds the supported grid height")]
    TooManyRows {
        /// Observed row count.
        rows: usize,
    },
}

/// Immutable rectangular matrix recording which cells hold a roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    columns: u32,
    rows: u32,
    cells: Vec<CellState>,
}

impl GridSnapshot {
    /// Parses a snapshot from an ordered sequence of equal-length text rows.
    ///
    /// A cell is [`CellState::Present`] exactly when its character equals
    /// `marker`. Ragged rows are rejected; blank-line stripping is the
    /// loader's responsibility and must happen before this call. An empty
    /// sequence yields the empty snapshot.
    pub fn parse<I, S>(rows: I, marker: char) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns: Option<usize> = None;
        let mut cells = Vec::new();
        let mut row_count: usize = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            let expected = *columns.get_or_insert(len);
            if len != expected {
                return Err(GridError::RaggedRow { row, expected, len });
            }

            cells.extend(line.chars().map(|ch| {
                if ch == marker {
                    CellState::Present
                } else {
                    CellState::Absent
                }
            }));
            row_count += 1;
        }

        let width = columns.unwrap_or(0);
        let columns = u32::try_from(width).map_err(|_| GridError::RowTooWide { len: width })?;
        let rows =
            u32::try_from(row_count).map_err(|_| GridError::TooManyRows { rows: row_count })?;

        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    /// Builds a snapshot of the provided dimensions from explicit roll cells.
    ///
    /// Cells falling outside the dimensions are ignored. Used to restate a
    /// surviving subgrid as a fresh snapshot, for example when re-deriving
    /// degrees after a cascade.
    #[must_use]
    pub fn from_present_cells<I>(columns: u32, rows: u32, present: I) -> Self
    where
        I: IntoIterator<Item = CellCoord>,
    {
        let capacity = usize::try_from(columns)
            .unwrap_or(0)
            .checked_mul(usize::try_from(rows).unwrap_or(0))
            .unwrap_or(0);
        let mut snapshot = Self {
            columns,
            rows,
            cells: vec![CellState::Absent; capacity],
        };

        for cell in present {
            if let Some(index) = snapshot.index(cell) {
                snapshot.cells[index] = CellState::Present;
            }
        }

        snapshot
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Occupancy recorded for the provided cell.
    ///
    /// Cells outside the grid bounds report [`CellState::Absent`] so callers
    /// can probe lattice neighbors without their own bounds checks.
    #[must_use]
    pub fn state(&self, cell: CellCoord) -> CellState {
        self.index(cell)
            .map_or(CellState::Absent, |index| self.cells[index])
    }

    /// Reports whether the provided cell holds a roll.
    #[must_use]
    pub fn is_present(&self, cell: CellCoord) -> bool {
        self.state(cell).is_present()
    }

    /// Iterates every roll-occupied cell in row-major order.
    pub fn present_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(offset, state)| {
                if !state.is_present() {
                    return None;
                }
                let offset = u32::try_from(offset).ok()?;
                Some(CellCoord::new(offset % columns, offset / columns))
            })
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let column = usize::try_from(cell.column()).ok()?;
            let row = usize::try_from(cell.row()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            row.checked_mul(width)?.checked_add(column)
        } else {
            None
        }
    }
}
