//! Cell and gesture primitives
//!
//! Cells are addressed by `(row, column)` and order between cells is by
//! `(row, column)` too. Distinctness within a gesture and minimum gesture
//! length are the capture layer's job; the codec takes the sequence as
//! already validated.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Grid geometry shared by encoder and decoder.
///
/// The side length is a fixed configuration value: both sides of a round
/// trip must agree on it, and it is never embedded in tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    side: u8,
}

impl Grid {
    /// Largest side the one-byte-per-cell wire layout can address.
    pub const MAX_SIDE: u8 = 16;

    /// A square grid with the given side length.
    ///
    /// Returns `None` when `side` is zero or larger than the wire layout
    /// can address.
    pub fn new(side: u8) -> Option<Self> {
        if side == 0 || side > Self::MAX_SIDE {
            return None;
        }
        Some(Self { side })
    }

    /// Side length in cells.
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> u16 {
        self.side as u16 * self.side as u16
    }

    /// Whether `cell` lies on this grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.side && cell.column < self.side
    }
}

impl Default for Grid {
    /// The classic 3x3 pad.
    fn default() -> Self {
        Self { side: 3 }
    }
}

/// A single pad position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: u8,
    pub column: u8,
}

impl Cell {
    pub fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Packed index of this cell on `grid`: `row * side + column`.
    pub fn id(&self, grid: Grid) -> u8 {
        self.row * grid.side() + self.column
    }

    /// Inverse of [`Cell::id`]. Fails when `id` addresses no cell on `grid`.
    pub fn from_id(grid: Grid, id: u8) -> Result<Self> {
        if u16::from(id) >= grid.cell_count() {
            return Err(Error::MalformedPatternData);
        }
        Ok(Self {
            row: id / grid.side(),
            column: id % grid.side(),
        })
    }
}

/// An ordered sequence of distinct cells: the drawn gesture.
///
/// Order is exactly the drawn sequence. The codec never stores one of
/// these; both the pattern and its token are transient values owned by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// The cells in drawn order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Cell>> for Pattern {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}
