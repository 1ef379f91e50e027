//! Canonical wire form - one packed byte per cell
//!
//! The layout is independent of any sealing strategy: each byte is the
//! cell's packed index on the shared grid, and the cell count is implicit
//! in the byte length. Length policy (minimum gesture length, whether an
//! empty gesture is acceptable) lives with the caller, so an empty byte
//! string unpacks to an empty pattern here.

use super::{Cell, Grid, Pattern};
use crate::{Error, Result};

/// Pack a pattern into its canonical byte form.
///
/// Fails with [`Error::MalformedPatternData`] when a cell falls off the
/// grid or the sequence revisits a cell -- such a sequence is not a
/// gesture, and sealing it would produce a token that can never unpack.
pub fn pack(grid: Grid, pattern: &Pattern) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(pattern.len());
    for cell in pattern.cells() {
        if !grid.contains(*cell) {
            return Err(Error::MalformedPatternData);
        }
        let id = cell.id(grid);
        if bytes.contains(&id) {
            return Err(Error::MalformedPatternData);
        }
        bytes.push(id);
    }
    Ok(bytes)
}

/// Exact inverse of [`pack`].
///
/// Fails with [`Error::MalformedPatternData`] when a byte addresses no
/// cell on `grid` or a cell appears twice.
pub fn unpack(grid: Grid, bytes: &[u8]) -> Result<Pattern> {
    let mut cells: Vec<Cell> = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        let cell = Cell::from_id(grid, byte)?;
        if cells.contains(&cell) {
            return Err(Error::MalformedPatternData);
        }
        cells.push(cell);
    }
    Ok(Pattern::new(cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(cells: &[(u8, u8)]) -> Pattern {
        Pattern::new(cells.iter().map(|&(r, c)| Cell::new(r, c)).collect())
    }

    #[test]
    fn test_pack_layout() {
        let grid = Grid::default();
        let pattern = gesture(&[(0, 0), (0, 1), (1, 1), (2, 2)]);

        // Row-major packed indices on the 3x3 pad
        assert_eq!(pack(grid, &pattern).unwrap(), vec![0, 1, 4, 8]);
    }

    #[test]
    fn test_roundtrip() {
        let grid = Grid::default();
        let pattern = gesture(&[(2, 0), (1, 1), (0, 2), (0, 1)]);

        let bytes = pack(grid, &pattern).unwrap();
        let recovered = unpack(grid, &bytes).unwrap();

        assert_eq!(recovered, pattern);
    }

    #[test]
    fn test_empty_is_permitted() {
        // Length policy is the caller's; the wire form stays permissive
        let grid = Grid::default();
        let empty = Pattern::new(Vec::new());

        assert_eq!(pack(grid, &empty).unwrap(), Vec::<u8>::new());
        assert_eq!(unpack(grid, &[]).unwrap(), empty);
    }

    #[test]
    fn test_pack_rejects_off_grid_cell() {
        let grid = Grid::default();
        let pattern = gesture(&[(0, 0), (3, 0)]);

        assert!(matches!(
            pack(grid, &pattern),
            Err(Error::MalformedPatternData)
        ));
    }

    #[test]
    fn test_pack_rejects_revisited_cell() {
        let grid = Grid::default();
        let pattern = gesture(&[(0, 0), (1, 1), (0, 0)]);

        assert!(matches!(
            pack(grid, &pattern),
            Err(Error::MalformedPatternData)
        ));
    }

    #[test]
    fn test_unpack_rejects_out_of_range_byte() {
        let grid = Grid::default();

        // 9 addresses no cell on a 3x3 pad
        assert!(matches!(
            unpack(grid, &[0, 9]),
            Err(Error::MalformedPatternData)
        ));
    }

    #[test]
    fn test_unpack_rejects_duplicate_byte() {
        let grid = Grid::default();

        assert!(matches!(
            unpack(grid, &[4, 4]),
            Err(Error::MalformedPatternData)
        ));
    }

    #[test]
    fn test_grid_sizes_disagreeing_change_meaning() {
        // The grid is shared configuration: the same bytes mean different
        // cells on different grids, so both sides must agree on it.
        let small = Grid::default();
        let large = Grid::new(4).unwrap();

        let pattern = gesture(&[(1, 0)]);
        let bytes = pack(small, &pattern).unwrap();

        let reread = unpack(large, &bytes).unwrap();
        assert_ne!(reread, pattern);
        assert_eq!(reread.cells()[0], Cell::new(0, 3));
    }
}
