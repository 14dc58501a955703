//! Grid module - the rectangular field of tiles
//!
//! The grid is `rows x cols` cells where each cell is `0` (empty) or a tile value.
//! Uses a flat vector in row-major order for cache locality; its dimensions are
//! fixed at construction and never change afterwards.
//! Coordinates: (row, col) where row grows top to bottom and col left to right.

use crate::error::CoreError;
use crate::types::{Tile, EMPTY};

/// The playing field, stored as a flat row-major vector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat vector of cells, row-major order (row * cols + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, CoreError> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        })
    }

    /// Build a grid from nested rows, rejecting empty or ragged input.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(grid.get(1, 1), Some(4));
    /// assert!(Grid::from_rows(vec![vec![2, 0], vec![4]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, CoreError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(CoreError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(CoreError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Convert to nested rows (the snapshot shape used for persistence)
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.cols).map(<[Tile]>::to_vec).collect()
    }

    #[inline(always)]
    pub(crate) fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(EMPTY)
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == EMPTY)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn count_tiles(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != EMPTY)
    }

    /// Largest tile on the grid (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tiles; merges and shifts never change it
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Get a reference to the flat cell storage
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    /// Iterate rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.cols)
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<&Grid> for Vec<Vec<Tile>> {
    fn from(grid: &Grid) -> Self {
        grid.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 4), Some(4));
        assert_eq!(grid.index(1, 0), Some(5));
        assert_eq!(grid.index(2, 4), Some(14));
        assert_eq!(grid.index(3, 0), None);
        assert_eq!(grid.index(0, 5), None);
    }

    #[test]
    fn test_grid_flat_storage() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, 2);
        grid.set(2, 3, 8);

        assert_eq!(grid.get(0, 0), Some(2));
        assert_eq!(grid.get(2, 3), Some(8));
        assert_eq!(grid.cells[0], 2);
        assert_eq!(grid.cells[2 * 4 + 3], 8);
    }

    #[test]
    fn test_grid_rows_roundtrip() {
        let rows = vec![vec![0, 2, 0], vec![4, 0, 8]];
        let grid = Grid::from_rows(rows.clone()).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(CoreError::InvalidDimensions { rows: 0, cols: 4 })
        );
        assert_eq!(Grid::from_rows(vec![]), Err(CoreError::EmptyGrid));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(CoreError::EmptyGrid));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Grid::from_rows(vec![vec![0, 0], vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            CoreError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
        assert_eq!(grid.empty_cells(), vec![(0, 1), (1, 0)]);
        assert_eq!(grid.count_empty(), 2);
        assert_eq!(grid.count_tiles(), 2);
        assert!(!grid.is_full());
        assert_eq!(grid.max_tile(), 4);
        assert_eq!(grid.total(), 6);
    }
}
