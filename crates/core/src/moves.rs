//! Grid moves - decompose the grid into lines and merge each one
//!
//! | Direction | Lines | Read order (index 0 first) |
//! |-----------|-------|----------------------------|
//! | Up | columns | top → bottom |
//! | Down | columns | bottom → top |
//! | Left | rows | left → right |
//! | Right | rows | right → left |
//!
//! Each line is copied into one scratch buffer, merged, and written back
//! through the same index mapping, so index 0 of every line is always the
//! edge the tiles travel toward.

use crate::grid::Grid;
use crate::merge::merge_line;
use crate::types::{Direction, Tile};

/// A grid after a move together with whether anything changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    pub changed: bool,
}

/// Slide every line of `grid` in `direction`, in place.
///
/// Returns true iff at least one line shifted or merged.
///
/// ```
/// use tui_2048_core::{move_grid, Grid};
/// use tui_2048_types::Direction;
///
/// let mut grid = Grid::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
/// assert!(move_grid(&mut grid, Direction::Left));
/// assert_eq!(grid.to_rows(), vec![vec![4, 0], vec![0, 0]]);
/// ```
pub fn move_grid(grid: &mut Grid, direction: Direction) -> bool {
    let rows = grid.rows();
    let cols = grid.cols();
    let (line_count, line_len) = if direction.is_vertical() {
        (cols, rows)
    } else {
        (rows, cols)
    };

    let mut line: Vec<Tile> = Vec::with_capacity(line_len);
    let mut changed = false;
    let cells = grid.cells_mut();

    for k in 0..line_count {
        line.clear();
        line.extend((0..line_len).map(|t| cells[cell_index(direction, rows, cols, k, t)]));

        if merge_line(&mut line) {
            changed = true;
            for (t, &value) in line.iter().enumerate() {
                cells[cell_index(direction, rows, cols, k, t)] = value;
            }
        }
    }

    changed
}

/// Ownership-passing form of [`move_grid`]: takes the grid and hands it back.
pub fn shift(mut grid: Grid, direction: Direction) -> MoveResult {
    let changed = move_grid(&mut grid, direction);
    MoveResult { grid, changed }
}

/// Flat index of the `t`-th cell (in travel order) of line `k`.
#[inline(always)]
fn cell_index(direction: Direction, rows: usize, cols: usize, k: usize, t: usize) -> usize {
    match direction {
        Direction::Up => t * cols + k,
        Direction::Down => (rows - 1 - t) * cols + k,
        Direction::Left => k * cols + t,
        Direction::Right => k * cols + (cols - 1 - t),
    }
}
