//! Terminal-state detection
//!
//! A grid is terminal when none of the four moves changes it.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::moves::move_grid;
use crate::types::Direction;

/// True when no direction can move or merge anything.
///
/// Tries up, down, left, right in that order against one scratch copy and
/// stops at the first move that changes it. Each move runs on whatever the
/// previous one left behind; since any change returns early, every move that
/// runs sees the original layout.
///
/// ```
/// use tui_2048_core::{is_terminal, Grid};
///
/// let stuck = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
/// assert!(is_terminal(&stuck));
///
/// let open = Grid::from_rows(vec![vec![2, 2], vec![4, 8]]).unwrap();
/// assert!(!is_terminal(&open));
/// ```
pub fn is_terminal(grid: &Grid) -> bool {
    let mut scratch = grid.clone();
    for direction in Direction::ALL {
        if move_grid(&mut scratch, direction) {
            return false;
        }
    }
    true
}

/// Directions that would change `grid`, each tried on a fresh copy.
pub fn available_moves(grid: &Grid) -> ArrayVec<Direction, 4> {
    let mut moves = ArrayVec::new();
    let mut scratch = grid.clone();
    for direction in Direction::ALL {
        if move_grid(&mut scratch, direction) {
            moves.push(direction);
            scratch.clone_from(grid);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn grid(rows: Vec<Vec<Tile>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn checkerboard_is_terminal() {
        let g = grid(vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ]);
        assert!(is_terminal(&g));
        assert!(available_moves(&g).is_empty());
    }

    #[test]
    fn vertical_pair_keeps_game_alive() {
        let g = grid(vec![vec![2, 4], vec![2, 8]]);
        assert!(!is_terminal(&g));
        let moves = available_moves(&g);
        assert_eq!(moves.as_slice(), &[Direction::Up, Direction::Down]);
    }

    #[test]
    fn horizontal_pair_keeps_game_alive() {
        let g = grid(vec![vec![2, 4], vec![8, 8]]);
        assert!(!is_terminal(&g));
        assert_eq!(
            available_moves(&g).as_slice(),
            &[Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn empty_cell_keeps_game_alive() {
        let g = grid(vec![vec![2, 4], vec![8, 0]]);
        assert!(!is_terminal(&g));
    }

    #[test]
    fn detector_does_not_touch_input() {
        let g = grid(vec![vec![0, 2], vec![2, 0]]);
        let before = g.clone();
        assert!(!is_terminal(&g));
        let _ = available_moves(&g);
        assert_eq!(g, before);
    }

    #[test]
    fn single_cell_is_terminal_once_filled() {
        assert!(is_terminal(&grid(vec![vec![2]])));
    }
}
