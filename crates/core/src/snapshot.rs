use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Direction, Tile};

/// Read-only view of a session handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    /// Directions that would change the grid.
    pub available: ArrayVec<Direction, 4>,
    pub episode_id: u32,
    pub seed: u32,
    pub moves: u32,
    pub best_tile: Tile,
    pub last_spawn: Option<(usize, usize)>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn new(grid: Grid) -> Self {
        Self {
            best_tile: grid.max_tile(),
            grid,
            available: ArrayVec::new(),
            episode_id: 0,
            seed: 0,
            moves: 0,
            last_spawn: None,
            game_over: false,
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
