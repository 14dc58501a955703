//! Game state module - one play session on one grid
//!
//! This module ties together the grid, the move engine, the spawner and the
//! terminal-state check. It drives the per-move sequence
//! (move → spawn on change → terminal check) and the reset lifecycle.

use arrayvec::ArrayVec;
use log::{debug, info, warn};

use crate::error::CoreError;
use crate::grid::Grid;
use crate::init::init_grid;
use crate::moves::move_grid;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_tile, Candidates};
use crate::terminal::{available_moves, is_terminal};
use crate::types::*;

/// Dimensions and spawn settings used when (re)building a grid.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Tiles placed on a fresh grid.
    pub spawn_count: usize,
    pub candidates: Candidates,
}

impl GameConfig {
    /// A `size x size` configuration.
    pub fn square(size: usize, spawn_count: usize, candidates: Candidates) -> Self {
        Self {
            rows: size,
            cols: size,
            spawn_count,
            candidates,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            spawn_count: DEFAULT_SPAWN_COUNT,
            candidates: Candidates::default(),
        }
    }
}

/// What a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one tile shifted or merged.
    pub changed: bool,
    /// Cell that received the new tile, if the move changed the grid.
    pub spawned: Option<(usize, usize)>,
    /// No further move is possible.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    config: GameConfig,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic episode id (increments on every reset).
    episode_id: u32,
    /// Successful moves in the current episode.
    moves: u32,
    last_spawn: Option<(usize, usize)>,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, CoreError> {
        let mut rng = SimpleRng::new(seed);
        let grid = init_grid(
            config.rows,
            config.cols,
            config.spawn_count,
            &config.candidates,
            &mut rng,
        )?;
        let game_over = is_terminal(&grid);

        Ok(Self {
            grid,
            config,
            rng,
            seed,
            episode_id: 0,
            moves: 0,
            last_spawn: None,
            game_over,
        })
    }

    /// Resume from a previously saved grid.
    ///
    /// The config's dimensions follow the grid so a later restart keeps its size.
    pub fn from_grid(grid: Grid, mut config: GameConfig, seed: u32) -> Self {
        config.rows = grid.rows();
        config.cols = grid.cols();
        let game_over = is_terminal(&grid);
        Self {
            grid,
            config,
            rng: SimpleRng::new(seed),
            seed,
            episode_id: 0,
            moves: 0,
            last_spawn: None,
            game_over,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_spawn(&self) -> Option<(usize, usize)> {
        self.last_spawn
    }

    pub fn best_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    pub fn available_moves(&self) -> ArrayVec<Direction, 4> {
        available_moves(&self.grid)
    }

    /// Move, and on change spawn one tile and re-check for game over.
    ///
    /// A move that changes nothing leaves the grid, counters and RNG untouched.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if !move_grid(&mut self.grid, direction) {
            warn!("move {} left the grid unchanged", direction.as_str());
            return MoveOutcome {
                changed: false,
                spawned: None,
                game_over: self.game_over,
            };
        }

        self.moves += 1;
        // A changed move always leaves at least one empty cell.
        self.last_spawn = match spawn_tile(&mut self.grid, &self.config.candidates, &mut self.rng) {
            Ok(pos) => Some(pos),
            Err(err) => {
                warn!("no tile spawned after move {}: {}", direction.as_str(), err);
                None
            }
        };
        self.game_over = is_terminal(&self.grid);

        debug!(
            "move {} #{}: spawned {:?}, best {}, game_over {}",
            direction.as_str(),
            self.moves,
            self.last_spawn,
            self.grid.max_tile(),
            self.game_over
        );

        MoveOutcome {
            changed: true,
            spawned: self.last_spawn,
            game_over: self.game_over,
        }
    }

    /// Apply a move or a lifecycle action.
    ///
    /// Restart and resize actions report `changed` with no spawn position.
    pub fn apply_action(&mut self, action: GameAction) -> Result<MoveOutcome, CoreError> {
        match action {
            GameAction::Move(direction) => return Ok(self.apply_move(direction)),
            GameAction::Restart => self.restart()?,
            GameAction::Grow => {
                let size = (self.grid.rows() + 1).min(MAX_GRID_SIZE);
                self.reset(size, self.config.spawn_count, None)?;
            }
            GameAction::Shrink => {
                let size = self.grid.rows().saturating_sub(1).max(MIN_GRID_SIZE);
                self.reset(size, self.config.spawn_count, None)?;
            }
        }
        Ok(MoveOutcome {
            changed: true,
            spawned: None,
            game_over: self.game_over,
        })
    }

    /// Start a new episode with the current dimensions and spawn settings.
    pub fn restart(&mut self) -> Result<(), CoreError> {
        let grid = init_grid(
            self.config.rows,
            self.config.cols,
            self.config.spawn_count,
            &self.config.candidates,
            &mut self.rng,
        )?;
        self.begin_episode(grid);
        Ok(())
    }

    /// Start a new episode on a `size x size` grid.
    ///
    /// `size` must be at least [`MIN_GRID_SIZE`] and `spawn_count` at least 1;
    /// on error the current game is left as it was.
    pub fn reset(
        &mut self,
        size: usize,
        spawn_count: usize,
        candidates: Option<Candidates>,
    ) -> Result<(), CoreError> {
        if size < MIN_GRID_SIZE {
            return Err(CoreError::GridTooSmall {
                size,
                min: MIN_GRID_SIZE,
            });
        }
        if spawn_count == 0 {
            return Err(CoreError::InvalidSpawnCount);
        }

        let candidates = candidates.unwrap_or_else(|| self.config.candidates.clone());
        let grid = init_grid(size, size, spawn_count, &candidates, &mut self.rng)?;

        self.config = GameConfig::square(size, spawn_count, candidates);
        self.begin_episode(grid);
        Ok(())
    }

    /// Swap in an externally supplied grid (e.g. a loaded snapshot).
    pub fn replace_grid(&mut self, grid: Grid) {
        self.config.rows = grid.rows();
        self.config.cols = grid.cols();
        self.game_over = is_terminal(&grid);
        self.grid = grid;
        self.last_spawn = None;
    }

    fn begin_episode(&mut self, grid: Grid) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.moves = 0;
        self.last_spawn = None;
        self.game_over = is_terminal(&grid);
        self.grid = grid;
        info!(
            "episode {} started on a {}x{} grid",
            self.episode_id,
            self.grid.rows(),
            self.grid.cols()
        );
    }

    /// Fill `out` with the current state, reusing its grid allocation when possible.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.available = self.available_moves();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.moves = self.moves;
        out.best_tile = self.grid.max_tile();
        out.last_spawn = self.last_spawn;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::new(self.grid.clone());
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(rows: Vec<Vec<Tile>>) -> GameState {
        GameState::from_grid(Grid::from_rows(rows).unwrap(), GameConfig::default(), 1)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::default(), 12345).unwrap();
        assert_eq!(state.grid().rows(), DEFAULT_ROWS);
        assert_eq!(state.grid().cols(), DEFAULT_COLS);
        assert_eq!(state.grid().count_tiles(), DEFAULT_SPAWN_COUNT);
        assert_eq!(state.moves(), 0);
        assert!(!state.game_over());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameState::new(GameConfig::default(), 77).unwrap();
        let mut b = GameState::new(GameConfig::default(), 77).unwrap();
        assert_eq!(a.grid(), b.grid());
        for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply_move(d), b.apply_move(d));
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn test_changed_move_spawns_one_tile() {
        let mut state = state_with(vec![vec![2, 2, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        let outcome = state.apply_move(Direction::Left);
        assert!(outcome.changed);
        assert_eq!(state.grid().get(0, 0), Some(4));
        assert_eq!(state.grid().count_tiles(), 2);
        let (r, c) = outcome.spawned.unwrap();
        assert_ne!((r, c), (0, 0));
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn test_unchanged_move_does_nothing() {
        let mut state = state_with(vec![vec![2, 4], vec![0, 0]]);
        let before = state.grid().clone();
        let outcome = state.apply_move(Direction::Up);
        assert_eq!(outcome, MoveOutcome::default());
        assert_eq!(state.grid(), &before);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_move_into_terminal_state() {
        // Left merges the 2s; the spawn fills the last cell and nothing can move.
        let config = GameConfig {
            candidates: Candidates::new(&[16]).unwrap(),
            ..GameConfig::default()
        };
        let grid = Grid::from_rows(vec![vec![2, 2], vec![8, 4]]).unwrap();
        let mut state = GameState::from_grid(grid, config, 3);
        let outcome = state.apply_move(Direction::Left);
        assert!(outcome.changed);
        assert_eq!(outcome.spawned, Some((0, 1)));
        assert_eq!(state.grid().to_rows(), vec![vec![4, 16], vec![8, 4]]);
        assert!(outcome.game_over);
        assert!(state.game_over());
        assert!(state.available_moves().is_empty());
    }

    #[test]
    fn test_reset_validates_before_mutating() {
        let mut state = GameState::new(GameConfig::default(), 5).unwrap();
        let before = state.grid().clone();

        assert_eq!(
            state.reset(1, 3, None),
            Err(CoreError::GridTooSmall { size: 1, min: 2 })
        );
        assert_eq!(state.reset(4, 0, None), Err(CoreError::InvalidSpawnCount));
        assert_eq!(state.grid(), &before);
        assert_eq!(state.episode_id(), 0);
    }

    #[test]
    fn test_reset_builds_square_grid() {
        let mut state = GameState::new(GameConfig::default(), 5).unwrap();
        state.apply_move(Direction::Left);
        state
            .reset(5, 2, Some(Candidates::new(&[4]).unwrap()))
            .unwrap();
        assert_eq!((state.grid().rows(), state.grid().cols()), (5, 5));
        assert_eq!(state.grid().count_tiles(), 2);
        assert!(state.grid().cells().iter().all(|&v| v == 0 || v == 4));
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_grow_and_shrink_clamp() {
        let mut state = GameState::new(GameConfig::square(MIN_GRID_SIZE, 1, Candidates::default()), 9)
            .unwrap();
        state.apply_action(GameAction::Shrink).unwrap();
        assert_eq!(state.grid().rows(), MIN_GRID_SIZE);

        state.apply_action(GameAction::Grow).unwrap();
        assert_eq!(state.grid().rows(), MIN_GRID_SIZE + 1);

        for _ in 0..MAX_GRID_SIZE {
            state.apply_action(GameAction::Grow).unwrap();
        }
        assert_eq!(state.grid().rows(), MAX_GRID_SIZE);
    }

    #[test]
    fn test_restart_keeps_dimensions() {
        let config = GameConfig {
            rows: 3,
            cols: 5,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config, 4).unwrap();
        state.apply_action(GameAction::Restart).unwrap();
        assert_eq!((state.grid().rows(), state.grid().cols()), (3, 5));
        assert_eq!(state.episode_id(), 1);
    }

    #[test]
    fn test_replace_grid_recomputes_game_over() {
        let mut state = GameState::new(GameConfig::default(), 4).unwrap();
        state.replace_grid(Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap());
        assert!(state.game_over());
        assert_eq!(state.config().rows, 2);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = state_with(vec![vec![2, 2], vec![0, 0]]);
        state.apply_move(Direction::Left);
        let snap = state.snapshot();
        assert_eq!(&snap.grid, state.grid());
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.best_tile, 4);
        assert_eq!(snap.last_spawn, state.last_spawn());
        assert_eq!(snap.game_over, state.game_over());
        assert!(snap.playable() != state.game_over());
    }
}
