//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid transformation rules and the session state
//! built on top of them. It has **no dependencies** on terminal I/O or
//! persistence, making it:
//!
//! - **Deterministic**: all randomness is injected; the same seed replays the same game
//! - **Testable**: every rule is a plain function over a [`Grid`]
//! - **Portable**: usable from the terminal binary, tests, benches or any other frontend
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular tile field with row-major flat storage
//! - [`merge`]: collapses one line toward its start, one merge per tile
//! - [`moves`]: decomposes the grid into lines for each [`Direction`](types::Direction)
//! - [`spawn`]: places a candidate value into a random empty cell
//! - [`terminal`]: detects grids where no move changes anything
//! - [`init`]: builds a fresh grid with a few spawned tiles
//! - [`palette`]: maps tile values to palette entries for renderers
//! - [`rng`]: small deterministic LCG usable as a `rand` RNG
//! - [`game_state`]: one play session (move → spawn → terminal check, resets)
//! - [`snapshot`]: read-only session view for renderers
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbors along the line merge into their sum
//! - A tile merges at most once per move (`[2, 2, 4]` slides left to `[4, 4, 0]`)
//! - Only a move that changes the grid spawns a new tile
//! - The game ends when none of the four moves changes the grid
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameConfig, GameState};
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//! assert_eq!(game.grid().count_tiles(), 3);
//!
//! let outcome = game.apply_action(GameAction::Move(Direction::Left)).unwrap();
//! if outcome.changed {
//!     assert!(outcome.spawned.is_some());
//! }
//! ```

pub mod error;
pub mod game_state;
pub mod grid;
pub mod init;
pub mod merge;
pub mod moves;
pub mod palette;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod terminal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use error::{CoreError, ErrorKind};
pub use game_state::{GameConfig, GameState, MoveOutcome};
pub use grid::Grid;
pub use init::init_grid;
pub use merge::merge_line;
pub use moves::{move_grid, shift, MoveResult};
pub use palette::color_for;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use spawn::{spawn_tile, spawn_tile_from, Candidates};
pub use terminal::{available_moves, is_terminal};
