//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping, persistence).
//!
//! # Grid Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 4 | Rows of a fresh grid |
//! | `DEFAULT_COLS` | 4 | Columns of a fresh grid |
//! | `DEFAULT_SPAWN_COUNT` | 3 | Tiles placed by the initializer |
//! | `DEFAULT_CANDIDATES` | `[2, 4, 8]` | Spawn values when none are supplied |
//! | `MIN_GRID_SIZE` | 2 | Smallest side accepted by a reset |
//! | `MAX_GRID_SIZE` | 8 | Largest side the terminal resize keys go to |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_CANDIDATES};
//!
//! let parsed = Direction::from_str("Left").unwrap();
//! assert_eq!(parsed, Direction::Left);
//! assert_eq!(parsed.opposite(), Direction::Right);
//!
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(DEFAULT_CANDIDATES, [2, 4, 8]);
//! ```

/// Value stored in a grid cell. `0` is an empty cell.
pub type Tile = u32;

/// Marker value for an empty cell.
pub const EMPTY: Tile = 0;

/// Rows of a freshly initialized grid.
pub const DEFAULT_ROWS: usize = 4;

/// Columns of a freshly initialized grid.
pub const DEFAULT_COLS: usize = 4;

/// Tiles spawned by the initializer on a fresh grid.
pub const DEFAULT_SPAWN_COUNT: usize = 3;

/// Spawn values used when the caller supplies none.
pub const DEFAULT_CANDIDATES: [Tile; 3] = [2, 4, 8];

/// Smallest grid side a reset accepts.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest grid side reachable with the resize keys.
pub const MAX_GRID_SIZE: usize = 8;

/// Minimum gesture magnitude for a swipe to register.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults() {
        assert_eq!(DEFAULT_ROWS, 4);
        assert_eq!(DEFAULT_COLS, 4);
        assert_eq!(DEFAULT_SPAWN_COUNT, 3);
        assert_eq!(DEFAULT_CANDIDATES, [2, 4, 8]);
        assert!(MIN_GRID_SIZE <= DEFAULT_ROWS && DEFAULT_ROWS <= MAX_GRID_SIZE);
    }

    #[test]
    fn direction_round_trips_through_str() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn direction_axes() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn action_parsing() {
        assert_eq!(
            GameAction::from_str("RIGHT"),
            Some(GameAction::Move(Direction::Right))
        );
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("grow"), Some(GameAction::Grow));
        assert_eq!(GameAction::from_str("fly"), None);
        assert_eq!(GameAction::Shrink.as_str(), "shrink");
    }
}

/// The four directions tiles can travel in.
///
/// A direction picks the axis the grid is decomposed along (columns for
/// `Up`/`Down`, rows for `Left`/`Right`) and the end tiles move toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the terminal-state check tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True when lines run along columns.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Actions that can be applied to a game session
///
/// These come from keyboard input, pointer swipes, or tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in the given direction
    Move(Direction),
    /// Start over with the current grid dimensions
    Restart,
    /// Restart on a grid one cell larger per side
    Grow,
    /// Restart on a grid one cell smaller per side
    Shrink,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Direction names map to [`GameAction::Move`].
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(direction) = Direction::from_str(s) {
            return Some(GameAction::Move(direction));
        }
        match s.to_lowercase().as_str() {
            "restart" => Some(GameAction::Restart),
            "grow" => Some(GameAction::Grow),
            "shrink" => Some(GameAction::Shrink),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::Restart => "restart",
            GameAction::Grow => "grow",
            GameAction::Shrink => "shrink",
        }
    }
}
