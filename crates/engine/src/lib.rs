//! Engine module - sessions and grid persistence.
//!
//! Sits between the pure core and the frontends:
//!
//! - [`store`]: [`SnapshotStore`] trait, a JSON file store and an in-memory store
//! - [`session`]: [`Session`], which applies actions to a
//!   [`GameState`](tui_2048_core::GameState) and saves the grid after changes
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameConfig;
//! use tui_2048_engine::{MemoryStore, Session};
//! use tui_2048_types::{Direction, GameAction};
//!
//! let store = MemoryStore::with_json("[[2,2,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]");
//! let mut session = Session::open(GameConfig::default(), 1, Some(Box::new(store))).unwrap();
//! let outcome = session.apply(GameAction::Move(Direction::Left)).unwrap();
//! assert!(outcome.changed);
//! assert_eq!(session.state().grid().get(0, 0), Some(4));
//! ```

pub mod session;
pub mod store;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use session::Session;
pub use store::{GridSnapshot, JsonFileStore, MemoryStore, SnapshotStore, StoreError};
