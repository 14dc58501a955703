//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] values and turns pointer
//! press/release pairs into swipe directions.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{command_for_key, handle_key_event, should_quit, Command};
pub use swipe::{classify_swipe, SwipeTracker};
