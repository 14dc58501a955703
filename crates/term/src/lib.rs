//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It avoids widget/layout
//! libraries and renders into a simple framebuffer that is flushed to the
//! terminal with crossterm, diffing against the previous frame.
//!
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TilePalette`] picks a background per tile value
//! - [`TerminalRenderer`] owns the real terminal (raw mode, alternate screen, mouse)

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_label, AnchorY, GameView, StatusView, Viewport};
pub use palette::{TilePalette, EMPTY_COLOR, TILE_COLORS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
