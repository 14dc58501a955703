//! Tile colors.
//!
//! One background per tile exponent, from `2` up to `4096` and beyond,
//! looked up with [`color_for`].

use crate::core::color_for;
use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

/// Backgrounds for 2, 4, 8, ... 2048, then 4096 and above.
pub const TILE_COLORS: [Rgb; 12] = [
    Rgb::new(0xee, 0xe4, 0xda),
    Rgb::new(0xed, 0xe0, 0xc8),
    Rgb::new(0xf2, 0xb1, 0x79),
    Rgb::new(0xf5, 0x95, 0x63),
    Rgb::new(0xf6, 0x7c, 0x5f),
    Rgb::new(0xf6, 0x5e, 0x3b),
    Rgb::new(0xed, 0xcf, 0x72),
    Rgb::new(0xed, 0xcc, 0x61),
    Rgb::new(0xed, 0xc8, 0x50),
    Rgb::new(0xed, 0xc5, 0x3f),
    Rgb::new(0xed, 0xc2, 0x2e),
    Rgb::new(0x3c, 0x3a, 0x32),
];

/// Background of an empty cell.
pub const EMPTY_COLOR: Rgb = Rgb::new(0xcd, 0xc1, 0xb4);

const DARK_TEXT: Rgb = Rgb::new(0x77, 0x6e, 0x65);
const LIGHT_TEXT: Rgb = Rgb::new(0xf9, 0xf6, 0xf2);

/// A palette plus the empty-cell color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePalette {
    colors: Vec<Rgb>,
    empty: Rgb,
}

impl TilePalette {
    /// Custom colors; an empty list falls back to [`TILE_COLORS`].
    pub fn new(colors: Vec<Rgb>, empty: Rgb) -> Self {
        let colors = if colors.is_empty() {
            TILE_COLORS.to_vec()
        } else {
            colors
        };
        Self { colors, empty }
    }

    /// Parse `#rrggbb` entries, skipping any that do not parse.
    pub fn from_hex<'a>(colors: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(colors.into_iter().filter_map(Rgb::from_hex).collect(), EMPTY_COLOR)
    }

    pub fn background(&self, value: Tile) -> Rgb {
        color_for(value, &self.colors, self.empty)
    }

    /// Style for a tile: its background plus text that stays readable on it.
    pub fn style(&self, value: Tile) -> CellStyle {
        let bg = self.background(value);
        let fg = if bg.luma() > 180 { DARK_TEXT } else { LIGHT_TEXT };
        CellStyle {
            fg,
            bg,
            bold: true,
            dim: false,
        }
    }
}

impl Default for TilePalette {
    fn default() -> Self {
        Self::new(TILE_COLORS.to_vec(), EMPTY_COLOR)
    }
}
