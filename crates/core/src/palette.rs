//! Tile color lookup
//!
//! Palettes are indexed by tile exponent: entry 0 is the color of `2`,
//! entry 1 of `4`, and so on. The lookup is generic over the color type so
//! the terminal renderer can use RGB triples and tests can use strings.

use crate::types::{Tile, EMPTY};

/// Pick the palette entry for `value`.
///
/// - `0` returns `empty`
/// - otherwise index `floor(log2(value)) - 1`, so `1` and `2` share entry 0
/// - values past the end of the palette use its last entry
/// - an empty palette returns `empty`
///
/// ```
/// use tui_2048_core::color_for;
///
/// let palette = ["two", "four", "eight"];
/// assert_eq!(color_for(0, &palette, "none"), "none");
/// assert_eq!(color_for(2, &palette, "none"), "two");
/// assert_eq!(color_for(6, &palette, "none"), "four");
/// assert_eq!(color_for(4096, &palette, "none"), "eight");
/// ```
pub fn color_for<T: Copy>(value: Tile, palette: &[T], empty: T) -> T {
    if value == EMPTY {
        return empty;
    }
    let Some(&last) = palette.last() else {
        return empty;
    };
    let index = (value.ilog2() as usize).saturating_sub(1);
    palette.get(index).copied().unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: [u8; 4] = [10, 20, 30, 40];

    #[test]
    fn powers_of_two_walk_the_palette() {
        assert_eq!(color_for(2, &PALETTE, 0), 10);
        assert_eq!(color_for(4, &PALETTE, 0), 20);
        assert_eq!(color_for(8, &PALETTE, 0), 30);
        assert_eq!(color_for(16, &PALETTE, 0), 40);
    }

    #[test]
    fn large_values_clamp_to_last() {
        assert_eq!(color_for(32, &PALETTE, 0), 40);
        assert_eq!(color_for(1 << 20, &PALETTE, 0), 40);
    }

    #[test]
    fn empty_cell_and_empty_palette() {
        assert_eq!(color_for(0, &PALETTE, 99), 99);
        assert_eq!(color_for(8, &[] as &[u8], 99), 99);
    }

    #[test]
    fn one_shares_the_first_entry() {
        assert_eq!(color_for(1, &PALETTE, 0), 10);
    }
}
