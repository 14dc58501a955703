//! Line merge - collapses one line of tiles toward index 0
//!
//! A line is a row or column read in travel order: index 0 is the end the
//! tiles move toward. Empty cells are `0`.
//!
//! The pass walks each position `i` once and scans ahead for the first
//! non-empty value:
//!
//! - an empty `i` takes the value (a shift) and keeps scanning for a partner
//! - an occupied `i` absorbs an equal value (a merge) and is then done
//! - an occupied `i` facing a different value is blocked and is done
//! - an equal pair whose sum does not fit in a [`Tile`] is blocked too
//!
//! Once position `i` has merged the pass never returns to it, so a tile takes
//! part in at most one merge per move (`[2, 2, 4]` becomes `[4, 4, 0]`, not `[8]`).

use crate::types::{Tile, EMPTY};

/// Merge a line in place, returning true if any cell changed.
///
/// ```
/// use tui_2048_core::merge_line;
///
/// let mut line = [2, 2, 0, 4];
/// assert!(merge_line(&mut line));
/// assert_eq!(line, [4, 4, 0, 0]);
///
/// let mut empty = [0, 0, 0, 0];
/// assert!(!merge_line(&mut empty));
/// ```
pub fn merge_line(line: &mut [Tile]) -> bool {
    let mut changed = false;
    let len = line.len();

    for i in 0..len.saturating_sub(1) {
        for j in (i + 1)..len {
            if line[j] == EMPTY {
                continue;
            }
            if line[i] == EMPTY {
                // Shift, then look further for a partner of the moved tile.
                line[i] = line[j];
                line[j] = EMPTY;
                changed = true;
                continue;
            }
            if line[i] == line[j] {
                if let Some(sum) = line[i].checked_add(line[j]) {
                    line[i] = sum;
                    line[j] = EMPTY;
                    changed = true;
                }
            }
            break;
        }
    }

    changed
}
