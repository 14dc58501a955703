//! Grid initialization - an empty grid plus a few spawned tiles

use rand::Rng;

use crate::error::CoreError;
use crate::grid::Grid;
use crate::spawn::{spawn_tile, Candidates};

/// Build a `rows x cols` grid and spawn `spawn_count` tiles into it.
///
/// The spawn count is clamped to the number of cells, so asking for more
/// tiles than fit fills the grid instead of failing. Zero dimensions or a
/// zero spawn count are rejected before anything is built.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tui_2048_core::{init_grid, Candidates};
///
/// let mut rng = StdRng::seed_from_u64(5);
/// let candidates = Candidates::new(&[2, 4]).unwrap();
/// let grid = init_grid(4, 4, 3, &candidates, &mut rng).unwrap();
/// assert_eq!(grid.count_tiles(), 3);
/// assert_eq!(grid.count_empty(), 13);
/// ```
pub fn init_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    spawn_count: usize,
    candidates: &Candidates,
    rng: &mut R,
) -> Result<Grid, CoreError> {
    if spawn_count == 0 {
        return Err(CoreError::InvalidSpawnCount);
    }
    let mut grid = Grid::new(rows, cols)?;

    let count = spawn_count.min(rows * cols);
    for _ in 0..count {
        spawn_tile(&mut grid, candidates, rng)?;
    }
    Ok(grid)
}
