//! Tile spawning - place one new tile in a random empty cell
//!
//! The random source is always supplied by the caller, so a seeded RNG
//! gives reproducible games and tests.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::CoreError;
use crate::grid::Grid;
use crate::types::{Tile, DEFAULT_CANDIDATES, EMPTY};

/// The values a spawn may place, optionally weighted.
#[derive(Debug, Clone)]
pub struct Candidates {
    values: Vec<Tile>,
    weights: Option<WeightedIndex<u32>>,
}

impl Candidates {
    /// Uniform choice over `values`; an empty slice means `[2, 4, 8]`.
    pub fn new(values: &[Tile]) -> Result<Self, CoreError> {
        if values.is_empty() {
            return Ok(Self::default());
        }
        if let Some(&zero) = values.iter().find(|&&v| v == EMPTY) {
            return Err(CoreError::InvalidCandidate(zero));
        }
        Ok(Self {
            values: values.to_vec(),
            weights: None,
        })
    }

    /// Weighted choice, e.g. `[(2, 9), (4, 1)]` for the classic 90/10 split.
    pub fn weighted(pairs: &[(Tile, u32)]) -> Result<Self, CoreError> {
        if pairs.is_empty() {
            return Ok(Self::default());
        }
        if let Some(&(zero, _)) = pairs.iter().find(|(v, _)| *v == EMPTY) {
            return Err(CoreError::InvalidCandidate(zero));
        }
        let weights = WeightedIndex::new(pairs.iter().map(|&(_, w)| w))
            .map_err(|e| CoreError::InvalidWeights(e.to_string()))?;
        Ok(Self {
            values: pairs.iter().map(|&(v, _)| v).collect(),
            weights: Some(weights),
        })
    }

    pub fn values(&self) -> &[Tile] {
        &self.values
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.values.contains(&value)
    }

    /// Draw one value.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let idx = match &self.weights {
            Some(weights) => weights.sample(rng),
            None => rng.gen_range(0..self.values.len()),
        };
        self.values[idx]
    }
}

impl Default for Candidates {
    fn default() -> Self {
        Self {
            values: DEFAULT_CANDIDATES.to_vec(),
            weights: None,
        }
    }
}

/// Place one candidate value into a uniformly chosen empty cell.
///
/// Fails with [`CoreError::GridFull`] before touching the grid when no cell
/// is empty. Returns the `(row, col)` that was filled.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tui_2048_core::{spawn_tile, Candidates, Grid};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut grid = Grid::from_rows(vec![vec![2, 4], vec![8, 0]]).unwrap();
/// let pos = spawn_tile(&mut grid, &Candidates::default(), &mut rng).unwrap();
/// assert_eq!(pos, (1, 1));
/// assert!(grid.is_full());
/// ```
pub fn spawn_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    candidates: &Candidates,
    rng: &mut R,
) -> Result<(usize, usize), CoreError> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return Err(CoreError::GridFull);
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = candidates.pick(rng);
    grid.set(row, col, value);
    Ok((row, col))
}

/// [`spawn_tile`] with a plain list of values (empty means `[2, 4, 8]`).
pub fn spawn_tile_from<R: Rng + ?Sized>(
    grid: &mut Grid,
    values: &[Tile],
    rng: &mut R,
) -> Result<(usize, usize), CoreError> {
    let candidates = Candidates::new(values)?;
    spawn_tile(grid, &candidates, rng)
}
