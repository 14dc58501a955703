//! Error types for grid construction, spawning and session resets.
//!
//! Moving and merging never fail; everything here is raised by validation
//! that runs before a grid is touched.

use thiserror::Error;

use crate::types::Tile;

/// Broad category of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value the operation cannot accept.
    InvalidArgument,
    /// The operation was invoked in a state where it is not allowed.
    PreconditionViolation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A grid needs at least one row and one column.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("grid side {size} is below the minimum of {min}")]
    GridTooSmall { size: usize, min: usize },

    #[error("spawn count must be at least 1")]
    InvalidSpawnCount,

    /// Spawn candidates must be positive.
    #[error("invalid spawn candidate {0}")]
    InvalidCandidate(Tile),

    /// Candidate values and weights differ in length or sum to zero.
    #[error("invalid spawn weights: {0}")]
    InvalidWeights(String),

    /// Spawning needs at least one empty cell.
    #[error("no empty cell left to spawn a tile into")]
    GridFull,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::GridFull => ErrorKind::PreconditionViolation,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_grid_is_a_precondition_violation() {
        assert_eq!(CoreError::GridFull.kind(), ErrorKind::PreconditionViolation);
        assert_eq!(CoreError::EmptyGrid.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            CoreError::InvalidCandidate(0).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn messages_name_the_offending_row() {
        let err = CoreError::RaggedRow {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 cells, expected 4");
    }
}
