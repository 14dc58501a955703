//! Grid snapshot persistence.
//!
//! The on-disk format is the grid's rows as a JSON array of arrays:
//!
//! ```text
//! [[2,0,0,0],[0,4,0,0],[0,0,0,0],[0,0,0,2]]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CoreError, Grid};
use crate::types::Tile;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed fine but the rows do not form a grid.
    #[error("snapshot is not a valid grid: {0}")]
    Grid(#[from] CoreError),
}

/// Serialized shape of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridSnapshot(pub Vec<Vec<Tile>>);

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        Self(grid.to_rows())
    }
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = CoreError;

    fn try_from(snapshot: GridSnapshot) -> Result<Self, Self::Error> {
        Grid::from_rows(snapshot.0)
    }
}

impl GridSnapshot {
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Somewhere a grid can be saved between runs.
pub trait SnapshotStore {
    /// The saved grid, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<Grid>, StoreError>;

    fn save(&mut self, grid: &Grid) -> Result<(), StoreError>;

    /// Forget the saved grid. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Stores the snapshot as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Grid>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = GridSnapshot::from_json(&text)?;
        Ok(Some(Grid::try_from(snapshot)?))
    }

    fn save(&mut self, grid: &Grid) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        // Write a sibling file, then rename it over the snapshot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, GridSnapshot::from(grid).to_json()?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Keeps the serialized snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw JSON, valid or not.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
        }
    }

    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Grid>, StoreError> {
        match &self.json {
            Some(json) => Ok(Some(Grid::try_from(GridSnapshot::from_json(json)?)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, grid: &Grid) -> Result<(), StoreError> {
        self.json = Some(GridSnapshot::from(grid).to_json()?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.json = None;
        Ok(())
    }
}
