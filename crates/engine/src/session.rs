//! Session: a [`GameState`] wired to an optional snapshot store.
//!
//! The session owns the save policy: the grid is written after every move
//! that changed it and after every reset, never after a rejected move.

use log::{info, warn};

use crate::core::{CoreError, GameConfig, GameState, Grid, MoveOutcome};
use crate::store::SnapshotStore;
use crate::types::GameAction;

pub struct Session {
    state: GameState,
    store: Option<Box<dyn SnapshotStore>>,
}

impl Session {
    /// A session that never persists.
    pub fn new(state: GameState) -> Self {
        Self { state, store: None }
    }

    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Resume the saved grid if the store has a readable one, otherwise start fresh.
    ///
    /// An unreadable snapshot is logged and ignored rather than blocking play.
    pub fn open(
        config: GameConfig,
        seed: u32,
        store: Option<Box<dyn SnapshotStore>>,
    ) -> Result<Self, CoreError> {
        let saved = match store.as_deref().map(|s| s.load()) {
            Some(Ok(Some(grid))) => Some(grid),
            Some(Ok(None)) | None => None,
            Some(Err(err)) => {
                warn!("ignoring saved grid: {}", err);
                None
            }
        };

        let state = match saved {
            Some(grid) => {
                info!("resuming saved {}x{} grid", grid.rows(), grid.cols());
                GameState::from_grid(grid, config, seed)
            }
            None => GameState::new(config, seed)?,
        };

        Ok(Self { state, store })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Apply an action and persist the grid if it changed.
    pub fn apply(&mut self, action: GameAction) -> Result<MoveOutcome, CoreError> {
        let outcome = self.state.apply_action(action)?;
        if outcome.changed {
            self.persist();
        }
        if outcome.game_over {
            info!(
                "game over after {} moves, best tile {}",
                self.state.moves(),
                self.state.best_tile()
            );
        }
        Ok(outcome)
    }

    /// Replace the grid with one supplied from outside and persist it.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.state.replace_grid(grid);
        self.persist();
    }

    /// Drop the saved snapshot; the current game keeps going.
    pub fn clear_save(&mut self) {
        if let Some(store) = self.store.as_mut() {
            match store.clear() {
                Ok(()) => info!("saved grid cleared"),
                Err(err) => warn!("failed to clear saved grid: {}", err),
            }
        }
    }

    fn persist(&mut self) {
        if let Some(store) = self.store.as_mut() {
            if let Err(err) = store.save(self.state.grid()) {
                warn!("failed to save grid: {}", err);
            }
        }
    }
}
