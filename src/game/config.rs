use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::state::Position;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of cells along each side of the square grid
    pub grid_size: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { grid_size: 20 }
    }
}

impl GameConfig {
    pub const MIN_GRID_SIZE: i32 = 2;
    pub const MAX_GRID_SIZE: i32 = 100;

    /// Create a new configuration with custom grid size
    pub fn new(grid_size: i32) -> Self {
        Self { grid_size }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_GRID_SIZE..=Self::MAX_GRID_SIZE).contains(&self.grid_size) {
            bail!(
                "grid size must be between {} and {}, got {}",
                Self::MIN_GRID_SIZE,
                Self::MAX_GRID_SIZE,
                self.grid_size
            );
        }

        Ok(())
    }

    /// Where the snake's single segment sits at the start of every run
    pub fn start_position(&self) -> Position {
        Position::new(self.grid_size / 2, self.grid_size / 2)
    }
}
