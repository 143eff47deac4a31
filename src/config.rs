use crate::cell::Cell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Largest board a config may ask for.
pub const MAX_CELLS_PER_AXIS: usize = 64;

/// Board and pointer-surface settings. Missing JSON fields fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cells_per_axis: usize,
    pub surface_width: f64,
    pub surface_height: f64,
    pub initial_color: Cell,
    pub palette: Vec<Cell>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cells_per_axis: 3,
            surface_width: 300.0,
            surface_height: 300.0,
            initial_color: Cell::Blue,
            palette: Cell::PALETTE.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "loaded config from {}: {}x{} board",
            path.display(),
            config.cells_per_axis,
            config.cells_per_axis
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells_per_axis == 0 {
            return Err(ConfigError::Invalid("cells_per_axis must be at least 1".to_string()));
        }
        if self.cells_per_axis > MAX_CELLS_PER_AXIS {
            return Err(ConfigError::Invalid(format!(
                "cells_per_axis must be at most {}, got {}",
                MAX_CELLS_PER_AXIS, self.cells_per_axis
            )));
        }
        if !(self.surface_width > 0.0 && self.surface_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "surface must have a positive size, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette is empty".to_string()));
        }
        if self.palette.contains(&Cell::Empty) {
            return Err(ConfigError::Invalid("palette cannot contain empty".to_string()));
        }
        if !self.palette.contains(&self.initial_color) {
            return Err(ConfigError::Invalid(format!(
                "initial color {} is not in the palette",
                self.initial_color
            )));
        }
        Ok(())
    }
}
