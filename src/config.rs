//! Limits applied in front of the engine, stored as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    grid::Grid,
};

/// Engine limits (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LifeConfig {
    /// Widest board accepted.
    pub max_width: usize,

    /// Tallest board accepted.
    pub max_height: usize,

    /// Most generations a single advance may ask for.
    pub max_generations: usize,

    /// Transitions tried before a board is reported as not stabilizing.
    pub max_generations_to_final_state: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            max_width: 1000,
            max_height: 1000,
            max_generations: 10_000,
            max_generations_to_final_state: 1000,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_width == 0 {
            return Err(anyhow!("max_width must be > 0"));
        }
        if self.max_height == 0 {
            return Err(anyhow!("max_height must be > 0"));
        }
        if self.max_generations == 0 {
            return Err(anyhow!("max_generations must be > 0"));
        }
        if self.max_generations_to_final_state == 0 {
            return Err(anyhow!("max_generations_to_final_state must be > 0"));
        }
        Ok(())
    }

    /// Rejects a board shape before any cells are allocated for it.
    pub fn check_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if width > self.max_width || height > self.max_height {
            return Err(Error::BoardTooLarge {
                width,
                height,
                max_width: self.max_width,
                max_height: self.max_height,
            });
        }
        Ok(())
    }

    pub fn check_board(&self, grid: &Grid) -> Result<()> {
        let (width, height) = grid.dimensions();
        self.check_dimensions(width, height)
    }

    pub fn check_generations(&self, requested: usize) -> Result<()> {
        if requested > self.max_generations {
            return Err(Error::TooManyGenerations {
                requested,
                max: self.max_generations,
            });
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LifeConfig::default()`.
pub fn load_config(path: &Path) -> anyhow::Result<LifeConfig> {
    if !path.exists() {
        return Ok(LifeConfig::default());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: LifeConfig =
        toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}
