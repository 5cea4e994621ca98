//! On-disk configuration for the lamp binary.

use serde::{Deserialize, Serialize};
use sim::{SpawnRegion, SphParams};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::input::TiltMapping;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// LED matrix geometry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// World-space size of one LED cell.
    pub cell_size: f32,
    /// Distinct brightness values per cell; must be at least 2.
    pub levels: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 16,
            cell_size: 0.1,
            levels: 3,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LampConfig {
    pub particle_count: usize,
    pub spawn: SpawnRegion,
    pub sim: SphParams,
    pub grid: GridConfig,
    pub tilt: TiltMapping,
    /// Per-tick sleep; zero runs the loop uncapped.
    pub tick_delay_ms: u64,
}

impl Default for LampConfig {
    fn default() -> Self {
        let sim = SphParams::default();
        Self {
            particle_count: 250,
            spawn: sim.domain(),
            sim,
            grid: GridConfig::default(),
            tilt: TiltMapping::default(),
            tick_delay_ms: 16,
        }
    }
}

impl LampConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_whole_domain() {
        let config = LampConfig::default();
        assert_eq!(config.particle_count, 250);
        assert_eq!(config.spawn.x_min, -config.sim.half_width);
        assert_eq!(config.spawn.y_max, config.sim.ceiling);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: LampConfig =
            serde_json::from_str(r#"{"particle_count": 40, "grid": {"levels": 2}}"#).unwrap();
        assert_eq!(config.particle_count, 40);
        assert_eq!(config.grid.levels, 2);
        assert_eq!(config.grid.rows, 9, "unset fields keep their defaults");
        assert_eq!(config.tick_delay_ms, 16);
    }
}
