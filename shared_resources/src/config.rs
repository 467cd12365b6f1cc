use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::Floor;

/// Maximum number of elevators a single system can manage.
pub const ELEVATORS_LIMIT: usize = 16;

pub const DEFAULT_CONFIG_PATH: &str = "simulation.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{elevators} elevators requested but the limit is {limit}")]
    TooManyElevators { elevators: u8, limit: usize },

    #[error("a building needs at least one floor, got {0}")]
    NoFloors(Floor),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    pub elevators: u8,
    pub floors: Floor,
    pub start_floor: Floor,
    pub elevator_limit: usize,
    pub tick_ms: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            elevators: 5,
            floors: 20,
            start_floor: 0,
            elevator_limit: ELEVATORS_LIMIT,
            tick_ms: None,
        }
    }
}

impl SimulationConfig {
    /// Reads the configuration at `path`. A missing file is not an error:
    /// the defaults are used instead.
    pub fn get(path: &Path) -> Result<Self, ConfigError> {
        let config_contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No configuration file provided at {}, using default settings...", path.display());
                return Ok(SimulationConfig::default());
            },
            Err(e) => return Err(ConfigError::Read { path: path.to_path_buf(), source: e }),
        };
        Self::parse(path, &config_contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elevators as usize > self.elevator_limit {
            return Err(ConfigError::TooManyElevators {
                elevators: self.elevators,
                limit: self.elevator_limit,
            });
        }
        if self.floors < 1 {
            return Err(ConfigError::NoFloors(self.floors));
        }
        Ok(())
    }
}
