use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed-step run settings for a `Simulation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seconds advanced per tick.
    pub time_step: f64,
    /// Ticks run by `Simulation::run`.
    pub steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.01,
            steps: 100,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Simulated seconds covered by a full run.
    pub fn duration(&self) -> f64 {
        self.time_step * self.steps as f64
    }
}
