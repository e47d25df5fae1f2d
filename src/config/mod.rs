mod loader;
mod simulation;

pub use loader::{ConfigError, RawVehicleConfig};
pub use simulation::SimulationConfig;

use crate::components::PhysicalParameters;
use crate::frames::Airframe;
use crate::physics::DynamicsEngine;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything needed to assemble one vehicle: airframe, physical constants and
/// the pose it starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Name of the vehicle. Left empty, the airframe name is used.
    #[serde(default)]
    pub name: String,
    /// Motor layout and mixing.
    pub airframe: Airframe,
    /// Physical constants.
    pub params: PhysicalParameters,
    /// Start in free flight rather than resting on a surface.
    #[serde(default)]
    pub airborne: bool,
    /// Initial world position [m].
    #[serde(default = "zeros")]
    pub position: Vector3<f64>,
    /// Initial roll, pitch, yaw [rad].
    #[serde(default = "zeros")]
    pub euler_angles: Vector3<f64>,
}

impl Default for VehicleConfig {
    /// A Phantom-class quad in "X" configuration, resting at the origin.
    fn default() -> Self {
        Self::from_programmed(Airframe::QuadX)
    }
}

impl VehicleConfig {
    /// Creates a vehicle configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - Either a built-in airframe (`Programmed`) or a YAML file (`File`).
    pub fn new(source: VehicleSource) -> Result<Self, ConfigError> {
        match source {
            VehicleSource::Programmed(airframe) => Ok(Self::from_programmed(airframe)),
            VehicleSource::File(path) => Self::from_file(path),
        }
    }

    /// Built-in airframe with Phantom-class constants.
    pub fn from_programmed(airframe: Airframe) -> Self {
        Self {
            name: airframe.to_string(),
            airframe,
            params: PhysicalParameters::phantom(),
            airborne: false,
            position: Vector3::zeros(),
            euler_angles: Vector3::zeros(),
        }
    }

    /// Reads a flat YAML vehicle description.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&file_contents)?;
        info!(
            "Loaded vehicle '{}' ({}) from {}",
            config.name,
            config.airframe,
            path.as_ref().display()
        );
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawVehicleConfig = serde_yaml::from_str(contents)?;
        Self::from_raw(raw)
    }

    /// `name`, or the airframe name when none was given.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.airframe.to_string()
        } else {
            self.name.clone()
        }
    }

    /// Assembles an engine for this vehicle and places it at the configured pose.
    pub fn build(&self) -> DynamicsEngine {
        let mut engine = DynamicsEngine::new(self.params, self.airframe);
        engine.init(self.position, self.euler_angles, self.airborne);
        engine
    }
}

fn zeros() -> Vector3<f64> {
    Vector3::zeros()
}

/// Source for a vehicle configuration.
#[derive(Debug, Clone)]
pub enum VehicleSource {
    Programmed(Airframe),
    File(PathBuf),
}
