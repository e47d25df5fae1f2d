use serde::Deserialize;
use thiserror::Error;

use crate::components::PhysicalParameters;
use crate::config::VehicleConfig;
use crate::frames::Airframe;
use crate::physics::PhysicsError;
use nalgebra::Vector3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid vehicle configuration: {0}")]
    ValidationError(#[from] PhysicsError),
}

/// Flat on-disk layout of a vehicle file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawVehicleConfig {
    /// Vehicle identification
    pub name: String,
    pub airframe: Airframe,

    /// Rotor coefficients
    pub thrust_coefficient: f64,
    pub drag_coefficient: f64,
    pub rotor_inertia: f64,
    pub max_rpm: f64,

    /// Mass properties
    pub mass: f64,
    pub arm_length: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,

    /// Initial conditions
    #[serde(default)]
    pub airborne: bool,
    #[serde(default)]
    pub position: [f64; 3],
    #[serde(default)]
    pub euler_angles: [f64; 3],
}

impl VehicleConfig {
    pub fn from_raw(raw: RawVehicleConfig) -> Result<Self, ConfigError> {
        let params = PhysicalParameters::new(
            raw.thrust_coefficient,
            raw.drag_coefficient,
            raw.mass,
            raw.arm_length,
            raw.ixx,
            raw.iyy,
            raw.izz,
            raw.rotor_inertia,
            raw.max_rpm,
        )?;

        Ok(Self {
            name: raw.name,
            airframe: raw.airframe,
            params,
            airborne: raw.airborne,
            position: Vector3::from(raw.position),
            euler_angles: Vector3::from(raw.euler_angles),
        })
    }
}
