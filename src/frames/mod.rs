//! Airframe mixing policies.
//!
//! Body axes are x forward, y left, z up. Positive roll tilts thrust toward +y, so a
//! positive roll moment lifts the -y (right) side. Positive pitch tilts thrust toward
//! +x, so a positive pitch moment lifts the tail. Spin sign is `+1` for clockwise rotors
//! seen from above and `-1` for counter-clockwise ones.

mod hex;
mod quad;
mod thrust_vector;

pub use hex::Hex;
pub use quad::{QuadPlus, QuadX};
pub use thrust_vector::ThrustVector;

use crate::physics::MixingPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Airframe topology, chosen once when a vehicle is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Airframe {
    QuadX,
    QuadPlus,
    Hex,
    ThrustVector,
}

impl Airframe {
    /// Mixing policy for this airframe.
    pub fn policy(&self) -> Box<dyn MixingPolicy> {
        match self {
            Airframe::QuadX => Box::new(QuadX),
            Airframe::QuadPlus => Box::new(QuadPlus),
            Airframe::Hex => Box::new(Hex),
            Airframe::ThrustVector => Box::new(ThrustVector),
        }
    }

    pub fn motor_count(&self) -> usize {
        self.policy().motor_count()
    }
}

impl fmt::Display for Airframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Airframe::QuadX => "quad_x",
            Airframe::QuadPlus => "quad_plus",
            Airframe::Hex => "hex",
            Airframe::ThrustVector => "thrust_vector",
        };
        f.write_str(name)
    }
}

/// Dot product of a coefficient row with per-motor values.
pub(crate) fn weighted_sum(coefficients: &[f64], values: &[f64]) -> f64 {
    coefficients
        .iter()
        .zip(values)
        .map(|(c, v)| c * v)
        .sum()
}
