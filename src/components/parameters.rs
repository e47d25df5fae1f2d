use crate::physics::PhysicsError;
use serde::{Deserialize, Serialize};

/// Physical constants of one vehicle. Fixed for the lifetime of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParameterValues", into = "ParameterValues")]
pub struct PhysicalParameters {
    thrust_coefficient: f64,
    drag_coefficient: f64,
    mass: f64,
    arm_length: f64,
    ixx: f64,
    iyy: f64,
    izz: f64,
    rotor_inertia: f64,
    max_rpm: f64,
}

/// Unvalidated field layout used for (de)serialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterValues {
    /// Thrust coefficient b, F = b·ω²
    pub thrust_coefficient: f64,
    /// Torque coefficient d, T = d·ω²
    pub drag_coefficient: f64,
    /// Mass (kg)
    pub mass: f64,
    /// Arm length (m)
    pub arm_length: f64,
    /// Moments of inertia about the body axes (kg·m²)
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    /// Propeller inertia Jr (kg·m²)
    pub rotor_inertia: f64,
    /// Rotor speed at full command (rpm)
    pub max_rpm: f64,
}

impl PhysicalParameters {
    /// Creates a validated parameter set.
    ///
    /// Mass, the three principal moments of inertia and `max_rpm` must be finite and
    /// strictly positive. The thrust and torque coefficients, arm length and rotor
    /// inertia must be finite and non-negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        thrust_coefficient: f64,
        drag_coefficient: f64,
        mass: f64,
        arm_length: f64,
        ixx: f64,
        iyy: f64,
        izz: f64,
        rotor_inertia: f64,
        max_rpm: f64,
    ) -> Result<Self, PhysicsError> {
        let strictly_positive = [
            ("mass", mass),
            ("ixx", ixx),
            ("iyy", iyy),
            ("izz", izz),
            ("max_rpm", max_rpm),
        ];
        for (name, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("thrust_coefficient", thrust_coefficient),
            ("drag_coefficient", drag_coefficient),
            ("arm_length", arm_length),
            ("rotor_inertia", rotor_inertia),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(Self {
            thrust_coefficient,
            drag_coefficient,
            mass,
            arm_length,
            ixx,
            iyy,
            izz,
            rotor_inertia,
            max_rpm,
        })
    }

    /// DJI Phantom-class airframe with estimated coefficients.
    pub fn phantom() -> Self {
        Self {
            thrust_coefficient: 5.0e-06,
            drag_coefficient: 2.0e-06,
            mass: 1.380,
            arm_length: 0.350,
            ixx: 2.0,
            iyy: 2.0,
            izz: 3.0,
            rotor_inertia: 38.0e-04,
            max_rpm: 15000.0,
        }
    }

    pub fn thrust_coefficient(&self) -> f64 {
        self.thrust_coefficient
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn arm_length(&self) -> f64 {
        self.arm_length
    }

    pub fn ixx(&self) -> f64 {
        self.ixx
    }

    pub fn iyy(&self) -> f64 {
        self.iyy
    }

    pub fn izz(&self) -> f64 {
        self.izz
    }

    pub fn rotor_inertia(&self) -> f64 {
        self.rotor_inertia
    }

    pub fn max_rpm(&self) -> f64 {
        self.max_rpm
    }

    /// Rotor angular rate at full command (rad/s).
    pub fn max_rotor_rate(&self) -> f64 {
        self.max_rpm * std::f64::consts::PI / 30.0
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self::phantom()
    }
}

impl TryFrom<ParameterValues> for PhysicalParameters {
    type Error = PhysicsError;

    fn try_from(raw: ParameterValues) -> Result<Self, Self::Error> {
        Self::new(
            raw.thrust_coefficient,
            raw.drag_coefficient,
            raw.mass,
            raw.arm_length,
            raw.ixx,
            raw.iyy,
            raw.izz,
            raw.rotor_inertia,
            raw.max_rpm,
        )
    }
}

impl From<PhysicalParameters> for ParameterValues {
    fn from(params: PhysicalParameters) -> Self {
        Self {
            thrust_coefficient: params.thrust_coefficient,
            drag_coefficient: params.drag_coefficient,
            mass: params.mass,
            arm_length: params.arm_length,
            ixx: params.ixx,
            iyy: params.iyy,
            izz: params.izz,
            rotor_inertia: params.rotor_inertia,
            max_rpm: params.max_rpm,
        }
    }
}
