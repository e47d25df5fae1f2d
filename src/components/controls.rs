use serde::{Deserialize, Serialize};

/// Generalized control inputs computed from the latest motor commands.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Collective thrust U1
    pub thrust: f64,
    /// Roll moment U2
    pub roll: f64,
    /// Pitch moment U3
    pub pitch: f64,
    /// Yaw moment U4
    pub yaw: f64,
    /// Net rotor speed Ω for gyroscopic coupling [rad/s]
    pub omega: f64,
}

impl ControlInputs {
    /// Name of the first non-finite input, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("thrust", self.thrust),
            ("roll", self.roll),
            ("pitch", self.pitch),
            ("yaw", self.yaw),
            ("omega", self.omega),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}
