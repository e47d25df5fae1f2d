use crate::components::VehicleState;
use crate::config::VehicleConfig;
use crate::frames::Airframe;
use serde::{Deserialize, Serialize};

/// Enum representing commands sent to the server, one JSON object per line.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Build the vehicle and place it at its configured pose.
    Initialize { config: VehicleConfig },
    /// Apply motor commands and advance by `dt` seconds.
    Step { motors: Vec<f64>, dt: f64 },
    /// Return the vehicle to a pose; omitted fields fall back to the configuration.
    Reset {
        #[serde(default)]
        position: Option<[f64; 3]>,
        #[serde(default)]
        euler_angles: Option<[f64; 3]>,
        #[serde(default)]
        airborne: Option<bool>,
    },
    /// Report the current state without stepping.
    State,
    /// Close the server connection.
    Close,
}

/// Reply written back for every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ready {
        name: String,
        airframe: Airframe,
        motor_count: usize,
    },
    State {
        /// Simulated seconds since the last initialize or reset.
        time: f64,
        airborne: bool,
        state: VehicleState,
    },
    Error {
        error: String,
    },
    Closed,
}
