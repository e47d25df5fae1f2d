//! Line-delimited JSON control protocol for driving one vehicle from an external
//! flight controller.
//!
//! Socket handling lives in the `multicopter_serve` binary; this module turns each
//! request line into a response so the protocol can be exercised without a socket.

mod structures;

pub use structures::{Command, Response};

use crate::config::VehicleConfig;
use crate::physics::DynamicsEngine;
use nalgebra::Vector3;
use tracing::{error, info, warn};

/// One vehicle and its clock, as seen by a connected client.
#[derive(Debug, Default)]
pub struct ServerState {
    vehicle: Option<(VehicleConfig, DynamicsEngine)>,
    time: f64,
    closed: bool,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Parses and handles one request line.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Command>(line) {
            Ok(cmd) => self.handle(cmd),
            Err(e) => {
                error!("Failed to parse command: {}", e);
                Response::Error {
                    error: format!("Invalid command format: {}", e),
                }
            }
        }
    }

    pub fn handle(&mut self, cmd: Command) -> Response {
        match cmd {
            Command::Initialize { mut config } => {
                if self.vehicle.is_some() {
                    warn!("Server already initialized, ignoring Initialize command");
                    return Response::Error {
                        error: "Server already initialized".to_string(),
                    };
                }

                config.name = config.display_name();
                info!("Initializing vehicle '{}' ({})", config.name, config.airframe);
                let engine = config.build();
                let response = Response::Ready {
                    name: config.name.clone(),
                    airframe: config.airframe,
                    motor_count: engine.motor_count(),
                };
                self.vehicle = Some((config, engine));
                self.time = 0.0;
                response
            }

            // A step whose update overflows still leaves the new commands applied;
            // the state itself is untouched and the next Step replaces the commands.
            Command::Step { motors, dt } => {
                let Some((_, engine)) = self.vehicle.as_mut() else {
                    return not_initialized();
                };

                if !dt.is_finite() {
                    warn!("Step rejected: dt={} is not finite", dt);
                    return Response::Error {
                        error: format!("Time step must be finite, got {}", dt),
                    };
                }

                let result = engine
                    .set_motors(&motors)
                    .and_then(|_| engine.update(dt));
                match result {
                    Ok(()) => {
                        self.time += dt;
                        self.state_response()
                    }
                    Err(e) => {
                        warn!("Step rejected: {}", e);
                        Response::Error {
                            error: e.to_string(),
                        }
                    }
                }
            }

            Command::Reset {
                position,
                euler_angles,
                airborne,
            } => {
                let Some((config, engine)) = self.vehicle.as_mut() else {
                    return not_initialized();
                };

                let position = position.map(Vector3::from).unwrap_or(config.position);
                let euler_angles = euler_angles
                    .map(Vector3::from)
                    .unwrap_or(config.euler_angles);
                let airborne = airborne.unwrap_or(config.airborne);

                info!("Resetting vehicle to {:?}", position);
                engine.init(position, euler_angles, airborne);
                self.time = 0.0;
                self.state_response()
            }

            Command::State => self.state_response(),

            Command::Close => {
                info!("Close command received");
                self.closed = true;
                Response::Closed
            }
        }
    }

    fn state_response(&self) -> Response {
        let Some((_, engine)) = self.vehicle.as_ref() else {
            return not_initialized();
        };

        match engine.get_state() {
            Ok(state) => Response::State {
                time: self.time,
                airborne: engine.is_airborne(),
                state,
            },
            Err(e) => Response::Error {
                error: e.to_string(),
            },
        }
    }
}

fn not_initialized() -> Response {
    Response::Error {
        error: "Server not initialized".to_string(),
    }
}
