//! Rigid-body flight dynamics for multirotor and thrust-vectored vehicles.
//!
//! Motor commands in `[0, 1]` are mixed into collective thrust and three body
//! moments by an airframe-specific policy, then a twelve-state model is advanced by
//! explicit Euler steps.
//!
//! ```no_run
//! use multicopter::{Airframe, DynamicsEngine, PhysicalParameters};
//! use nalgebra::Vector3;
//!
//! let mut engine = DynamicsEngine::new(PhysicalParameters::phantom(), Airframe::QuadX);
//! engine.init(Vector3::zeros(), Vector3::zeros(), false);
//! engine.set_motors(&[0.6; 4])?;
//! engine.update(0.01)?;
//! let state = engine.get_state()?;
//! # Ok::<(), multicopter::PhysicsError>(())
//! ```

pub mod adapter;
pub mod components;
pub mod config;
pub mod frames;
pub mod physics;
pub mod server;

pub use components::{ControlInputs, PhysicalParameters, StateIndex, StateVector, VehicleState};
pub use config::{ConfigError, SimulationConfig, VehicleConfig, VehicleSource};
pub use frames::Airframe;
pub use physics::{DynamicsEngine, FlightPhase, MixingPolicy, PhysicsError, GRAVITY};
