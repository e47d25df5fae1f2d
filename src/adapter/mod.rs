//! Glue between the dynamics engine and whatever drives or displays it.
//!
//! A `MotorSource` stands in for the flight controller: once per tick it is shown the
//! latest state and fills in the motor commands. `Simulation` runs the fixed-step
//! tick loop around one engine.

mod props;

pub use props::PropellerAnimator;

use crate::components::VehicleState;
use crate::config::SimulationConfig;
use crate::physics::{DynamicsEngine, PhysicsError};
use nalgebra::Vector3;
use tracing::{debug, error};

/// Producer of motor commands, one call per tick.
pub trait MotorSource {
    /// Writes one command in `[0, 1]` per motor into `commands`.
    fn motor_values(&mut self, time: f64, state: &VehicleState, commands: &mut [f64]);
}

/// Same command on every motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantMotors(pub f64);

impl MotorSource for ConstantMotors {
    fn motor_values(&mut self, _time: f64, _state: &VehicleState, commands: &mut [f64]) {
        commands.fill(self.0);
    }
}

impl<F> MotorSource for F
where
    F: FnMut(f64, &VehicleState, &mut [f64]),
{
    fn motor_values(&mut self, time: f64, state: &VehicleState, commands: &mut [f64]) {
        self(time, state, commands)
    }
}

/// Fixed-step tick loop: commands, `set_motors`, `update`, `get_state`.
pub struct Simulation<S: MotorSource> {
    engine: DynamicsEngine,
    source: S,
    config: SimulationConfig,
    commands: Vec<f64>,
    time: f64,
}

impl<S: MotorSource> Simulation<S> {
    /// `engine` must already be initialized.
    pub fn new(engine: DynamicsEngine, source: S, config: SimulationConfig) -> Self {
        let commands = vec![0.0; engine.motor_count()];
        Self {
            engine,
            source,
            config,
            commands,
            time: 0.0,
        }
    }

    /// Runs one tick and returns the resulting state.
    pub fn step(&mut self) -> Result<VehicleState, PhysicsError> {
        let state = self.engine.get_state()?;
        self.source
            .motor_values(self.time, &state, &mut self.commands);

        self.engine.set_motors(&self.commands)?;
        self.engine.update(self.config.time_step).map_err(|e| {
            error!("Tick at t={:.3}s failed: {}", self.time, e);
            e
        })?;
        self.time += self.config.time_step;

        self.engine.get_state()
    }

    /// Runs `n` ticks, returning the state after each.
    pub fn run_steps(&mut self, n: usize) -> Result<Vec<VehicleState>, PhysicsError> {
        (0..n).map(|_| self.step()).collect()
    }

    /// Runs the number of ticks set in the configuration.
    pub fn run(&mut self) -> Result<Vec<VehicleState>, PhysicsError> {
        debug!(
            "Running {} steps of {}s",
            self.config.steps, self.config.time_step
        );
        self.run_steps(self.config.steps)
    }

    /// Puts the vehicle back at a pose and restarts the clock.
    pub fn reset(&mut self, position: Vector3<f64>, euler_angles: Vector3<f64>, airborne: bool) {
        self.engine.init(position, euler_angles, airborne);
        self.time = 0.0;
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Commands sent on the most recent tick.
    pub fn commands(&self) -> &[f64] {
        &self.commands
    }

    pub fn engine(&self) -> &DynamicsEngine {
        &self.engine
    }

    pub fn into_engine(self) -> DynamicsEngine {
        self.engine
    }
}
