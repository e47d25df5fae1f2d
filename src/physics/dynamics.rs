//! Multirotor equations of motion.
//!
//! Follows the model in Bouabdallah, Murrieri & Siegwart, "Design and Control of an
//! Indoor Micro Quadrotor" (ICRA 2004): motor rates map to four control inputs
//! (Eqn. 6) which drive the twelve-state rigid-body model (Eqn. 12).

use crate::components::{
    ControlInputs, PhysicalParameters, StateIndex, StateVector, VehicleState,
};
use crate::frames::Airframe;
use crate::physics::error::PhysicsError;
use crate::physics::traits::MixingPolicy;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Standard gravity [m/s²]
pub const GRAVITY: f64 = 9.80665;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    Uninitialized,
    Grounded,
    Airborne,
}

/// Integrates the twelve-state rigid-body model of one vehicle.
///
/// A tick is `set_motors`, then `update`, then `get_state`. The engine holds no
/// internal synchronization; callers on several threads must serialize access.
#[derive(Debug)]
pub struct DynamicsEngine {
    params: PhysicalParameters,
    policy: Box<dyn MixingPolicy>,
    /// Per-motor rates, squared in place by `set_motors`
    rates: Vec<f64>,
    /// Working copy of `rates`, swapped in once the new controls are accepted
    pending: Vec<f64>,
    state: StateVector,
    controls: ControlInputs,
    phase: FlightPhase,
}

impl DynamicsEngine {
    /// Creates an engine for one of the built-in airframes.
    pub fn new(params: PhysicalParameters, airframe: Airframe) -> Self {
        debug!("Building {} dynamics", airframe);
        Self::with_policy(params, airframe.policy())
    }

    /// Creates an engine around an arbitrary mixing policy.
    pub fn with_policy(params: PhysicalParameters, policy: Box<dyn MixingPolicy>) -> Self {
        let motor_count = policy.motor_count();
        Self {
            params,
            policy,
            rates: vec![0.0; motor_count],
            pending: vec![0.0; motor_count],
            state: StateVector::zeros(),
            controls: ControlInputs::default(),
            phase: FlightPhase::Uninitialized,
        }
    }

    /// Resets the vehicle to a pose at rest.
    ///
    /// Every slot is zeroed before the pose is written, so no velocity or rate
    /// survives from earlier ticks.
    pub fn init(&mut self, position: Vector3<f64>, euler_angles: Vector3<f64>, airborne: bool) {
        self.state = StateVector::zeros();

        self.state[StateIndex::X] = position.x;
        self.state[StateIndex::Y] = position.y;
        self.state[StateIndex::Z] = position.z;
        self.state[StateIndex::Phi] = euler_angles.x;
        self.state[StateIndex::Theta] = euler_angles.y;
        self.state[StateIndex::Psi] = euler_angles.z;

        self.phase = if airborne {
            FlightPhase::Airborne
        } else {
            FlightPhase::Grounded
        };

        debug!(
            "Initialized at position {:?}, attitude {:?}, phase {:?}",
            position, euler_angles, self.phase
        );
    }

    /// Converts normalized motor commands into the control inputs for the next update.
    ///
    /// Commands are expected in `[0, 1]`; a command of 1 spins the rotor at
    /// `max_rpm`. Collective thrust is taken from the unsquared rates, the moments
    /// from the squared ones. On error both the controls and `motor_rates` keep
    /// their previous values.
    pub fn set_motors(&mut self, commands: &[f64]) -> Result<(), PhysicsError> {
        if commands.len() != self.rates.len() {
            warn!(
                "Rejected {} motor commands for a {}-motor airframe",
                commands.len(),
                self.rates.len()
            );
            return Err(PhysicsError::MotorCountMismatch {
                expected: self.rates.len(),
                actual: commands.len(),
            });
        }

        let b = self.params.thrust_coefficient();
        let d = self.params.drag_coefficient();
        let max_rpm = self.params.max_rpm();

        let mut thrust = 0.0;
        for (rate, command) in self.pending.iter_mut().zip(commands) {
            *rate = command * max_rpm * PI / 30.0;
            thrust += *rate;
        }

        let omega = self.policy.net_rotor_speed(&self.pending);

        for rate in self.pending.iter_mut() {
            *rate *= *rate;
        }

        let controls = ControlInputs {
            thrust: b * thrust,
            roll: b * self.policy.roll_mixing(&self.pending),
            pitch: b * self.policy.pitch_mixing(&self.pending),
            yaw: d * self.policy.yaw_mixing(&self.pending),
            omega,
        };

        if let Some(name) = controls.first_non_finite() {
            warn!("Motor commands {:?} produced non-finite {}", commands, name);
            return Err(PhysicsError::NonFiniteControl(name));
        }

        std::mem::swap(&mut self.rates, &mut self.pending);
        self.controls = controls;
        Ok(())
    }

    /// Advances the state by one explicit Euler step of `dt` seconds.
    ///
    /// If any slot would become non-finite the state is left as it was.
    pub fn update(&mut self, dt: f64) -> Result<(), PhysicsError> {
        if self.phase == FlightPhase::Uninitialized {
            return Err(PhysicsError::NotInitialized);
        }

        let derivative = self.derivative();

        let mut next = self.state;
        for slot in StateIndex::ALL {
            next[slot] += derivative[slot] * dt;
        }

        if let Some(slot) = next.first_non_finite() {
            warn!("Step of dt={} made {:?} non-finite, state kept", dt, slot);
            return Err(PhysicsError::NonFinite { slot });
        }

        self.state = next;
        Ok(())
    }

    /// Time derivative of the state under the current control inputs (Eqn. 12).
    pub fn derivative(&self) -> StateVector {
        use StateIndex::*;

        let x = &self.state;
        let p = &self.params;
        let u = &self.controls;

        let (ix, iy, iz) = (p.ixx(), p.iyy(), p.izz());
        let jr = p.rotor_inertia();
        let l = p.arm_length();
        let m = p.mass();

        let (sphi, cphi) = x[Phi].sin_cos();
        let (stheta, ctheta) = x[Theta].sin_cos();
        let (spsi, cpsi) = x[Psi].sin_cos();

        let roll_rate = x[DPhi];
        let pitch_rate = x[DTheta];
        let yaw_rate = x[DPsi];

        let mut dx = StateVector::zeros();

        dx[X] = x[Dx];
        dx[Dx] = (cphi * stheta * cpsi + sphi * spsi) * u.thrust / m;

        dx[Y] = x[Dy];
        dx[Dy] = (cphi * stheta * spsi + sphi * cpsi) * u.thrust / m;

        dx[Z] = x[Dz];
        dx[Dz] = -GRAVITY + (cphi * ctheta) * u.thrust / m;

        dx[Phi] = roll_rate;
        dx[DPhi] = yaw_rate * pitch_rate * (iy - iz) / ix - jr / ix * pitch_rate * u.omega
            + l / ix * u.roll;

        dx[Theta] = pitch_rate;
        dx[DTheta] = yaw_rate * roll_rate * (iz - ix) / iy
            + jr / iy * roll_rate * u.omega
            + l / iy * u.pitch;

        dx[Psi] = yaw_rate;
        dx[DPsi] = pitch_rate * roll_rate * (ix - iy) / iz + l / iz * u.yaw;

        dx
    }

    /// Reads back the pose and rates.
    pub fn get_state(&self) -> Result<VehicleState, PhysicsError> {
        if self.phase == FlightPhase::Uninitialized {
            return Err(PhysicsError::NotInitialized);
        }
        Ok(VehicleState::from(&self.state))
    }

    /// Uniform command that balances gravity when level, if the airframe can lift at all.
    pub fn hover_command(&self) -> Option<f64> {
        let lift_per_command = self.params.thrust_coefficient()
            * self.params.max_rotor_rate()
            * self.rates.len() as f64;

        if lift_per_command > 0.0 {
            Some(self.params.mass() * GRAVITY / lift_per_command)
        } else {
            None
        }
    }

    pub fn motor_count(&self) -> usize {
        self.rates.len()
    }

    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    pub fn controls(&self) -> &ControlInputs {
        &self.controls
    }

    /// Squared rates from the most recent `set_motors` call.
    pub fn motor_rates(&self) -> &[f64] {
        &self.rates
    }

    pub fn state_vector(&self) -> &StateVector {
        &self.state
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_airborne(&self) -> bool {
        self.phase == FlightPhase::Airborne
    }
}
