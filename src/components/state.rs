use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of slots in the state vector.
pub const STATE_SIZE: usize = 12;

/// Named slots of the state vector, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum StateIndex {
    X = 0,
    Dx,
    Y,
    Dy,
    Z,
    Dz,
    Phi,
    DPhi,
    Theta,
    DTheta,
    Psi,
    DPsi,
}

impl StateIndex {
    pub const ALL: [StateIndex; STATE_SIZE] = [
        StateIndex::X,
        StateIndex::Dx,
        StateIndex::Y,
        StateIndex::Dy,
        StateIndex::Z,
        StateIndex::Dz,
        StateIndex::Phi,
        StateIndex::DPhi,
        StateIndex::Theta,
        StateIndex::DTheta,
        StateIndex::Psi,
        StateIndex::DPsi,
    ];
}

/// `[x, ẋ, y, ẏ, z, ż, φ, φ̇, θ, θ̇, ψ, ψ̇]`
///
/// Positions are world-frame with z up, angles are roll/pitch/yaw (rad).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StateVector([f64; STATE_SIZE]);

impl StateVector {
    pub fn zeros() -> Self {
        Self([0.0; STATE_SIZE])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// First slot holding a non-finite value, if any.
    pub fn first_non_finite(&self) -> Option<StateIndex> {
        StateIndex::ALL
            .iter()
            .copied()
            .find(|&slot| !self[slot].is_finite())
    }
}

impl Index<StateIndex> for StateVector {
    type Output = f64;

    fn index(&self, slot: StateIndex) -> &f64 {
        &self.0[slot as usize]
    }
}

impl IndexMut<StateIndex> for StateVector {
    fn index_mut(&mut self, slot: StateIndex) -> &mut f64 {
        &mut self.0[slot as usize]
    }
}

/// Physical pose and rates read back after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Body rates (φ̇, θ̇, ψ̇) [rad/s]
    pub angular_velocity: Vector3<f64>,
    /// Roll, pitch, yaw [rad]
    pub euler_angles: Vector3<f64>,
    /// World-frame velocity [m/s]
    pub velocity: Vector3<f64>,
    /// World-frame position [m]
    pub position: Vector3<f64>,
}

impl From<&StateVector> for VehicleState {
    fn from(x: &StateVector) -> Self {
        use StateIndex::*;
        Self {
            angular_velocity: Vector3::new(x[DPhi], x[DTheta], x[DPsi]),
            euler_angles: Vector3::new(x[Phi], x[Theta], x[Psi]),
            velocity: Vector3::new(x[Dx], x[Dy], x[Dz]),
            position: Vector3::new(x[X], x[Y], x[Z]),
        }
    }
}
