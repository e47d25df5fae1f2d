use crate::components::StateIndex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Motor count mismatch: expected {expected} commands, got {actual}")]
    MotorCountMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Non-finite control input: {0}")]
    NonFiniteControl(&'static str),

    #[error("State slot {slot:?} became non-finite")]
    NonFinite { slot: StateIndex },

    #[error("Dynamics engine has not been initialized")]
    NotInitialized,
}
