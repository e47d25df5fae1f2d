pub mod controls;
pub mod parameters;
pub mod state;

pub use controls::ControlInputs;
pub use parameters::{ParameterValues, PhysicalParameters};
pub use state::{StateIndex, StateVector, VehicleState, STATE_SIZE};
