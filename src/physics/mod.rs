pub mod dynamics;
pub mod error;
pub mod traits;

pub use dynamics::{DynamicsEngine, FlightPhase, GRAVITY};
pub use error::PhysicsError;
pub use traits::MixingPolicy;
