use approx::assert_relative_eq;
use multicopter::{StateIndex, StateVector, VehicleState};
use nalgebra::Vector3;

/// Assert that every component of a vehicle state is finite
#[track_caller]
pub fn assert_state_finite(state: &VehicleState) {
    assert!(
        state.position.iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert!(
        state.euler_angles.iter().all(|v| v.is_finite()),
        "Euler angles are not finite: {:?}",
        state.euler_angles
    );
    assert!(
        state.angular_velocity.iter().all(|v| v.is_finite()),
        "Angular velocity is not finite: {:?}",
        state.angular_velocity
    );
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert every slot of a state vector against an expected value
#[track_caller]
pub fn assert_state_vector_eq(actual: &StateVector, expected: &[(StateIndex, f64)]) {
    for slot in StateIndex::ALL {
        let want = expected
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, v)| *v)
            .unwrap_or(0.0);
        assert_eq!(actual[slot], want, "Slot {:?}", slot);
    }
}
