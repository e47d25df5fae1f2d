use approx::assert_relative_eq;
use multicopter::{StateIndex, GRAVITY};

use crate::common::{assert_state_finite, grounded_engine, ALL_AIRFRAMES};

#[test]
fn test_zero_thrust_only_falls() {
    for airframe in ALL_AIRFRAMES {
        let mut engine = grounded_engine(airframe);
        engine.set_motors(&vec![0.0; engine.motor_count()]).unwrap();

        for _ in 0..250 {
            engine.update(0.004).unwrap();
        }

        let x = engine.state_vector();
        for slot in StateIndex::ALL {
            if matches!(slot, StateIndex::Z | StateIndex::Dz) {
                continue;
            }
            assert_eq!(x[slot], 0.0, "{} slot {:?}", airframe, slot);
        }
        assert_relative_eq!(x[StateIndex::Dz], -GRAVITY, epsilon = 1e-9);
        assert!(x[StateIndex::Z] < 0.0);
    }
}

#[test]
fn test_rest_state_stays_finite_over_long_run() {
    let mut engine = grounded_engine(multicopter::Airframe::Hex);
    engine.set_motors(&[0.0; 6]).unwrap();

    for _ in 0..10_000 {
        engine.update(0.01).unwrap();
    }

    let state = engine.get_state().unwrap();
    assert_state_finite(&state);
    assert_relative_eq!(state.velocity.z, -GRAVITY * 100.0, max_relative = 1e-9);
}
