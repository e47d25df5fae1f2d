use multicopter::{Airframe, FlightPhase, StateIndex};
use nalgebra::Vector3;

use crate::common::{airborne_engine, assert_state_vector_eq, ALL_AIRFRAMES};

#[test]
fn test_init_discards_all_motion() {
    for airframe in ALL_AIRFRAMES {
        let mut engine = airborne_engine(airframe);
        let n = engine.motor_count();
        let commands: Vec<f64> = (0..n).map(|i| 0.2 + 0.01 * i as f64).collect();
        engine.set_motors(&commands).unwrap();

        for _ in 0..50 {
            engine.update(0.01).unwrap();
        }
        assert!(engine.state_vector().as_slice().iter().any(|v| *v != 0.0));

        engine.init(
            Vector3::new(1.5, -2.0, 3.0),
            Vector3::new(0.1, -0.2, 0.3),
            false,
        );

        assert_state_vector_eq(
            engine.state_vector(),
            &[
                (StateIndex::X, 1.5),
                (StateIndex::Y, -2.0),
                (StateIndex::Z, 3.0),
                (StateIndex::Phi, 0.1),
                (StateIndex::Theta, -0.2),
                (StateIndex::Psi, 0.3),
            ],
        );
        assert_eq!(engine.phase(), FlightPhase::Grounded);
    }
}

#[test]
fn test_repeated_init_is_idempotent() {
    let mut engine = airborne_engine(Airframe::QuadPlus);
    engine.set_motors(&[0.3, 0.5, 0.7, 0.9]).unwrap();
    engine.update(0.05).unwrap();

    engine.init(Vector3::zeros(), Vector3::zeros(), true);
    let first = *engine.state_vector();
    engine.init(Vector3::zeros(), Vector3::zeros(), true);

    assert_eq!(*engine.state_vector(), first);
    assert_state_vector_eq(engine.state_vector(), &[]);
}
