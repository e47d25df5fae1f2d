use multicopter::{Airframe, DynamicsEngine, PhysicalParameters, PhysicsError};
use nalgebra::Vector3;

use crate::common::grounded_engine;

#[test]
fn test_motor_count_mismatch_is_checked() {
    let mut engine = grounded_engine(Airframe::QuadX);
    engine.set_motors(&[0.4; 4]).unwrap();
    let before = *engine.controls();

    for wrong in [0, 3, 5, 6] {
        let err = engine.set_motors(&vec![0.9; wrong]).unwrap_err();
        assert_eq!(
            err,
            PhysicsError::MotorCountMismatch {
                expected: 4,
                actual: wrong
            }
        );
    }
    assert_eq!(*engine.controls(), before);
}

#[test]
fn test_infinite_dt_fails_tick_without_corrupting_state() {
    let mut engine = grounded_engine(Airframe::QuadPlus);
    engine.set_motors(&[0.0; 4]).unwrap();
    engine.update(0.01).unwrap();
    let before = *engine.state_vector();

    let err = engine.update(f64::INFINITY).unwrap_err();
    assert!(matches!(err, PhysicsError::NonFinite { .. }));
    assert_eq!(*engine.state_vector(), before);

    // The engine keeps working after a rejected tick
    engine.update(0.01).unwrap();
}

#[test]
fn test_non_positive_parameters_are_rejected() {
    let cases = [
        (0.0, 2.0, 2.0, 3.0, 15000.0),
        (1.0, 0.0, 2.0, 3.0, 15000.0),
        (1.0, 2.0, -1.0, 3.0, 15000.0),
        (1.0, 2.0, 2.0, 0.0, 15000.0),
        (1.0, 2.0, 2.0, 3.0, -15000.0),
    ];
    for (mass, ixx, iyy, izz, max_rpm) in cases {
        let result =
            PhysicalParameters::new(5e-6, 2e-6, mass, 0.35, ixx, iyy, izz, 38e-4, max_rpm);
        assert!(
            matches!(result, Err(PhysicsError::InvalidParameter(_))),
            "accepted mass={} I=({}, {}, {}) max_rpm={}",
            mass,
            ixx,
            iyy,
            izz,
            max_rpm
        );
    }
}

#[test]
fn test_update_before_init() {
    let mut engine = DynamicsEngine::new(PhysicalParameters::phantom(), Airframe::Hex);
    // Commands may be staged before the vehicle is placed
    engine.set_motors(&[0.5; 6]).unwrap();
    assert_eq!(engine.update(0.01), Err(PhysicsError::NotInitialized));

    engine.init(Vector3::zeros(), Vector3::zeros(), false);
    assert!(engine.update(0.01).is_ok());
}
