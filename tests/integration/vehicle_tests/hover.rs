use approx::assert_relative_eq;
use multicopter::{Airframe, StateIndex, GRAVITY};

use crate::common::{airborne_engine, hover_params, ALL_AIRFRAMES};

#[test]
fn test_hover_command_balances_gravity() {
    for airframe in ALL_AIRFRAMES {
        let mut engine = airborne_engine(airframe);
        let c = engine.hover_command().expect("airframe can lift");
        assert!(c > 0.0 && c < 1.0, "{} hover command {}", airframe, c);

        engine.set_motors(&vec![c; engine.motor_count()]).unwrap();
        assert_relative_eq!(
            engine.controls().thrust / hover_params().mass(),
            GRAVITY,
            max_relative = 1e-12
        );

        let dx = engine.derivative();
        assert!(dx[StateIndex::Dz].abs() < 1e-9, "{}: {}", airframe, dx[StateIndex::Dz]);
    }
}

#[test]
fn test_hover_holds_altitude() {
    let mut engine = airborne_engine(Airframe::QuadX);
    let c = engine.hover_command().unwrap();
    engine.set_motors(&[c; 4]).unwrap();

    for _ in 0..500 {
        engine.update(0.01).unwrap();
    }

    let state = engine.get_state().unwrap();
    assert_relative_eq!(state.position.z, 10.0, epsilon = 1e-6);
    assert!(state.velocity.z.abs() < 1e-6);
    assert_eq!(state.euler_angles.norm(), 0.0);
}

#[test]
fn test_above_hover_climbs() {
    let mut engine = airborne_engine(Airframe::Hex);
    let c = engine.hover_command().unwrap() * 1.2;
    engine.set_motors(&[c; 6]).unwrap();

    for _ in 0..100 {
        engine.update(0.01).unwrap();
    }

    let state = engine.get_state().unwrap();
    assert!(state.velocity.z > 0.0);
    assert!(state.position.z > 10.0);
}
