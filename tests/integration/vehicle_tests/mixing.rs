use approx::assert_relative_eq;
use multicopter::{Airframe, GRAVITY};
use std::f64::consts::PI;

use crate::common::{grounded_engine, ALL_AIRFRAMES};

#[test]
fn test_uniform_commands_are_yaw_neutral() {
    for airframe in ALL_AIRFRAMES {
        let mut engine = grounded_engine(airframe);
        for command in [0.0, 0.1, 0.37, 0.5, 0.99, 1.0] {
            engine.set_motors(&vec![command; engine.motor_count()]).unwrap();
            let controls = engine.controls();
            assert!(controls.yaw.abs() < 1e-9, "{} at {}", airframe, command);
            assert!(controls.omega.abs() < 1e-9, "{} at {}", airframe, command);
            assert!(controls.roll.abs() < 1e-9, "{} at {}", airframe, command);
            assert!(controls.pitch.abs() < 1e-9, "{} at {}", airframe, command);
        }
    }
}

#[test]
fn test_full_command_rate_is_independent_of_other_motors() {
    let full_rate = 15000.0 * PI / 30.0;

    for airframe in ALL_AIRFRAMES {
        let mut engine = grounded_engine(airframe);
        let n = engine.motor_count();

        for motor in 0..n {
            let mut commands: Vec<f64> = (0..n).map(|i| i as f64 / n as f64).collect();
            commands[motor] = 1.0;
            engine.set_motors(&commands).unwrap();

            let squared = engine.motor_rates()[motor];
            assert_relative_eq!(squared.sqrt(), full_rate, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_collective_thrust_is_linear_in_command() {
    let mut engine = grounded_engine(Airframe::QuadPlus);

    engine.set_motors(&[0.25; 4]).unwrap();
    let quarter = engine.controls().thrust;
    engine.set_motors(&[0.5; 4]).unwrap();
    let half = engine.controls().thrust;

    assert_relative_eq!(half, 2.0 * quarter, max_relative = 1e-12);
}

#[test]
fn test_collective_thrust_is_sum_of_all_rates() {
    let full_rate = 15000.0 * PI / 30.0;

    for airframe in ALL_AIRFRAMES {
        let mut engine = grounded_engine(airframe);
        let n = engine.motor_count();
        let mut commands = vec![0.0; n];
        commands[n - 1] = 1.0;
        commands[n - 2] = 1.0;
        engine.set_motors(&commands).unwrap();

        let b = engine.params().thrust_coefficient();
        let m = engine.params().mass();
        assert_relative_eq!(
            engine.controls().thrust,
            b * 2.0 * full_rate,
            max_relative = 1e-12
        );

        let dx = engine.derivative();
        assert_relative_eq!(
            dx[multicopter::StateIndex::Dz],
            -GRAVITY + b * 2.0 * full_rate / m,
            max_relative = 1e-12
        );
    }
}
