use crate::physics::MixingPolicy;

/// Quadrotor in "X" configuration.
///
/// ```text
///   2cw    0ccw
///      \  /
///       ><        x forward
///      /  \
///   1ccw   3cw
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadX;

impl MixingPolicy for QuadX {
    fn motor_count(&self) -> usize {
        4
    }

    fn roll_mixing(&self, o: &[f64]) -> f64 {
        (o[0] + o[3]) - (o[1] + o[2])
    }

    fn pitch_mixing(&self, o: &[f64]) -> f64 {
        (o[1] + o[3]) - (o[0] + o[2])
    }

    fn yaw_mixing(&self, o: &[f64]) -> f64 {
        (o[2] + o[3]) - (o[0] + o[1])
    }

    fn net_rotor_speed(&self, o: &[f64]) -> f64 {
        (o[2] + o[3]) - (o[0] + o[1])
    }
}

/// Quadrotor in "+" configuration.
///
/// ```text
///         0cw
///          |
///   3ccw --+-- 1ccw   x forward
///          |
///         2cw
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadPlus;

impl MixingPolicy for QuadPlus {
    fn motor_count(&self) -> usize {
        4
    }

    fn roll_mixing(&self, o: &[f64]) -> f64 {
        o[1] - o[3]
    }

    fn pitch_mixing(&self, o: &[f64]) -> f64 {
        o[2] - o[0]
    }

    fn yaw_mixing(&self, o: &[f64]) -> f64 {
        (o[0] + o[2]) - (o[1] + o[3])
    }

    fn net_rotor_speed(&self, o: &[f64]) -> f64 {
        (o[0] + o[2]) - (o[1] + o[3])
    }
}
