use super::weighted_sum;
use crate::physics::MixingPolicy;

// Motors at 60° spacing, counter-clockwise from the nose seen from above.
// Roll row is -sin(azimuth), pitch row is -cos(azimuth).
const S60: f64 = 0.866_025_403_784_438_6;
const ROLL: [f64; 6] = [0.0, -S60, -S60, 0.0, S60, S60];
const PITCH: [f64; 6] = [-1.0, -0.5, 0.5, 1.0, 0.5, -0.5];
const SPIN: [f64; 6] = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];

/// Hexarotor in "+" configuration, motor 0 at the nose, alternating spin
/// starting clockwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

impl MixingPolicy for Hex {
    fn motor_count(&self) -> usize {
        6
    }

    fn roll_mixing(&self, squared: &[f64]) -> f64 {
        weighted_sum(&ROLL, squared)
    }

    fn pitch_mixing(&self, squared: &[f64]) -> f64 {
        weighted_sum(&PITCH, squared)
    }

    fn yaw_mixing(&self, squared: &[f64]) -> f64 {
        weighted_sum(&SPIN, squared)
    }

    fn net_rotor_speed(&self, rates: &[f64]) -> f64 {
        weighted_sum(&SPIN, rates)
    }
}
