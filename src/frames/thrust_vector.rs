use crate::physics::MixingPolicy;

/// Rocket-style airframe: a coaxial pair of counter-rotating main rotors with four
/// lateral vectoring thrusters mounted on the tail, one arm length below the
/// centre of mass.
///
/// | motor | role                         |
/// |-------|------------------------------|
/// | 0     | upper main rotor, clockwise  |
/// | 1     | lower main rotor, ccw        |
/// | 2     | tail thruster pushing +y     |
/// | 3     | tail thruster pushing -y     |
/// | 4     | tail thruster pushing -x     |
/// | 5     | tail thruster pushing +x     |
///
/// Pushing the tail one way tilts the thrust line the other way, so thruster 3
/// gives positive roll and thruster 4 positive pitch. As on every airframe,
/// collective thrust is the scaled sum of all six rates. Yaw comes from the speed
/// difference of the coaxial pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrustVector;

impl MixingPolicy for ThrustVector {
    fn motor_count(&self) -> usize {
        6
    }

    fn roll_mixing(&self, o: &[f64]) -> f64 {
        o[3] - o[2]
    }

    fn pitch_mixing(&self, o: &[f64]) -> f64 {
        o[4] - o[5]
    }

    fn yaw_mixing(&self, o: &[f64]) -> f64 {
        o[0] - o[1]
    }

    fn net_rotor_speed(&self, o: &[f64]) -> f64 {
        o[0] - o[1]
    }
}
