use crate::frames::Airframe;

/// Degrees a spinning propeller advances per displayed frame.
const SPIN_STEP_DEG: f64 = 200.0;

/// Display-only propeller state: spin angles and a smoothed throttle level.
///
/// Nothing here feeds back into the dynamics. The spin angle is kept in `[0, 360)`
/// so it never loses precision over long sessions.
#[derive(Debug, Clone)]
pub struct PropellerAnimator {
    /// +1 clockwise, -1 counter-clockwise, 0 for motors without a visible rotor
    directions: Vec<f64>,
    spin: f64,
    history: Vec<f64>,
    cursor: usize,
}

impl PropellerAnimator {
    /// `window` is the number of frames averaged by `smoothed_level`.
    pub fn new(directions: Vec<f64>, window: usize) -> Self {
        Self {
            directions,
            spin: 0.0,
            history: vec![0.0; window.max(1)],
            cursor: 0,
        }
    }

    /// Spin directions taken from the airframe's mixing convention.
    pub fn for_airframe(airframe: Airframe, window: usize) -> Self {
        let policy = airframe.policy();
        let n = policy.motor_count();
        let directions = (0..n)
            .map(|motor| {
                let mut unit = vec![0.0; n];
                unit[motor] = 1.0;
                let speed = policy.net_rotor_speed(&unit);
                if speed > 0.0 {
                    1.0
                } else if speed < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            })
            .collect();
        Self::new(directions, window)
    }

    /// Advances one displayed frame with the commands sent this tick.
    pub fn advance(&mut self, commands: &[f64]) {
        let sum: f64 = commands.iter().sum();

        if sum > 0.0 {
            self.spin = (self.spin + SPIN_STEP_DEG) % 360.0;
        }

        self.cursor = (self.cursor + 1) % self.history.len();
        self.history[self.cursor] = if commands.is_empty() {
            0.0
        } else {
            sum / commands.len() as f64
        };
    }

    /// Per-motor propeller angle in degrees, `[0, 360)`.
    pub fn prop_angles(&self) -> Vec<f64> {
        self.directions
            .iter()
            .map(|dir| (self.spin * dir).rem_euclid(360.0))
            .collect()
    }

    /// Mean motor command averaged over the window, for sound pitch and volume.
    pub fn smoothed_level(&self) -> f64 {
        self.history.iter().sum::<f64>() / self.history.len() as f64
    }

    pub fn directions(&self) -> &[f64] {
        &self.directions
    }
}
