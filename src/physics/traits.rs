/// Frame-specific mapping from motor angular rates to the generalized control inputs.
///
/// Collective thrust is always the plain sum of motor rates, so only the moments and
/// the net rotor speed vary by airframe.
///
/// Implementations fix a motor ordering and document it. Roll and pitch coefficients
/// encode where each motor sits relative to the centre of mass; yaw and net rotor
/// speed share one spin-sign convention, clockwise `+1` and counter-clockwise `-1`.
pub trait MixingPolicy: Send + Sync + std::fmt::Debug {
    /// Number of motors this airframe expects per `set_motors` call.
    fn motor_count(&self) -> usize;

    /// Roll input from squared rates, before scaling by the thrust coefficient.
    fn roll_mixing(&self, squared: &[f64]) -> f64;

    /// Pitch input from squared rates, before scaling by the thrust coefficient.
    fn pitch_mixing(&self, squared: &[f64]) -> f64;

    /// Yaw input from squared rates, before scaling by the torque coefficient.
    fn yaw_mixing(&self, squared: &[f64]) -> f64;

    /// Signed sum of unsquared rates, used for gyroscopic coupling.
    fn net_rotor_speed(&self, rates: &[f64]) -> f64;
}
