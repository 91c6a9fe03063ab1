//! Baseline altitude controller
//!
//! Hover feed-forward plus proportional-derivative feedback on the altitude
//! error. Useful as a reference creature and as a sanity check for the
//! evaluation harness.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AltitudeGains {
    /// Command that balances gravity, `m * g / (4 * max_motor_thrust)`
    pub hover: f64,
    pub kp: f64,
    pub kd: f64,
}

/// Hover command of the default quadrotor: 1 kg, 9.81 m/s², four 5 N motors.
pub const DEFAULT_HOVER: f64 = 9.81 / (4.0 * 5.0);

impl Default for AltitudeGains {
    fn default() -> Self {
        Self { hover: DEFAULT_HOVER, kp: 0.35, kd: 0.25 }
    }
}

/// PD controller mapping `[setpoint, altitude]` to one motor command in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct AltitudeController {
    pub gains: AltitudeGains,
    dt: f64,
    prev_error: Option<f64>,
}

impl AltitudeController {
    /// `dt` is the interval between consecutive calls, used for the derivative term.
    #[must_use]
    pub fn new(gains: AltitudeGains, dt: f64) -> Self {
        Self { gains, dt, prev_error: None }
    }

    /// Forget the previous error so the next call starts a fresh trajectory.
    pub fn reset(&mut self) {
        self.prev_error = None;
    }

    pub fn command(&mut self, setpoint: f64, altitude: f64) -> f64 {
        let error = setpoint - altitude;
        let derivative = self.prev_error.map_or(0.0, |prev| (error - prev) / self.dt);
        self.prev_error = Some(error);
        let g = &self.gains;
        (g.hover + g.kp * error + g.kd * derivative).clamp(0.0, 1.0)
    }
}
