//! Solved velocity-profile segment of one joint.

use super::sign;

/// Trapezoidal velocity profile of one joint across one waypoint.
///
/// The profile spans `[0, t_c]`: an acceleration ramp from `v0` until `t_a`,
/// a cruise phase at `vc` until `t_b`, and a deceleration ramp reaching `v1`
/// at `t_c`. Solved segments satisfy `0 <= t_a <= t_b <= t_c`; a triangular
/// profile has `t_a == t_b`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    /// Entry velocity.
    pub v0: f64,
    /// Exit velocity.
    pub v1: f64,
    /// Cruise velocity between the ramps.
    pub vc: f64,
    /// End of the entry ramp.
    pub t_a: f64,
    /// Start of the exit ramp.
    pub t_b: f64,
    /// Total duration.
    pub t_c: f64,
    /// Acceleration magnitude of both ramps.
    pub acceleration: f64,
}

impl Segment {
    /// Velocity of the profile at time `t`.
    ///
    /// Clamps to `v0` before the segment starts and to `v1` after `t_c`, so
    /// a tick that lands slightly past the end still reads the boundary
    /// velocity.
    pub fn velocity_at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return self.v0;
        }
        if t >= self.t_c {
            return self.v1;
        }

        if t <= self.t_a {
            // Entry ramp toward the cruise velocity
            self.v0 + sign(self.vc - self.v0) * self.acceleration * t
        } else if t < self.t_b {
            self.vc
        } else {
            // Exit ramp toward the boundary velocity
            self.vc + sign(self.v1 - self.vc) * self.acceleration * (t - self.t_b)
        }
    }
}
