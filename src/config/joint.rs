//! Joint and control-loop configuration from TOML.

use serde::Deserialize;

/// Kinematic limits of one joint from TOML.
///
/// Positions and velocities are in the joint's native units (radians or
/// meters); the generator never converts units.
#[derive(Debug, Clone, Deserialize)]
pub struct JointConfig {
    /// Maximum velocity magnitude (must be > 0).
    pub max_velocity: f64,

    /// Maximum acceleration magnitude (must be > 0).
    pub max_acceleration: f64,

    /// Lower position bound. Unbounded when omitted.
    #[serde(default = "default_min_position")]
    pub min_position: f64,

    /// Upper position bound. Unbounded when omitted.
    #[serde(default = "default_max_position")]
    pub max_position: f64,
}

fn default_min_position() -> f64 {
    f64::NEG_INFINITY
}

fn default_max_position() -> f64 {
    f64::INFINITY
}

/// Control-loop configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlConfig {
    /// Reference update rate in Hz.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: f64,
}

fn default_tick_rate() -> f64 {
    100.0
}

impl ControlConfig {
    /// Tick period in seconds, the `dt` to feed the generator each cycle.
    pub fn tick_period(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: default_tick_rate(),
        }
    }
}
