//! Per-joint kinematic limits.

use crate::config::JointConfig;

/// Static kinematic limits of one joint.
///
/// Positions are in the joint's native units (radians for revolute joints,
/// meters for prismatic ones). Velocity and acceleration bounds are
/// magnitudes and apply in both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointLimits {
    /// Maximum velocity magnitude (> 0).
    pub max_velocity: f64,
    /// Maximum acceleration magnitude (> 0).
    pub max_acceleration: f64,
    /// Lower position bound.
    pub min_position: f64,
    /// Upper position bound.
    pub max_position: f64,
}

impl JointLimits {
    /// Create limits with an unbounded position range.
    pub fn new(max_velocity: f64, max_acceleration: f64) -> Self {
        Self {
            max_velocity,
            max_acceleration,
            min_position: f64::NEG_INFINITY,
            max_position: f64::INFINITY,
        }
    }

    /// Restrict the position range.
    pub fn with_position_range(mut self, min_position: f64, max_position: f64) -> Self {
        self.min_position = min_position;
        self.max_position = max_position;
        self
    }

    /// Create limits from a parsed joint configuration.
    pub fn from_config(config: &JointConfig) -> Self {
        Self {
            max_velocity: config.max_velocity,
            max_acceleration: config.max_acceleration,
            min_position: config.min_position,
            max_position: config.max_position,
        }
    }

    /// Check if a position is within the allowed range.
    #[inline]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.min_position && position <= self.max_position
    }

    /// Clamp a target position into the allowed range.
    #[inline]
    pub fn clamp_position(&self, target: f64) -> f64 {
        if target < self.min_position {
            self.min_position
        } else if target > self.max_position {
            self.max_position
        } else {
            target
        }
    }
}
