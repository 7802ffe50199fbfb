//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::joint::MAX_JOINTS;

use super::{JointConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Tick rate is positive
/// - Every joint has positive velocity and acceleration limits
/// - Position bounds are ordered (min < max)
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if !(config.control.tick_rate_hz > 0.0) {
        return Err(Error::Config(ConfigError::InvalidTickRate(
            config.control.tick_rate_hz,
        )));
    }

    if config.joints.len() > MAX_JOINTS {
        return Err(Error::Config(ConfigError::TooManyJoints(config.joints.len())));
    }

    for (name, joint) in config.joints.iter() {
        validate_joint(name.as_str(), joint)?;
    }

    Ok(())
}

fn validate_joint(name: &str, config: &JointConfig) -> Result<()> {
    let joint = || heapless::String::try_from(name).unwrap_or_default();

    // NaN fails these comparisons too
    if !(config.max_velocity > 0.0) {
        return Err(Error::Config(ConfigError::InvalidMaxVelocity {
            joint: joint(),
            value: config.max_velocity,
        }));
    }

    if !(config.max_acceleration > 0.0) {
        return Err(Error::Config(ConfigError::InvalidMaxAcceleration {
            joint: joint(),
            value: config.max_acceleration,
        }));
    }

    if !(config.min_position < config.max_position) {
        return Err(Error::Config(ConfigError::InvalidPositionRange {
            joint: joint(),
            min: config.min_position,
            max: config.max_position,
        }));
    }

    Ok(())
}
