//! Unit tests for TOML configuration parsing.

use joint_motion::{ConfigError, Error};

/// Test parsing a valid joint configuration from TOML.
#[test]
fn test_parse_joint_config() {
    let toml_str = r#"
[control]
tick_rate_hz = 500.0

[joints.wrist_roll]
max_velocity = 3.0
max_acceleration = 6.0
min_position = -3.14
max_position = 3.14
"#;

    let config = joint_motion::parse_config(toml_str).expect("Failed to parse TOML");
    let joint = config.joint("wrist_roll").expect("Joint not found");

    assert_eq!(joint.max_velocity, 3.0);
    assert_eq!(joint.max_acceleration, 6.0);
    assert_eq!(joint.min_position, -3.14);
    assert_eq!(joint.max_position, 3.14);
    assert_eq!(config.control.tick_rate_hz, 500.0);
}

/// Test that omitted optional fields fall back to their defaults.
#[test]
fn test_parse_applies_defaults() {
    let toml_str = r#"
[joints.wrist_roll]
max_velocity = 3.0
max_acceleration = 6.0
"#;

    let config = joint_motion::parse_config(toml_str).unwrap();
    let joint = config.joint("wrist_roll").unwrap();

    assert!(joint.min_position.is_infinite() && joint.min_position < 0.0);
    assert!(joint.max_position.is_infinite() && joint.max_position > 0.0);
    assert_eq!(config.control.tick_rate_hz, 100.0);
}

/// Test that validation runs as part of parsing.
#[test]
fn test_parse_rejects_zero_tick_rate() {
    let toml_str = r#"
[control]
tick_rate_hz = 0.0

[joints.wrist_roll]
max_velocity = 3.0
max_acceleration = 6.0
"#;

    let result = joint_motion::parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTickRate(_)))
    ));
}

/// Test that a joint name over the 32-byte budget fails to deserialize.
#[test]
fn test_parse_rejects_oversized_joint_name() {
    let toml_str = r#"
[joints.a_joint_name_that_is_way_longer_than_the_supported_budget]
max_velocity = 3.0
max_acceleration = 6.0
"#;

    let result = joint_motion::parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that more joints than the registry capacity fail to deserialize.
#[test]
fn test_parse_rejects_too_many_joints() {
    let mut toml_str = String::new();
    for i in 0..17 {
        toml_str.push_str(&format!(
            "[joints.joint_{}]\nmax_velocity = 1.0\nmax_acceleration = 1.0\n\n",
            i
        ));
    }

    let result = joint_motion::parse_config(&toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test the error path for a missing configuration file.
#[test]
fn test_load_config_missing_file() {
    let result = joint_motion::load_config("/nonexistent/joints.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::IoError(_)))
    ));
}
