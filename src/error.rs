//! Error types for the joint-motion library.
//!
//! Provides unified error handling across configuration, joint registry, and
//! goal admission.

use core::fmt;

use crate::joint::MAX_JOINTS;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all joint-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Joint registry error
    Registry(RegistryError),
    /// Goal construction or admission error
    Goal(GoalError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid max velocity (must be > 0)
    InvalidMaxVelocity {
        /// Joint the limit belongs to
        joint: heapless::String<32>,
        /// Offending value
        value: f64,
    },
    /// Invalid max acceleration (must be > 0)
    InvalidMaxAcceleration {
        /// Joint the limit belongs to
        joint: heapless::String<32>,
        /// Offending value
        value: f64,
    },
    /// Invalid position range (min must be < max)
    InvalidPositionRange {
        /// Joint the range belongs to
        joint: heapless::String<32>,
        /// Minimum position
        min: f64,
        /// Maximum position
        max: f64,
    },
    /// Invalid control tick rate (must be > 0)
    InvalidTickRate(f64),
    /// More joints configured than the registry can hold
    TooManyJoints(usize),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Joint registry errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Registry is full
    CapacityExceeded,
    /// Joint name exceeds the supported length
    NameTooLong,
}

/// Goal construction and admission errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalError {
    /// Goal rejected at admission; no state was modified
    Rejected {
        /// One reason per offending joint or waypoint
        reasons: heapless::Vec<AdmissionError, MAX_JOINTS>,
    },
    /// Goal names more joints than the registry supports
    TooManyJoints,
    /// Goal carries more waypoints than supported
    TooManyWaypoints,
    /// Joint name exceeds the supported length
    JointNameTooLong,
}

/// A single reason a goal was refused admission.
#[derive(Debug, Clone, PartialEq)]
pub enum AdmissionError {
    /// Goal references a joint the registry does not know
    UnknownJoint(heapless::String<32>),
    /// Joint is already part of an active goal
    JointBusy(heapless::String<32>),
    /// No measurement has been received for the joint yet
    JointNotInitialized(heapless::String<32>),
    /// Waypoint field length disagrees with the goal's joint list
    WaypointArityMismatch {
        /// Index of the offending waypoint
        waypoint: usize,
        /// Number of joints named by the goal
        expected: usize,
        /// Number of values the waypoint carries
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Registry(e) => write!(f, "Registry error: {}", e),
            Error::Goal(e) => write!(f, "Goal error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMaxVelocity { joint, value } => {
                write!(f, "Invalid max velocity {} for joint '{}'. Must be > 0", value, joint)
            }
            ConfigError::InvalidMaxAcceleration { joint, value } => {
                write!(f, "Invalid max acceleration {} for joint '{}'. Must be > 0", value, joint)
            }
            ConfigError::InvalidPositionRange { joint, min, max } => {
                write!(f, "Invalid position range for joint '{}': min ({}) must be < max ({})", joint, min, max)
            }
            ConfigError::InvalidTickRate(v) => write!(f, "Invalid tick rate: {}. Must be > 0", v),
            ConfigError::TooManyJoints(n) => {
                write!(f, "Configuration names {} joints, registry holds at most {}", n, MAX_JOINTS)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::CapacityExceeded => {
                write!(f, "Joint registry is full (max {} joints)", MAX_JOINTS)
            }
            RegistryError::NameTooLong => write!(f, "Joint name exceeds 32 bytes"),
        }
    }
}

impl fmt::Display for GoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalError::Rejected { reasons } => {
                write!(f, "Goal rejected:")?;
                for reason in reasons {
                    write!(f, " [{}]", reason)?;
                }
                Ok(())
            }
            GoalError::TooManyJoints => {
                write!(f, "Goal names too many joints (max {})", MAX_JOINTS)
            }
            GoalError::TooManyWaypoints => write!(f, "Too many waypoints (max 32)"),
            GoalError::JointNameTooLong => write!(f, "Joint name exceeds 32 bytes"),
        }
    }
}

impl fmt::Display for AdmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmissionError::UnknownJoint(name) => write!(f, "Unknown joint: '{}'", name),
            AdmissionError::JointBusy(name) => {
                write!(f, "Joint '{}' is busy with another goal", name)
            }
            AdmissionError::JointNotInitialized(name) => {
                write!(f, "Joint '{}' has no measurement yet", name)
            }
            AdmissionError::WaypointArityMismatch { waypoint, expected, actual } => {
                write!(f, "Waypoint {} carries {} values, goal names {} joints", waypoint, actual, expected)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<GoalError> for Error {
    fn from(e: GoalError) -> Self {
        Error::Goal(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

#[cfg(feature = "std")]
impl std::error::Error for GoalError {}

#[cfg(feature = "std")]
impl std::error::Error for AdmissionError {}
