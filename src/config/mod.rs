//! Configuration module for joint-motion.
//!
//! Provides types for loading and validating joint limit configurations from
//! TOML files (with `std` feature) or pre-parsed data.

mod joint;
#[cfg(feature = "std")]
mod loader;
mod system;
mod validation;

pub use joint::{ControlConfig, JointConfig};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
