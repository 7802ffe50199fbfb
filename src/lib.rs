//! # joint-motion
//!
//! Configuration-driven trajectory reference generation for multi-joint
//! manipulators.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define joints and their limits in TOML files
//! - **Waypoint goals**: Multi-joint trajectories with optional velocities and schedules
//! - **Synchronized motion**: All joints of a goal share one segment duration
//! - **Trapezoidal profiles**: Closed-form velocity profiles under joint limits
//! - **Validate-first admission**: Rejected goals leave the generator untouched
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use joint_motion::{ReferenceGenerator, TrajectoryGoal};
//!
//! // Load joint limits from TOML
//! let config = joint_motion::load_config("joints.toml")?;
//! let mut generator = ReferenceGenerator::from_config(&config)?;
//!
//! // Feed measurements, then submit a goal
//! generator.set_joint_state("shoulder_pan", 0.0, 0.0);
//! generator.set_joint_state("elbow", 0.0, 0.0);
//!
//! let goal = TrajectoryGoal::builder()
//!     .joints(&["shoulder_pan", "elbow"])
//!     .waypoint(&[1.2, -0.4])
//!     .build()?;
//! generator.set_goal(goal)?;
//!
//! // Tick at the control rate
//! let mut references = heapless::Vec::new();
//! while generator.calculate_references(0.01, &mut references) {
//!     // references[i] is the position command for joint i
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing, and [`SharedGenerator`]
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod generator;
pub mod joint;
pub mod profile;

// Shared handle (std only)
#[cfg(feature = "std")]
pub mod sync;

// Re-exports for ergonomic API
pub use config::{ControlConfig, JointConfig, SystemConfig, validate_config};
pub use error::{AdmissionError, ConfigError, Error, GoalError, RegistryError, Result};
pub use generator::{
    GoalProgress, MAX_WAYPOINTS, ReferenceGenerator, TrajectoryGoal, TrajectoryGoalBuilder,
    Waypoint,
};
pub use joint::{JointHandle, JointLimits, JointRegistry, JointState, MAX_JOINTS};
pub use profile::{Segment, generate_segment, interpolate_cubic};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

#[cfg(feature = "std")]
pub use sync::SharedGenerator;
