//! Unit test harness for joint-motion.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod goal_admission;
