//! Goal admission and reference generation.
//!
//! [`TrajectoryGoal`] describes a waypoint trajectory for a set of named
//! joints; [`ReferenceGenerator`] admits goals, plans one synchronized
//! segment per waypoint, and integrates position references tick by tick.

mod active;
mod goal;
mod planner;
mod reference;

pub use goal::{TrajectoryGoal, TrajectoryGoalBuilder, Waypoint, MAX_WAYPOINTS};
pub use reference::{GoalProgress, ReferenceGenerator};
