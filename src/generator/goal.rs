//! Trajectory goals: waypoint lists submitted for execution.

use heapless::{String, Vec};

use crate::error::{Error, GoalError, Result};
use crate::joint::MAX_JOINTS;

/// Maximum number of waypoints in a goal.
pub const MAX_WAYPOINTS: usize = 32;

/// One target along a trajectory.
///
/// `positions` carries one entry per joint named by the goal, in the same
/// order. `velocities` is either empty (targets are computed from the path)
/// or carries one entry per joint; any other length is ignored and treated
/// as unspecified. `time_from_start` is an absolute offset from the start of
/// the trajectory; a segment duration is taken from it only when the
/// previous waypoint carries one too.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Target position per involved joint.
    pub positions: Vec<f64, MAX_JOINTS>,
    /// Target velocity per involved joint; empty when unspecified.
    pub velocities: Vec<f64, MAX_JOINTS>,
    /// Absolute time offset from trajectory start, if scheduled.
    pub time_from_start: Option<f64>,
}

/// A waypoint trajectory for a set of named joints.
///
/// An empty `points` list is the cancellation request: it releases the named
/// joints and clears the active goal without commanding motion.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryGoal {
    /// Joints this goal touches, defining the column order of every waypoint.
    pub joint_names: Vec<String<32>, MAX_JOINTS>,
    /// Ordered waypoints.
    pub points: Vec<Waypoint, MAX_WAYPOINTS>,
}

impl TrajectoryGoal {
    /// Start building a goal.
    pub fn builder() -> TrajectoryGoalBuilder {
        TrajectoryGoalBuilder::new()
    }

    /// Build a cancellation goal for the named joints.
    ///
    /// # Errors
    ///
    /// Returns an error if too many joints are named or a name is too long.
    pub fn cancel(joint_names: &[&str]) -> Result<Self> {
        let mut builder = TrajectoryGoalBuilder::new();
        for name in joint_names {
            builder = builder.joint(name);
        }
        builder.build()
    }

    /// Number of joints this goal touches.
    pub fn num_joints(&self) -> usize {
        self.joint_names.len()
    }
}

/// Builder for waypoint trajectories.
#[derive(Debug, Clone)]
pub struct TrajectoryGoalBuilder {
    joint_names: Vec<String<32>, MAX_JOINTS>,
    points: Vec<Waypoint, MAX_WAYPOINTS>,
    too_many_joints: bool,
    too_many_waypoints: bool,
    name_too_long: bool,
}

impl Default for TrajectoryGoalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrajectoryGoalBuilder {
    /// Create a new goal builder.
    pub fn new() -> Self {
        Self {
            joint_names: Vec::new(),
            points: Vec::new(),
            too_many_joints: false,
            too_many_waypoints: false,
            name_too_long: false,
        }
    }

    /// Add a joint to the goal's joint list.
    pub fn joint(mut self, name: &str) -> Self {
        match String::try_from(name) {
            Ok(name) => {
                if self.joint_names.push(name).is_err() {
                    self.too_many_joints = true;
                }
            }
            Err(_) => self.name_too_long = true,
        }
        self
    }

    /// Add several joints to the goal's joint list.
    pub fn joints(mut self, names: &[&str]) -> Self {
        for name in names {
            self = self.joint(name);
        }
        self
    }

    /// Add a waypoint with target positions only.
    pub fn waypoint(self, positions: &[f64]) -> Self {
        self.push_waypoint(positions, &[], None)
    }

    /// Add a waypoint with explicit target velocities.
    pub fn waypoint_with_velocities(self, positions: &[f64], velocities: &[f64]) -> Self {
        self.push_waypoint(positions, velocities, None)
    }

    /// Add a waypoint scheduled at an absolute time from trajectory start.
    pub fn waypoint_at(self, positions: &[f64], time_from_start: f64) -> Self {
        self.push_waypoint(positions, &[], Some(time_from_start))
    }

    /// Add a fully specified waypoint.
    pub fn waypoint_full(
        self,
        positions: &[f64],
        velocities: &[f64],
        time_from_start: f64,
    ) -> Self {
        self.push_waypoint(positions, velocities, Some(time_from_start))
    }

    fn push_waypoint(
        mut self,
        positions: &[f64],
        velocities: &[f64],
        time_from_start: Option<f64>,
    ) -> Self {
        let positions = match Vec::from_slice(positions) {
            Ok(v) => v,
            Err(_) => {
                self.too_many_joints = true;
                return self;
            }
        };
        let velocities = match Vec::from_slice(velocities) {
            Ok(v) => v,
            Err(_) => {
                self.too_many_joints = true;
                return self;
            }
        };

        let waypoint = Waypoint {
            positions,
            velocities,
            time_from_start,
        };
        if self.points.push(waypoint).is_err() {
            self.too_many_waypoints = true;
        }
        self
    }

    /// Build the goal.
    ///
    /// # Errors
    ///
    /// Returns an error if any capacity was exceeded while building. Waypoint
    /// lengths are checked against the joint list at submission, not here.
    pub fn build(self) -> Result<TrajectoryGoal> {
        if self.name_too_long {
            return Err(Error::Goal(GoalError::JointNameTooLong));
        }
        if self.too_many_joints {
            return Err(Error::Goal(GoalError::TooManyJoints));
        }
        if self.too_many_waypoints {
            return Err(Error::Goal(GoalError::TooManyWaypoints));
        }

        Ok(TrajectoryGoal {
            joint_names: self.joint_names,
            points: self.points,
        })
    }
}
