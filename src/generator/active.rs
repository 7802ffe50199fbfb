//! Bookkeeping for the goal currently being executed.

use heapless::Vec;

use crate::joint::{JointHandle, MAX_JOINTS};
use crate::profile::Segment;

use super::goal::TrajectoryGoal;

/// The executing goal: the submitted trajectory, the joint mapping resolved
/// at admission, the waypoint cursor, and the solved segment per joint.
///
/// `sub_goal_idx` is `None` until the first tick plans the first waypoint.
/// `t` is the elapsed time within the current segment, `t_end` its planned
/// duration; both are meaningful only while `sub_goal_idx` is set.
#[derive(Debug)]
pub(crate) struct ActiveGoal {
    pub(crate) goal: TrajectoryGoal,
    pub(crate) mapping: Vec<JointHandle, MAX_JOINTS>,
    pub(crate) sub_goal_idx: Option<usize>,
    pub(crate) t: f64,
    pub(crate) t_end: f64,
    pub(crate) segments: Vec<Segment, MAX_JOINTS>,
    /// Planned (limit-clamped) target positions of the current waypoint.
    pub(crate) targets: Vec<f64, MAX_JOINTS>,
}

impl ActiveGoal {
    pub(crate) fn new(goal: TrajectoryGoal, mapping: Vec<JointHandle, MAX_JOINTS>) -> Self {
        Self {
            goal,
            mapping,
            sub_goal_idx: None,
            t: 0.0,
            t_end: 0.0,
            segments: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub(crate) fn num_involved(&self) -> usize {
        self.mapping.len()
    }

    pub(crate) fn num_waypoints(&self) -> usize {
        self.goal.points.len()
    }
}
