//! The reference generator: joint registry, goal admission, and the tick.

use heapless::Vec;
use libm::fabs;
use log::{debug, warn};

use crate::config::{validate_config, SystemConfig};
use crate::error::{AdmissionError, Error, GoalError, Result};
use crate::joint::{JointHandle, JointLimits, JointRegistry, JointState, MAX_JOINTS};

use super::active::ActiveGoal;
use super::goal::TrajectoryGoal;
use super::planner;

/// Soft tolerance between the integrated state and the planned waypoint,
/// checked when a segment ends. Exceeding it logs a warning and nothing else.
const TRACKING_TOLERANCE: f64 = 0.01;

/// Snapshot of the active goal's execution progress.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GoalProgress {
    /// Waypoint currently being tracked; `None` before the first tick plans.
    pub current_waypoint: Option<usize>,
    /// Total waypoints in the goal.
    pub num_waypoints: usize,
    /// Elapsed time within the current segment.
    pub segment_time: f64,
    /// Planned duration of the current segment.
    pub segment_duration: f64,
}

/// Trajectory reference generator for a set of named joints.
///
/// Joints are registered once, fed with measurements while idle, and driven
/// by waypoint goals. Each call to [`calculate_references`] advances the
/// active goal by one control period and yields a position reference per
/// registered joint.
///
/// [`calculate_references`]: ReferenceGenerator::calculate_references
///
/// # Example
///
/// ```
/// use joint_motion::{JointLimits, ReferenceGenerator, TrajectoryGoal};
///
/// let mut generator = ReferenceGenerator::new();
/// generator.init_joint("elbow", JointLimits::new(1.0, 1.0)).unwrap();
/// generator.set_joint_state("elbow", 0.0, 0.0);
///
/// let goal = TrajectoryGoal::builder()
///     .joint("elbow")
///     .waypoint(&[2.0])
///     .build()
///     .unwrap();
/// generator.set_goal(goal).unwrap();
///
/// let mut references = heapless::Vec::new();
/// while generator.calculate_references(0.01, &mut references) {}
/// assert!((references[0] - 2.0).abs() < 0.01);
/// ```
#[derive(Debug)]
pub struct ReferenceGenerator {
    joints: JointRegistry,
    active: Option<ActiveGoal>,
}

impl Default for ReferenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceGenerator {
    /// Create a generator with no joints registered.
    pub fn new() -> Self {
        Self {
            joints: JointRegistry::new(),
            active: None,
        }
    }

    /// Create a generator with one joint per entry in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or holds more
    /// joints than the registry can take.
    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        validate_config(config)?;

        let mut generator = Self::new();
        for (name, joint) in &config.joints {
            generator.init_joint(name.as_str(), JointLimits::from_config(joint))?;
        }
        Ok(generator)
    }

    /// Register a joint, or update the limits of an already registered one.
    ///
    /// The returned handle stays valid for the lifetime of the generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is full or the name exceeds 32 bytes.
    pub fn init_joint(&mut self, name: &str, limits: JointLimits) -> Result<JointHandle> {
        self.joints.register(name, limits)
    }

    /// Feed a position and velocity measurement for a joint.
    ///
    /// Every measurement re-idles the joint and marks it initialized, making
    /// it eligible for the next goal. Returns false if the name is unknown.
    pub fn set_joint_state(&mut self, name: &str, position: f64, velocity: f64) -> bool {
        self.joints.apply_measurement(name, position, velocity)
    }

    /// Look up the handle for a joint name.
    pub fn joint_handle(&self, name: &str) -> Option<JointHandle> {
        self.joints.handle(name)
    }

    /// Current state of a registered joint.
    #[inline]
    pub fn joint_state(&self, handle: JointHandle) -> &JointState {
        self.joints.state(handle)
    }

    /// Limits of a registered joint.
    #[inline]
    pub fn joint_limits(&self, handle: JointHandle) -> &JointLimits {
        self.joints.limits(handle)
    }

    /// Check if a joint is free to take a goal.
    #[inline]
    pub fn is_idle(&self, handle: JointHandle) -> bool {
        self.joints.state(handle).is_idle
    }

    /// Number of registered joints.
    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }

    /// Iterate over registered joint names.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.names()
    }

    /// Check if a goal is currently executing.
    pub fn has_active_goal(&self) -> bool {
        self.active.is_some()
    }

    /// Progress of the active goal, if any.
    pub fn progress(&self) -> Option<GoalProgress> {
        self.active.as_ref().map(|active| GoalProgress {
            current_waypoint: active.sub_goal_idx,
            num_waypoints: active.num_waypoints(),
            segment_time: active.t,
            segment_duration: active.t_end,
        })
    }

    /// Submit a goal for execution.
    ///
    /// Admission validates the whole goal first: every named joint must be
    /// registered, idle, and initialized, and every waypoint must carry one
    /// position per named joint. On rejection no state changes and every
    /// failed check is reported.
    ///
    /// A goal without waypoints is the cancellation request: it releases the
    /// named joints and clears the active goal. Cancellation passes the same
    /// admission checks, so a joint claimed by the running goal has to see a
    /// measurement first.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Rejected`] carrying every admission failure.
    pub fn set_goal(&mut self, goal: TrajectoryGoal) -> Result<()> {
        let mut reasons: Vec<AdmissionError, MAX_JOINTS> = Vec::new();
        let mut mapping: Vec<JointHandle, MAX_JOINTS> = Vec::new();

        for name in &goal.joint_names {
            match self.joints.handle(name.as_str()) {
                Some(handle) => {
                    let _ = mapping.push(handle);
                    let state = self.joints.state(handle);
                    if !state.is_idle {
                        let _ = reasons.push(AdmissionError::JointBusy(name.clone()));
                    }
                    if !state.is_initialized {
                        let _ = reasons.push(AdmissionError::JointNotInitialized(name.clone()));
                    }
                }
                None => {
                    let _ = reasons.push(AdmissionError::UnknownJoint(name.clone()));
                }
            }
        }

        let num = goal.num_joints();
        for (i, point) in goal.points.iter().enumerate() {
            if point.positions.len() != num {
                let _ = reasons.push(AdmissionError::WaypointArityMismatch {
                    waypoint: i,
                    expected: num,
                    actual: point.positions.len(),
                });
            }
        }

        if !reasons.is_empty() {
            for reason in &reasons {
                warn!("goal rejected: {}", reason);
            }
            return Err(Error::Goal(GoalError::Rejected { reasons }));
        }

        if goal.points.is_empty() {
            for &handle in &mapping {
                self.joints.state_mut(handle).is_idle = true;
            }
            self.active = None;
            debug!("cancel request released {} joints", mapping.len());
            return Ok(());
        }

        for &handle in &mapping {
            self.joints.state_mut(handle).is_idle = false;
        }
        debug!(
            "goal accepted: {} joints, {} waypoints",
            mapping.len(),
            goal.points.len()
        );
        self.active = Some(ActiveGoal::new(goal, mapping));
        Ok(())
    }

    /// Advance the active goal by one control period of `dt` seconds.
    ///
    /// `references` is cleared and filled with one position per registered
    /// joint, in registration order. Joints without an active goal report
    /// their last state. Returns true while a goal is executing; the call
    /// that completes the goal releases its joints and returns false.
    ///
    /// When a segment ends, the integrated state is compared against the
    /// planned waypoint and a deviation beyond the tracking tolerance is
    /// logged. Execution continues either way.
    pub fn calculate_references(
        &mut self,
        dt: f64,
        references: &mut Vec<f64, MAX_JOINTS>,
    ) -> bool {
        references.clear();
        for state in self.joints.states() {
            let _ = references.push(state.position);
        }

        let active = match self.active.as_mut() {
            Some(active) => active,
            None => return false,
        };

        let mut completed = false;

        if active.sub_goal_idx.is_none() || active.t > active.t_end {
            if let Some(idx) = active.sub_goal_idx {
                // Arrival check on the waypoint just finished
                for i in 0..active.mapping.len() {
                    let handle = active.mapping[i];
                    let state = self.joints.state(handle);
                    if fabs(state.position - active.targets[i]) > TRACKING_TOLERANCE {
                        warn!(
                            "joint '{}' left waypoint {} at position {}, planned {}",
                            self.joints.name(handle),
                            idx,
                            state.position,
                            active.targets[i]
                        );
                    }
                    if fabs(state.velocity - active.segments[i].v1) > TRACKING_TOLERANCE {
                        warn!(
                            "joint '{}' left waypoint {} at velocity {}, planned {}",
                            self.joints.name(handle),
                            idx,
                            state.velocity,
                            active.segments[i].v1
                        );
                    }
                }
            }

            let next = active.sub_goal_idx.map_or(0, |idx| idx + 1);
            if next >= active.num_waypoints() {
                for &handle in &active.mapping {
                    self.joints.state_mut(handle).is_idle = true;
                }
                completed = true;
            } else {
                active.sub_goal_idx = Some(next);
                active.t = 0.0;
                planner::plan_sub_goal(&self.joints, active, next);
            }
        }

        if completed {
            self.active = None;
            debug!("goal complete");
            return false;
        }

        active.t += dt;
        for i in 0..active.mapping.len() {
            let handle = active.mapping[i];
            let velocity = active.segments[i].velocity_at(active.t);
            let state = self.joints.state_mut(handle);
            state.velocity = velocity;
            state.position += dt * velocity;
            references[handle.index()] = state.position;
        }
        true
    }
}
