//! Shared generator handle for multi-threaded use.
//!
//! Measurement feeds, goal submission, and the control tick usually live on
//! different threads. [`SharedGenerator`] wraps a [`ReferenceGenerator`] in
//! a mutex so each side holds the lock only for its own call.

use std::sync::Arc;

use heapless::Vec;
use parking_lot::{Mutex, MutexGuard};

use crate::error::Result;
use crate::generator::{GoalProgress, ReferenceGenerator, TrajectoryGoal};
use crate::joint::{JointHandle, JointLimits, JointState, MAX_JOINTS};

/// Cloneable, thread-safe handle to a [`ReferenceGenerator`].
///
/// Clones share the same generator. State accessors return copies instead
/// of references so no lock outlives the call; use [`lock`] when several
/// operations have to see one consistent state.
///
/// [`lock`]: SharedGenerator::lock
#[derive(Clone)]
pub struct SharedGenerator {
    inner: Arc<Mutex<ReferenceGenerator>>,
}

impl SharedGenerator {
    /// Wrap a generator for shared use.
    pub fn new(generator: ReferenceGenerator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// Register a joint, or update the limits of an already registered one.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is full or the name exceeds 32 bytes.
    pub fn init_joint(&self, name: &str, limits: JointLimits) -> Result<JointHandle> {
        self.inner.lock().init_joint(name, limits)
    }

    /// Feed a position and velocity measurement for a joint.
    ///
    /// Returns false if the name is unknown.
    pub fn set_joint_state(&self, name: &str, position: f64, velocity: f64) -> bool {
        self.inner.lock().set_joint_state(name, position, velocity)
    }

    /// Submit a goal for execution.
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::Rejected`] carrying every admission failure.
    ///
    /// [`GoalError::Rejected`]: crate::GoalError::Rejected
    pub fn set_goal(&self, goal: TrajectoryGoal) -> Result<()> {
        self.inner.lock().set_goal(goal)
    }

    /// Advance the active goal by one control period of `dt` seconds.
    ///
    /// See [`ReferenceGenerator::calculate_references`].
    pub fn calculate_references(&self, dt: f64, references: &mut Vec<f64, MAX_JOINTS>) -> bool {
        self.inner.lock().calculate_references(dt, references)
    }

    /// Look up the handle for a joint name.
    pub fn joint_handle(&self, name: &str) -> Option<JointHandle> {
        self.inner.lock().joint_handle(name)
    }

    /// Current state of a registered joint.
    pub fn joint_state(&self, handle: JointHandle) -> JointState {
        *self.inner.lock().joint_state(handle)
    }

    /// Limits of a registered joint.
    pub fn joint_limits(&self, handle: JointHandle) -> JointLimits {
        *self.inner.lock().joint_limits(handle)
    }

    /// Check if a joint is free to take a goal.
    pub fn is_idle(&self, handle: JointHandle) -> bool {
        self.inner.lock().is_idle(handle)
    }

    /// Check if a goal is currently executing.
    pub fn has_active_goal(&self) -> bool {
        self.inner.lock().has_active_goal()
    }

    /// Progress of the active goal, if any.
    pub fn progress(&self) -> Option<GoalProgress> {
        self.inner.lock().progress()
    }

    /// Lock the generator for several operations under one consistent view.
    pub fn lock(&self) -> MutexGuard<'_, ReferenceGenerator> {
        self.inner.lock()
    }
}

impl From<ReferenceGenerator> for SharedGenerator {
    fn from(generator: ReferenceGenerator) -> Self {
        Self::new(generator)
    }
}
