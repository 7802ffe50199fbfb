//! Mutable kinematic state of one joint.

/// Current kinematic state of a joint.
///
/// `position` and `velocity` track the measurement feed between goals and the
/// integrated reference while a goal is executing. A joint becomes eligible
/// for goals once the first measurement arrives (`is_initialized`) and while
/// no active goal claims it (`is_idle`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointState {
    /// Current position in joint units.
    pub position: f64,
    /// Current velocity in joint units per second.
    pub velocity: f64,
    /// True when the joint is not claimed by an active goal.
    pub is_idle: bool,
    /// True once a first measurement has been received.
    pub is_initialized: bool,
}

impl JointState {
    /// State of a freshly registered joint: idle, no measurement yet.
    pub(crate) fn new() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            is_idle: true,
            is_initialized: false,
        }
    }

    /// Record a measurement. Re-idles the joint and marks it initialized.
    pub(crate) fn apply_measurement(&mut self, position: f64, velocity: f64) {
        self.position = position;
        self.velocity = velocity;
        self.is_idle = true;
        self.is_initialized = true;
    }
}
