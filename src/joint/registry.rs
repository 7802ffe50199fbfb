//! Index-stable joint registry.
//!
//! Joints are assigned a contiguous index at registration; all runtime state
//! lives in dense arrays indexed by that position. Name lookup happens once
//! per external call, never on the tick path.

use heapless::{FnvIndexMap, String, Vec};

use crate::error::{RegistryError, Result};

use super::limits::JointLimits;
use super::state::JointState;

/// Maximum number of joints in the registry.
pub const MAX_JOINTS: usize = 16;

/// Opaque, index-stable reference to a registered joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointHandle(usize);

impl JointHandle {
    /// Position of this joint in reference vectors.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Registry of named joints with contiguous state storage.
#[derive(Debug)]
pub struct JointRegistry {
    indices: FnvIndexMap<String<32>, usize, MAX_JOINTS>,
    limits: Vec<JointLimits, MAX_JOINTS>,
    states: Vec<JointState, MAX_JOINTS>,
}

impl Default for JointRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl JointRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            indices: FnvIndexMap::new(),
            limits: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Register a joint or overwrite the limits of an existing one.
    ///
    /// Registration re-idles the joint but keeps its measurement state, so
    /// limits can be updated without losing initialization.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is full or the name exceeds 32 bytes.
    pub fn register(&mut self, name: &str, limits: JointLimits) -> Result<JointHandle> {
        let key = String::try_from(name).map_err(|_| RegistryError::NameTooLong)?;

        if let Some(&idx) = self.indices.get(&key) {
            self.limits[idx] = limits;
            self.states[idx].is_idle = true;
            return Ok(JointHandle(idx));
        }

        let idx = self.states.len();
        self.indices
            .insert(key, idx)
            .map_err(|_| RegistryError::CapacityExceeded)?;
        // Vec capacity equals map capacity, so these cannot fail here
        let _ = self.limits.push(limits);
        let _ = self.states.push(JointState::new());

        Ok(JointHandle(idx))
    }

    /// Look up the handle for a joint name.
    pub fn handle(&self, name: &str) -> Option<JointHandle> {
        let key = String::try_from(name).ok()?;
        self.indices.get(&key).map(|&idx| JointHandle(idx))
    }

    /// Name of a registered joint.
    pub fn name(&self, handle: JointHandle) -> &str {
        self.indices
            .iter()
            .find(|(_, &idx)| idx == handle.0)
            .map(|(name, _)| name.as_str())
            .unwrap_or("")
    }

    /// Limits of a registered joint.
    #[inline]
    pub fn limits(&self, handle: JointHandle) -> &JointLimits {
        &self.limits[handle.0]
    }

    /// Current state of a registered joint.
    #[inline]
    pub fn state(&self, handle: JointHandle) -> &JointState {
        &self.states[handle.0]
    }

    #[inline]
    pub(crate) fn state_mut(&mut self, handle: JointHandle) -> &mut JointState {
        &mut self.states[handle.0]
    }

    /// Record a measurement for a joint. Returns false if the name is unknown.
    pub fn apply_measurement(&mut self, name: &str, position: f64, velocity: f64) -> bool {
        match self.handle(name) {
            Some(handle) => {
                self.states[handle.0].apply_measurement(position, velocity);
                true
            }
            None => false,
        }
    }

    /// Number of registered joints.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over registered joint names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(|s| s.as_str())
    }

    /// Iterate over all joint states in index order.
    pub(crate) fn states(&self) -> &[JointState] {
        &self.states
    }
}
