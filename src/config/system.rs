//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::joint::MAX_JOINTS;

use super::joint::{ControlConfig, JointConfig};

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Control-loop settings.
    #[serde(default)]
    pub control: ControlConfig,

    /// Named joint configurations.
    pub joints: FnvIndexMap<String<32>, JointConfig, MAX_JOINTS>,
}

impl SystemConfig {
    /// Get a joint configuration by name.
    pub fn joint(&self, name: &str) -> Option<&JointConfig> {
        self.joints
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all joint names.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(|s| s.as_str())
    }

    /// Number of configured joints.
    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            control: ControlConfig::default(),
            joints: FnvIndexMap::new(),
        }
    }
}
