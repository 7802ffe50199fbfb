//! Joint models: kinematic limits, runtime state, and the name registry.

mod limits;
mod registry;
mod state;

pub use limits::JointLimits;
pub use registry::{JointHandle, JointRegistry, MAX_JOINTS};
pub use state::JointState;
