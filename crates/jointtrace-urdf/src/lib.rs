//! Robot description (URDF) scanning for joint-order extraction.
//!
//! Parses URDF XML just far enough to recover the ordered list of actuated
//! joints (revolute, continuous, prismatic) that trajectory export uses as
//! its column order. Links, geometry, limits, and the rest of the
//! kinematic tree are ignored.

pub mod error;
pub mod parser;
pub mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use error::UrdfError;
pub use parser::{parse_actuated_joints, parse_file, parse_str};
pub use types::{JointDescriptor, JointKind, RobotJoints};
