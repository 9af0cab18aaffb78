//! Joint trajectory export aligned to a robot description.
//!
//! Extracts the actuated joint order from a URDF file, normalizes
//! per-timestep joint states (named mappings or ordered lists) against
//! that order, and writes the result as CSV or JSON with self-describing
//! column names.
//!
//! # Example
//!
//! ```no_run
//! use jointtrace_export::{ExportFormat, JointState, TrajectoryWriter};
//!
//! # fn main() -> Result<(), jointtrace_export::ExportError> {
//! let writer = TrajectoryWriter::from_urdf("robot.urdf")?;
//! let trajectory = vec![
//!     JointState::from_pairs([("shoulder", 0.0), ("elbow", 0.1)]),
//!     JointState::from_pairs([("shoulder", 0.5), ("elbow", 0.2)]),
//! ];
//! writer.write(trajectory, "out/trajectory.csv", ExportFormat::Csv)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod state;
pub mod writer;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use error::{ExportError, StateError};
pub use state::JointState;
pub use writer::{ExportFormat, TrajectoryWriter};
