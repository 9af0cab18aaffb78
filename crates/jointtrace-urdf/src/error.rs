//! Error types for robot description parsing.

use std::path::PathBuf;

/// Errors that can occur while extracting joint data from a robot
/// description file.
#[derive(Debug, thiserror::Error)]
pub enum UrdfError {
    /// Failed to read the description file.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the description XML content.
    #[error("URDF parse error: {0}")]
    Parse(String),

    /// The document parsed cleanly but defines no actuated joints.
    #[error("no actuated joints (revolute/continuous/prismatic) found in {path}")]
    NoActuatedJoints { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
