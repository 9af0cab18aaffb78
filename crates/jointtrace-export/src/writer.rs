//! Trajectory writing in CSV and JSON formats.
//!
//! A [`TrajectoryWriter`] extracts the actuated joint order from a robot
//! description once, then writes any number of trajectories against that
//! fixed column order. Validation is all-or-nothing per call: every
//! timestep is normalized and checked before a single byte of output is
//! produced, so a failing trajectory never leaves a partial file behind.

use std::path::Path;

use serde::Serialize;

use jointtrace_urdf::parse_actuated_joints;

use crate::error::ExportError;
use crate::state::JointState;

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// Output format for trajectory export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values with a joint-name header row.
    #[default]
    Csv,
    /// Pretty-printed JSON with named per-timestep objects.
    Json,
}

impl ExportFormat {
    /// Lowercase token for this format.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    /// Accepts exactly `"csv"` and `"json"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ExportError::UnsupportedFormat {
                requested: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TrajectoryWriter
// ---------------------------------------------------------------------------

/// Writes joint trajectories to disk with columns fixed by a robot
/// description.
#[derive(Debug, Clone)]
pub struct TrajectoryWriter {
    joint_names: Vec<String>,
    num_joints: usize,
}

impl TrajectoryWriter {
    /// Build a writer whose column order is the actuated joint order of
    /// the given robot description file.
    pub fn from_urdf(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let joint_names = parse_actuated_joints(path)?;
        let num_joints = joint_names.len();
        Ok(Self {
            joint_names,
            num_joints,
        })
    }

    /// Column order for exported files.
    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    /// Number of exported columns.
    pub fn num_joints(&self) -> usize {
        self.num_joints
    }

    /// Export a trajectory to `output_path` in the given format.
    ///
    /// Timesteps are validated in order against the writer's joint order;
    /// the first failure aborts the call before any filesystem work, so an
    /// existing file at `output_path` survives a failed export unchanged.
    /// Parent directories of `output_path` are created as needed.
    pub fn write<I>(
        &self,
        trajectory: I,
        output_path: impl AsRef<Path>,
        format: ExportFormat,
    ) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = JointState>,
    {
        let output_path = output_path.as_ref();

        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (index, state) in trajectory.into_iter().enumerate() {
            rows.push(self.resolve_row(&state, index)?);
        }

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ExportError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        match format {
            ExportFormat::Csv => self.write_csv(&rows, output_path)?,
            ExportFormat::Json => self.write_json(&rows, output_path)?,
        }

        tracing::debug!(
            "wrote {} timesteps ({} joints) to {}",
            rows.len(),
            self.num_joints,
            output_path.display()
        );
        Ok(())
    }

    /// Validate one timestep and resolve it into column order.
    fn resolve_row(&self, state: &JointState, index: usize) -> Result<Vec<f64>, ExportError> {
        let row = state
            .to_ordered(&self.joint_names)
            .map_err(|source| ExportError::Timestep { index, source })?;
        if row.len() != self.num_joints {
            return Err(ExportError::RowLength {
                index,
                expected: self.num_joints,
                actual: row.len(),
            });
        }
        Ok(row)
    }

    fn write_csv(&self, rows: &[Vec<f64>], path: &Path) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.joint_names)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(|e| ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    fn write_json(&self, rows: &[Vec<f64>], path: &Path) -> Result<(), ExportError> {
        let timesteps: Vec<serde_json::Map<String, serde_json::Value>> = rows
            .iter()
            .map(|row| {
                self.joint_names
                    .iter()
                    .zip(row.iter())
                    .map(|(name, value)| (name.clone(), serde_json::Value::from(*value)))
                    .collect()
            })
            .collect();

        let document = TrajectoryDocument {
            joint_names: &self.joint_names,
            timesteps,
        };

        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(path, json).map_err(|e| ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

/// Serialized shape of a JSON trajectory file.
#[derive(Serialize)]
struct TrajectoryDocument<'a> {
    joint_names: &'a [String],
    timesteps: Vec<serde_json::Map<String, serde_json::Value>>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
