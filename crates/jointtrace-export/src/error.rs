//! Error types for joint-state normalization and trajectory export.

use std::path::PathBuf;

use thiserror::Error;

pub use jointtrace_urdf::UrdfError;

// ---------------------------------------------------------------------------
// StateError
// ---------------------------------------------------------------------------

/// A joint state that cannot be reconciled with a target joint order.
///
/// Produced by the pure normalization step; carries no filesystem context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Ordered positions were given without the parallel name sequence.
    #[error("ordered joint positions must provide joint names")]
    MissingNames,

    /// The name and position sequences have different lengths.
    #[error("joint names length ({names}) does not match positions length ({positions})")]
    LengthMismatch { names: usize, positions: usize },

    /// The state's name set differs from the target order's name set.
    ///
    /// Both lists are sorted. `missing` names appear in the target order
    /// but not in the state; `extra` names appear in the state but not in
    /// the target order.
    #[error("joint names do not match the target order: {}", mismatch_detail(.missing, .extra))]
    NameSetMismatch {
        missing: Vec<String>,
        extra: Vec<String>,
    },
}

fn mismatch_detail(missing: &[String], extra: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing: {missing:?}"));
    }
    if !extra.is_empty() {
        parts.push(format!("extra: {extra:?}"));
    }
    parts.join(", ")
}

// ---------------------------------------------------------------------------
// ExportError
// ---------------------------------------------------------------------------

/// Top-level error type for trajectory export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The robot description could not be parsed into a joint order.
    #[error("robot description error: {0}")]
    Urdf(#[from] UrdfError),

    /// A timestep failed normalization against the writer's joint order.
    #[error("timestep {index}: {source}")]
    Timestep { index: usize, source: StateError },

    /// A resolved row has the wrong number of values.
    #[error("timestep {index}: expected {expected} joint values, got {actual}")]
    RowLength {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// The requested output format token is not recognized.
    #[error("unsupported format: '{requested}' (use 'csv' or 'json')")]
    UnsupportedFormat { requested: String },

    /// CSV encoding or file creation failed.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory creation or file write failed.
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_display_messages() {
        assert_eq!(
            StateError::MissingNames.to_string(),
            "ordered joint positions must provide joint names"
        );
        assert_eq!(
            StateError::LengthMismatch {
                names: 2,
                positions: 3
            }
            .to_string(),
            "joint names length (2) does not match positions length (3)"
        );
    }

    #[test]
    fn name_set_mismatch_lists_missing_and_extra() {
        let e = StateError::NameSetMismatch {
            missing: vec!["j1".into(), "j2".into()],
            extra: vec!["x".into()],
        };
        assert_eq!(
            e.to_string(),
            r#"joint names do not match the target order: missing: ["j1", "j2"], extra: ["x"]"#
        );
    }

    #[test]
    fn name_set_mismatch_omits_empty_segment() {
        let e = StateError::NameSetMismatch {
            missing: vec!["j1".into()],
            extra: vec![],
        };
        assert_eq!(
            e.to_string(),
            r#"joint names do not match the target order: missing: ["j1"]"#
        );

        let e = StateError::NameSetMismatch {
            missing: vec![],
            extra: vec!["x".into()],
        };
        assert_eq!(
            e.to_string(),
            r#"joint names do not match the target order: extra: ["x"]"#
        );
    }

    #[test]
    fn export_error_display_messages() {
        assert_eq!(
            ExportError::Timestep {
                index: 3,
                source: StateError::MissingNames,
            }
            .to_string(),
            "timestep 3: ordered joint positions must provide joint names"
        );
        assert_eq!(
            ExportError::RowLength {
                index: 0,
                expected: 6,
                actual: 4
            }
            .to_string(),
            "timestep 0: expected 6 joint values, got 4"
        );
        assert_eq!(
            ExportError::UnsupportedFormat {
                requested: "yaml".into()
            }
            .to_string(),
            "unsupported format: 'yaml' (use 'csv' or 'json')"
        );
    }

    #[test]
    fn export_error_from_urdf_error() {
        let err = UrdfError::Parse("bad xml".into());
        let export_err: ExportError = err.into();
        assert!(matches!(export_err, ExportError::Urdf(_)));
        assert!(export_err.to_string().contains("bad xml"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn errors_are_send_sync() {
        assert_send_sync::<StateError>();
        assert_send_sync::<ExportError>();
    }
}
