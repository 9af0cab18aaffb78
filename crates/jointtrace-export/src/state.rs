//! Joint-state representations and their normalization.
//!
//! A [`JointState`] is one timestep of joint positions in whichever shape
//! the caller has on hand: a name-to-position mapping, or an ordered
//! position list with (or without) its parallel name sequence. The
//! normalization methods reconcile either shape against a target joint
//! order so the export layer only ever sees plain ordered rows.

use std::collections::{HashMap, HashSet};

use crate::error::StateError;

// ---------------------------------------------------------------------------
// JointState
// ---------------------------------------------------------------------------

/// A single timestep of joint positions.
///
/// Positions are radians for rotational joints and meters for prismatic
/// joints, matching the robot description's units.
#[derive(Debug, Clone, PartialEq)]
pub enum JointState {
    /// Joint name to position. Order-independent.
    Mapping(HashMap<String, f64>),
    /// Positions in caller-supplied order, with the parallel name
    /// sequence when the caller has one.
    Ordered {
        positions: Vec<f64>,
        names: Option<Vec<String>>,
    },
}

impl JointState {
    /// Build a mapping state from name/position pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::Mapping(pairs.into_iter().map(|(n, p)| (n.into(), p)).collect())
    }

    /// Build an ordered state with its parallel name sequence.
    pub fn ordered(positions: Vec<f64>, names: Vec<String>) -> Self {
        Self::Ordered {
            positions,
            names: Some(names),
        }
    }

    /// Build an ordered state without a name sequence.
    ///
    /// Normalization rejects this shape with [`StateError::MissingNames`].
    pub fn unnamed(positions: Vec<f64>) -> Self {
        Self::Ordered {
            positions,
            names: None,
        }
    }

    /// Convert this state to a name-to-position mapping.
    ///
    /// Ordered states must carry a name sequence of matching length.
    pub fn to_mapping(&self) -> Result<HashMap<String, f64>, StateError> {
        match self {
            Self::Mapping(map) => Ok(map.clone()),
            Self::Ordered { positions, names } => {
                let names = names.as_ref().ok_or(StateError::MissingNames)?;
                if names.len() != positions.len() {
                    return Err(StateError::LengthMismatch {
                        names: names.len(),
                        positions: positions.len(),
                    });
                }
                Ok(names
                    .iter()
                    .cloned()
                    .zip(positions.iter().copied())
                    .collect())
            }
        }
    }

    /// Resolve this state into position values following `target_order`.
    ///
    /// The state's name set must equal the target order's name set;
    /// otherwise the result is [`StateError::NameSetMismatch`] with both
    /// differences sorted. A name that appears more than once in
    /// `target_order` resolves to the same value at each occurrence.
    pub fn to_ordered(&self, target_order: &[String]) -> Result<Vec<f64>, StateError> {
        let mapping = self.to_mapping()?;

        let mut row = Vec::with_capacity(target_order.len());
        let mut missing: Vec<String> = Vec::new();
        for name in target_order {
            match mapping.get(name) {
                Some(&value) => row.push(value),
                None => missing.push(name.clone()),
            }
        }

        let target_set: HashSet<&str> = target_order.iter().map(String::as_str).collect();
        let mut extra: Vec<String> = mapping
            .keys()
            .filter(|k| !target_set.contains(k.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() || !extra.is_empty() {
            missing.sort_unstable();
            missing.dedup();
            extra.sort_unstable();
            return Err(StateError::NameSetMismatch { missing, extra });
        }

        Ok(row)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
