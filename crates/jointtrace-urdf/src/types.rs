//! Joint-level data model extracted from a robot description.
//!
//! These types are deliberately shallow: the scan keeps only what the
//! export layer needs (joint names and their motion kind, in document
//! order) and discards the rest of the kinematic tree.

// ---------------------------------------------------------------------------
// JointKind
// ---------------------------------------------------------------------------

/// Kind of motion a joint allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointKind {
    /// Rotation about a single axis, with position limits.
    Revolute,
    /// Unlimited rotation about a single axis.
    Continuous,
    /// Translation along an axis, with position limits.
    Prismatic,
    /// No relative motion between parent and child.
    Fixed,
    /// Anything else: floating, planar, vendor extensions, or a missing
    /// `type` attribute.
    Other,
}

impl JointKind {
    /// Whether this joint kind has an actuatable degree of freedom.
    pub const fn is_actuated(self) -> bool {
        matches!(self, Self::Revolute | Self::Continuous | Self::Prismatic)
    }

    /// Classify a raw `type` attribute value.
    ///
    /// Matching ignores surrounding whitespace and letter case;
    /// unrecognized values map to [`JointKind::Other`].
    pub fn from_attr(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "revolute" => Self::Revolute,
            "continuous" => Self::Continuous,
            "prismatic" => Self::Prismatic,
            "fixed" => Self::Fixed,
            _ => Self::Other,
        }
    }
}

// ---------------------------------------------------------------------------
// JointDescriptor
// ---------------------------------------------------------------------------

/// A named joint and its classified kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointDescriptor {
    /// Joint name.
    pub name: String,
    /// Joint kind.
    pub kind: JointKind,
}

// ---------------------------------------------------------------------------
// RobotJoints
// ---------------------------------------------------------------------------

/// Joint inventory scanned from a robot description document.
///
/// Holds every *named* joint element in document order, actuated or not.
/// Constructed by the parser; the queries below derive the actuated joint
/// order used as export column order.
#[derive(Debug, Clone, Default)]
pub struct RobotJoints {
    /// Robot name, when the root element carries a `name` attribute.
    pub name: Option<String>,
    /// All named joints in document order.
    pub joints: Vec<JointDescriptor>,
}

impl RobotJoints {
    /// Iterate over actuated joints (revolute, continuous, prismatic) in
    /// document order.
    pub fn actuated(&self) -> impl Iterator<Item = &JointDescriptor> {
        self.joints.iter().filter(|j| j.kind.is_actuated())
    }

    /// Names of actuated joints in document order.
    ///
    /// Duplicate names appear once per occurrence, never collapsed.
    pub fn actuated_names(&self) -> Vec<String> {
        self.actuated().map(|j| j.name.clone()).collect()
    }

    /// Number of actuatable degrees of freedom.
    pub fn dof(&self) -> usize {
        self.actuated().count()
    }

    /// Total number of named joints scanned, actuated or not.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Whether the document contained no named joints at all.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
