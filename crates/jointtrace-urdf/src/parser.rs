//! Robot description scanning using `quick-xml`.
//!
//! Recovers the joint inventory from a URDF document without building the
//! full kinematic tree. Only `<joint>` elements that are direct children
//! of the root element are considered; links, geometry, limits, and any
//! nested extension content are skipped.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::UrdfError;
use crate::types::{JointDescriptor, JointKind, RobotJoints};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a robot description file from disk into a [`RobotJoints`] inventory.
pub fn parse_file(path: impl AsRef<Path>) -> Result<RobotJoints, UrdfError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| UrdfError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content =
        String::from_utf8(bytes).map_err(|e| UrdfError::Parse(format!("UTF-8 error: {e}")))?;
    parse_str(&content)
}

/// Parse a robot description XML string into a [`RobotJoints`] inventory.
///
/// The first element of the document is taken as the robot root, whatever
/// its tag name. Joint elements missing a `name` attribute are skipped;
/// a missing or unrecognized `type` attribute classifies the joint as
/// [`JointKind::Other`].
pub fn parse_str(xml: &str) -> Result<RobotJoints, UrdfError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root_seen = false;
    let mut root_name: Option<String> = None;
    let mut joints: Vec<JointDescriptor> = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if depth == 0 {
                    root_seen = true;
                    root_name = attribute(e, b"name");
                } else if depth == 1 && e.name().as_ref() == b"joint" {
                    if let Some(descriptor) = scan_joint(e) {
                        joints.push(descriptor);
                    }
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                if depth == 0 {
                    // Self-closing root: the document has no children.
                    root_seen = true;
                    root_name = attribute(e, b"name");
                    break;
                }
                if depth == 1 && e.name().as_ref() == b"joint" {
                    if let Some(descriptor) = scan_joint(e) {
                        joints.push(descriptor);
                    }
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                if depth > 0 {
                    return Err(UrdfError::Parse(
                        "unexpected EOF in robot description".into(),
                    ));
                }
                break;
            }
            Ok(_) => {}
            Err(e) => return Err(UrdfError::Parse(e.to_string())),
        }
    }

    if !root_seen {
        return Err(UrdfError::Parse("no root element found".into()));
    }

    Ok(RobotJoints {
        name: root_name,
        joints,
    })
}

/// Extract the ordered actuated joint names from a robot description file.
///
/// This is the column order used by trajectory export: names of revolute,
/// continuous, and prismatic joints in document order, duplicates kept per
/// occurrence. Fails with [`UrdfError::NoActuatedJoints`] when the
/// document defines none.
pub fn parse_actuated_joints(path: impl AsRef<Path>) -> Result<Vec<String>, UrdfError> {
    let path = path.as_ref();
    let robot = parse_file(path)?;
    let names = robot.actuated_names();
    if names.is_empty() {
        return Err(UrdfError::NoActuatedJoints {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(
        "extracted {} actuated joints from {}",
        names.len(),
        path.display()
    );
    Ok(names)
}

// ---------------------------------------------------------------------------
// Scan helpers
// ---------------------------------------------------------------------------

/// Build a joint descriptor from a `<joint>` element's attributes.
///
/// Returns `None` for joints without a `name` attribute.
fn scan_joint(e: &BytesStart) -> Option<JointDescriptor> {
    let name = attribute(e, b"name")?;
    let kind = attribute(e, b"type").map_or(JointKind::Other, |t| JointKind::from_attr(&t));
    Some(JointDescriptor { name, kind })
}

/// Get an attribute value from an element, if present.
///
/// Entity references are decoded, so `name="a&amp;b"` yields `a&b`;
/// a value that fails to decode reads as absent.
fn attribute(e: &BytesStart, name: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name {
            return attr.unescape_value().ok().map(|value| value.into_owned());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_URDF: &str = r#"
        <robot name="test_robot">
            <link name="base_link"/>
        </robot>
    "#;

    const ARM_URDF: &str = r#"
        <robot name="arm">
            <link name="base"/>
            <link name="link1"/>
            <link name="link2"/>
            <link name="link3"/>
            <joint name="joint1" type="revolute">
                <parent link="base"/>
                <child link="link1"/>
                <axis xyz="0 0 1"/>
                <limit lower="-3.14" upper="3.14" effort="50" velocity="2"/>
            </joint>
            <joint name="mount" type="fixed">
                <parent link="link1"/>
                <child link="link2"/>
            </joint>
            <joint name="joint2" type="continuous">
                <parent link="link2"/>
                <child link="link3"/>
                <axis xyz="0 1 0"/>
            </joint>
        </robot>
    "#;

    const MIXED_CASE_URDF: &str = r#"
        <robot name="shouty">
            <joint name="j1" type="Revolute"/>
            <joint name="j2" type="CONTINUOUS"/>
            <joint name="j3" type=" prismatic "/>
        </robot>
    "#;

    const ODDBALL_URDF: &str = r#"
        <?xml version="1.0"?>
        <robot>
            <joint type="revolute">
                <axis xyz="0 0 1"/>
            </joint>
            <joint name="floater" type="floating"/>
            <joint name="j1" type="prismatic"/>
            <transmission name="tx">
                <joint name="hidden" type="revolute"/>
            </transmission>
        </robot>
    "#;

    const DUPLICATE_URDF: &str = r#"
        <robot name="dup">
            <joint name="j" type="revolute"/>
            <link name="l"/>
            <joint name="j" type="prismatic"/>
        </robot>
    "#;

    const FIXED_ONLY_URDF: &str = r#"
        <robot name="statue">
            <joint name="mount" type="fixed">
                <parent link="base"/>
                <child link="head"/>
            </joint>
        </robot>
    "#;

    // -- parse_str --

    #[test]
    fn parse_minimal_urdf() {
        let robot = parse_str(MINIMAL_URDF).unwrap();
        assert_eq!(robot.name.as_deref(), Some("test_robot"));
        assert!(robot.is_empty());
        assert_eq!(robot.dof(), 0);
    }

    #[test]
    fn parse_arm_urdf() {
        let robot = parse_str(ARM_URDF).unwrap();
        assert_eq!(robot.name.as_deref(), Some("arm"));
        assert_eq!(robot.len(), 3);
        assert_eq!(robot.dof(), 2); // revolute + continuous, not fixed
        assert_eq!(robot.actuated_names(), vec!["joint1", "joint2"]);
    }

    #[test]
    fn joint_kinds_classified() {
        let robot = parse_str(ARM_URDF).unwrap();
        assert_eq!(robot.joints[0].kind, JointKind::Revolute);
        assert_eq!(robot.joints[1].kind, JointKind::Fixed);
        assert_eq!(robot.joints[2].kind, JointKind::Continuous);
    }

    #[test]
    fn type_attribute_case_insensitive() {
        let robot = parse_str(MIXED_CASE_URDF).unwrap();
        assert_eq!(robot.actuated_names(), vec!["j1", "j2", "j3"]);
    }

    #[test]
    fn unnamed_and_nested_joints_skipped() {
        let robot = parse_str(ODDBALL_URDF).unwrap();
        assert!(robot.name.is_none());
        // The unnamed joint and the one nested in <transmission> never
        // appear; the floating joint appears but is not actuated.
        assert_eq!(robot.len(), 2);
        assert_eq!(robot.joints[0].name, "floater");
        assert_eq!(robot.joints[0].kind, JointKind::Other);
        assert_eq!(robot.actuated_names(), vec!["j1"]);
    }

    #[test]
    fn duplicate_joint_names_preserved() {
        let robot = parse_str(DUPLICATE_URDF).unwrap();
        assert_eq!(robot.actuated_names(), vec!["j", "j"]);
    }

    #[test]
    fn self_closing_root() {
        let robot = parse_str(r#"<robot name="empty"/>"#).unwrap();
        assert_eq!(robot.name.as_deref(), Some("empty"));
        assert!(robot.is_empty());
    }

    #[test]
    fn root_tag_name_not_required_to_be_robot() {
        let robot = parse_str(r#"<machine><joint name="a" type="revolute"/></machine>"#).unwrap();
        assert_eq!(robot.actuated_names(), vec!["a"]);
    }

    #[test]
    fn attribute_order_does_not_matter() {
        let xml = r#"
            <robot>
                <joint type="revolute" name="j1"/>
                <joint name="j2" type="prismatic"/>
            </robot>
        "#;
        let robot = parse_str(xml).unwrap();
        assert_eq!(robot.actuated_names(), vec!["j1", "j2"]);
    }

    #[test]
    fn entity_references_decoded() {
        let xml = r#"<robot name="r&amp;d"><joint name="a&amp;b" type="revolute"/></robot>"#;
        let robot = parse_str(xml).unwrap();
        assert_eq!(robot.name.as_deref(), Some("r&d"));
        assert_eq!(robot.actuated_names(), vec!["a&b"]);
    }

    // -- Error cases --

    #[test]
    fn parse_truncated_document() {
        let result = parse_str(r#"<robot name="broken"><joint name="j1" type="revolute">"#);
        assert!(matches!(result, Err(UrdfError::Parse(_))));
    }

    #[test]
    fn parse_empty_document() {
        let err = parse_str("").unwrap_err();
        assert_eq!(err.to_string(), "URDF parse error: no root element found");
    }

    #[test]
    fn parse_invalid_xml() {
        let result = parse_str("<not valid urdf>");
        assert!(result.is_err());
    }

    #[test]
    fn parse_file_not_found() {
        let result = parse_file("/nonexistent/robot.urdf");
        assert!(matches!(
            result,
            Err(UrdfError::Io { ref source, .. })
                if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn parse_file_rejects_non_utf8_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbled.urdf");
        std::fs::write(&path, b"<robot name=\"r\">\xff</robot>").unwrap();

        let err = parse_file(&path).unwrap_err();
        assert!(matches!(err, UrdfError::Parse(_)));
        assert!(err.to_string().contains("UTF-8 error"));
    }

    // -- parse_actuated_joints --

    #[test]
    fn actuated_joints_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arm.urdf");
        std::fs::write(&path, ARM_URDF).unwrap();

        let names = parse_actuated_joints(&path).unwrap();
        assert_eq!(names, vec!["joint1", "joint2"]);
    }

    #[test]
    fn actuated_joints_rejects_fixed_only_robot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statue.urdf");
        std::fs::write(&path, FIXED_ONLY_URDF).unwrap();

        let err = parse_actuated_joints(&path).unwrap_err();
        assert!(matches!(err, UrdfError::NoActuatedJoints { .. }));
        assert!(err.to_string().contains("statue.urdf"));
    }

    #[test]
    fn actuated_joints_missing_file() {
        let result = parse_actuated_joints("/nonexistent/robot.urdf");
        assert!(matches!(result, Err(UrdfError::Io { .. })));
    }
}
