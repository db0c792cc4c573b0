use rox_launch::{
    actions::{LaunchAction, ParameterValue},
    package::{AmentIndex, StaticLocator},
    record::DirectiveKind,
    resolve_launch,
    resolver::LaunchResolver,
    ResolveOptions,
};
use std::collections::HashMap;
use tempfile::TempDir;

/// Build an install prefix holding the share directories the launch needs
fn install_prefix() -> TempDir {
    let prefix = TempDir::new().unwrap();
    for dir in [
        "share/rox_description/urdf",
        "share/rox_description/worlds",
        "share/rox_rviz/launch",
    ] {
        std::fs::create_dir_all(prefix.path().join(dir)).unwrap();
    }
    prefix
}

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn is_joint_state_publisher(action: &LaunchAction) -> bool {
    matches!(
        action,
        LaunchAction::Node(node)
            if node.executable == "joint_state_publisher"
                || node.executable == "joint_state_publisher_gui"
    )
}

#[test]
fn test_resolve_with_ament_index() {
    let prefix = install_prefix();
    let index = AmentIndex::with_prefixes(vec![prefix.path().to_path_buf()]);

    let record = resolve_launch(&HashMap::new(), &index, ResolveOptions::default()).unwrap();
    assert_eq!(record.directives.len(), 4);

    let world = &record.directives[0];
    assert_eq!(world.kind, DirectiveKind::Process);
    assert_eq!(world.program, "gz");
    assert_eq!(
        world.args[1],
        prefix
            .path()
            .join("share/rox_description/worlds/empty.sdf")
            .display()
            .to_string()
    );

    let rviz = &record.directives[2];
    assert_eq!(rviz.kind, DirectiveKind::Include);
    assert!(rviz.args[1].ends_with("share/rox_rviz/launch/rox_rviz_launch.py"));
}

#[test]
fn test_joint_type_follows_drive_type() {
    let prefix = install_prefix();
    let index = AmentIndex::with_prefixes(vec![prefix.path().to_path_buf()]);
    let resolver = LaunchResolver::new(&index);

    for (drive, joint) in [
        ("diff", "revolute"),
        ("trike", "revolute"),
        ("argo", "fixed"),
        ("argo-trio", "fixed"),
        ("", "fixed"),
    ] {
        let desc = resolver.resolve(&args(&[("rox_type", drive)])).unwrap();
        let rsp = desc.find_node("robot_state_publisher").unwrap();
        let Some(ParameterValue::Command(cmd)) = rsp.get_parameter("robot_description") else {
            panic!("robot_description should be a deferred command");
        };
        assert!(
            cmd.contains(&format!("joint_type:={}", joint)),
            "drive type '{}' should map to {}: {:?}",
            drive,
            joint,
            cmd
        );
        assert!(cmd.contains(&format!("rox_type:={}", drive)));
    }
}

#[test]
fn test_no_arm_means_no_joint_state_publishers() {
    let prefix = install_prefix();
    let index = AmentIndex::with_prefixes(vec![prefix.path().to_path_buf()]);
    let resolver = LaunchResolver::new(&index);

    for gui in ["True", "False"] {
        let desc = resolver
            .resolve(&args(&[("arm_type", ""), ("use_joint_state_publisher_gui", gui)]))
            .unwrap();
        assert!(!desc.actions.iter().any(is_joint_state_publisher));
    }
}

#[test]
fn test_arm_selects_exactly_one_joint_state_publisher() {
    let prefix = install_prefix();
    let index = AmentIndex::with_prefixes(vec![prefix.path().to_path_buf()]);
    let resolver = LaunchResolver::new(&index);

    for arm in ["ur5", "ur10", "ur5e", "ur10e", "ec66", "cs66"] {
        for (gui, expected) in [
            ("true", "joint_state_publisher_gui"),
            ("false", "joint_state_publisher"),
        ] {
            let desc = resolver
                .resolve(&args(&[
                    ("arm_type", arm),
                    ("use_joint_state_publisher_gui", gui),
                ]))
                .unwrap();

            let active: Vec<&LaunchAction> = desc
                .active_actions()
                .filter(|a| is_joint_state_publisher(a))
                .collect();
            assert_eq!(active.len(), 1, "arm {} gui {}", arm, gui);
            assert_eq!(active[0].label(), expected);
        }
    }
}

#[test]
fn test_visualization_present_iff_enabled() {
    let prefix = install_prefix();
    let index = AmentIndex::with_prefixes(vec![prefix.path().to_path_buf()]);

    for (flag, expected) in [("True", true), ("False", false), ("1", true), ("0", false)] {
        let record =
            resolve_launch(&args(&[("use_rviz", flag)]), &index, ResolveOptions::default())
                .unwrap();
        let has_rviz = record
            .directives
            .iter()
            .any(|d| d.kind == DirectiveKind::Include);
        assert_eq!(has_rviz, expected, "use_rviz={}", flag);
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let locator = StaticLocator::new()
        .share("rox_description", "/share/rox_description")
        .share("rox_rviz", "/share/rox_rviz");
    let input = args(&[("rox_type", "argo"), ("arm_type", ""), ("use_rviz", "True")]);

    let first = resolve_launch(&input, &locator, ResolveOptions::default()).unwrap();
    for _ in 0..10 {
        let again = resolve_launch(&input, &locator, ResolveOptions::default()).unwrap();
        assert_eq!(again.directives.len(), first.directives.len());
        for (a, b) in again.directives.iter().zip(&first.directives) {
            assert_eq!(a.cmd, b.cmd);
            assert_eq!(a.kind, b.kind);
        }
        assert_eq!(again.to_json().unwrap(), first.to_json().unwrap());
    }
}

#[test]
fn test_record_json_shape() {
    let locator = StaticLocator::new()
        .share("rox_description", "/share/rox_description")
        .share("rox_rviz", "/share/rox_rviz")
        .share("robot_state_publisher", "/opt/ros/jazzy/share/robot_state_publisher");

    let record = resolve_launch(&HashMap::new(), &locator, ResolveOptions::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    assert_eq!(json["arguments"][2], serde_json::json!(["rox_type", "argo"]));
    let rsp = &json["directives"][3];
    assert_eq!(rsp["kind"], "node");
    assert_eq!(
        rsp["program"],
        "/opt/ros/jazzy/lib/robot_state_publisher/robot_state_publisher"
    );
    assert_eq!(rsp["parameters"][0][0], "robot_description");
    assert_eq!(rsp["parameters"][0][1]["type"], "command");
}

#[test]
fn test_shell_line_runs_description_command() {
    let locator = StaticLocator::new()
        .share("rox_description", "/share/rox_description")
        .share("rox_rviz", "/share/rox_rviz");

    let record = resolve_launch(&HashMap::new(), &locator, ResolveOptions::default()).unwrap();
    let rsp = record
        .directives
        .iter()
        .find(|d| d.name == "robot_state_publisher")
        .unwrap();
    let line = rsp.shell_line();

    assert!(
        line.contains(r#"-p robot_description:="$(xacro /share/rox_description/urdf/"#),
        "description must be a live substitution: {}",
        line
    );
    assert!(line.ends_with(")\""), "{}", line);
    assert!(!line.contains("'robot_description:="), "{}", line);
}
