//! Launch configuration resolver
//!
//! Turns raw launch arguments into the ordered list of actions that bring up
//! the ROX simulation: the Gazebo world, the spawner, RViz, the robot state
//! publisher and, for robots with an arm, the joint state publishers.

use crate::{
    actions::{ExecuteProcessAction, IncludeAction, LaunchAction, NodeAction, ParameterValue},
    condition::Condition,
    config::{declare_arguments, RoxConfig},
    context::LaunchContext,
    description::{description_command, render_description},
    error::Result,
    package::PackageLocator,
};
use std::collections::HashMap;

pub const DESCRIPTION_PACKAGE: &str = "rox_description";
pub const RVIZ_PACKAGE: &str = "rox_rviz";
pub const ROBOT_NAME: &str = "rox_robot";
pub const DESCRIPTION_TOPIC: &str = "robot_description";

/// Ordered actions produced for one launch invocation
#[derive(Debug, Clone)]
pub struct LaunchDescription {
    pub config: RoxConfig,
    /// Resolved argument values in declaration order
    pub arguments: Vec<(String, String)>,
    pub actions: Vec<LaunchAction>,
}

impl LaunchDescription {
    /// Actions whose inclusion condition holds
    pub fn active_actions(&self) -> impl Iterator<Item = &LaunchAction> {
        self.actions.iter().filter(|a| a.is_active())
    }

    pub fn find_node(&self, executable: &str) -> Option<&NodeAction> {
        self.actions.iter().find_map(|a| match a {
            LaunchAction::Node(node) if node.executable == executable => Some(node),
            _ => None,
        })
    }
}

/// Resolves launch arguments into a [`LaunchDescription`]
pub struct LaunchResolver<L> {
    locator: L,
    render_description: bool,
}

impl<L: PackageLocator> LaunchResolver<L> {
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            render_description: false,
        }
    }

    /// Run the templating command during resolution instead of deferring it
    pub fn render_description(mut self, render: bool) -> Self {
        self.render_description = render;
        self
    }

    pub fn resolve(&self, overrides: &HashMap<String, String>) -> Result<LaunchDescription> {
        let context = LaunchContext::resolve(declare_arguments(), overrides)?;
        let config = RoxConfig::from_context(&context)?;
        log::info!(
            "Resolved ROX configuration: rox_type='{}' arm_type='{}' joint_type={}",
            config.rox_type.as_str(),
            config.arm_type.as_str(),
            config.joint_type()
        );

        let description_share = self.locator.require_share(DESCRIPTION_PACKAGE)?;
        let rviz_share = self.locator.require_share(RVIZ_PACKAGE)?;
        let urdf = description_share.join("urdf").join("rox.urdf.xacro");
        let world_file = description_share.join("worlds").join("empty.sdf");
        let rviz_launch = rviz_share.join("launch").join("rox_rviz_launch.py");

        let description_cmd = description_command(&urdf, &config);
        let robot_description = if self.render_description {
            ParameterValue::Text(render_description(&description_cmd)?)
        } else {
            ParameterValue::Command(description_cmd)
        };

        let mut actions: Vec<LaunchAction> = Vec::new();

        actions.push(
            ExecuteProcessAction::new([
                "gz".to_string(),
                "sim".to_string(),
                world_file.display().to_string(),
                "-v".to_string(),
                "4".to_string(),
            ])
            .output("screen")
            .into(),
        );

        actions.push(
            NodeAction::new("ros_gz_sim", "create")
                .arguments([
                    "-name",
                    ROBOT_NAME,
                    "-topic",
                    DESCRIPTION_TOPIC,
                    "-x",
                    "0",
                    "-y",
                    "0",
                    "-z",
                    "0.0",
                ])
                .output("screen")
                .into(),
        );

        actions.push(
            IncludeAction::new(rviz_launch)
                .condition(Condition::If(config.use_rviz))
                .into(),
        );

        actions.push(
            NodeAction::new("robot_state_publisher", "robot_state_publisher")
                .name("robot_state_publisher")
                .parameter(DESCRIPTION_TOPIC, robot_description)
                .output("screen")
                .into(),
        );

        if config.arm_type.is_present() {
            let gui = config.use_joint_state_publisher_gui;
            actions.push(
                NodeAction::new("joint_state_publisher", "joint_state_publisher")
                    .name("joint_state_publisher")
                    .parameter("use_sim_time", ParameterValue::Bool(config.use_sim_time))
                    .condition(Condition::Unless(gui))
                    .output("screen")
                    .into(),
            );
            actions.push(
                NodeAction::new("joint_state_publisher_gui", "joint_state_publisher_gui")
                    .name("joint_state_publisher_gui")
                    .parameter("use_sim_time", ParameterValue::Bool(config.use_sim_time))
                    .condition(Condition::If(gui))
                    .output("screen")
                    .into(),
            );
        }

        for action in &actions {
            log::debug!(
                "Action {} ({})",
                action.label(),
                if action.is_active() { "active" } else { "skipped" }
            );
        }

        Ok(LaunchDescription {
            config,
            arguments: context.ordered_configurations(),
            actions,
        })
    }
}
