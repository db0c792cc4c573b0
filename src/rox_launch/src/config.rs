//! Declared launch arguments and the typed configuration resolved from them

use crate::{
    actions::DeclareArgument,
    condition::canonical_bool,
    context::LaunchContext,
    error::{LaunchError, Result},
};
use serde::Serialize;
use std::fmt;

pub const USE_SIM_TIME: &str = "use_sim_time";
pub const USE_JOINT_STATE_PUBLISHER_GUI: &str = "use_joint_state_publisher_gui";
pub const ROX_TYPE: &str = "rox_type";
pub const IMU_ENABLE: &str = "imu_enable";
pub const D435_ENABLE: &str = "d435_enable";
pub const ARM_TYPE: &str = "arm_type";
pub const USE_UR_DC: &str = "use_ur_dc";
pub const USE_RVIZ: &str = "use_rviz";

/// Arguments declared by the ROX description launch, in declaration order
pub fn declare_arguments() -> Vec<DeclareArgument> {
    vec![
        DeclareArgument::new(USE_SIM_TIME)
            .default_value("False")
            .description("Use simulation clock if True (True/False)"),
        DeclareArgument::new(USE_JOINT_STATE_PUBLISHER_GUI)
            .default_value("True")
            .description("Use joint state publisher gui if True (True/False)"),
        DeclareArgument::new(ROX_TYPE)
            .default_value("argo")
            .choices(DriveType::ALL.iter().map(|d| d.as_str()))
            .description("ROX Drive Type"),
        DeclareArgument::new(IMU_ENABLE)
            .default_value("False")
            .description("Enable IMU - True/False"),
        DeclareArgument::new(D435_ENABLE)
            .default_value("False")
            .description("Enable Realsense - True/False"),
        DeclareArgument::new(ARM_TYPE)
            .default_value("")
            .choices(ArmType::ALL.iter().map(|a| a.as_str()))
            .description("Arm Types"),
        DeclareArgument::new(USE_UR_DC)
            .default_value("False")
            .description("Set to True if you have UR arm with DC variant"),
        DeclareArgument::new(USE_RVIZ)
            .default_value("True")
            .description("Launch RViz for visualization"),
    ]
}

/// ROX chassis variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DriveType {
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "argo")]
    Argo,
    #[serde(rename = "argo-trio")]
    ArgoTrio,
    #[serde(rename = "diff")]
    Diff,
    #[serde(rename = "trike")]
    Trike,
}

impl DriveType {
    pub const ALL: [DriveType; 5] = [
        DriveType::Unspecified,
        DriveType::Argo,
        DriveType::ArgoTrio,
        DriveType::Diff,
        DriveType::Trike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DriveType::Unspecified => "",
            DriveType::Argo => "argo",
            DriveType::ArgoTrio => "argo-trio",
            DriveType::Diff => "diff",
            DriveType::Trike => "trike",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }

    /// Wheel joint type used by the description for this chassis
    pub fn joint_type(&self) -> JointType {
        match self {
            DriveType::Diff | DriveType::Trike => JointType::Revolute,
            _ => JointType::Fixed,
        }
    }
}

/// Arm mounted on the chassis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArmType {
    #[serde(rename = "")]
    None,
    #[serde(rename = "ur5")]
    Ur5,
    #[serde(rename = "ur10")]
    Ur10,
    #[serde(rename = "ur5e")]
    Ur5e,
    #[serde(rename = "ur10e")]
    Ur10e,
    #[serde(rename = "ec66")]
    Ec66,
    #[serde(rename = "cs66")]
    Cs66,
}

impl ArmType {
    pub const ALL: [ArmType; 7] = [
        ArmType::None,
        ArmType::Ur5,
        ArmType::Ur10,
        ArmType::Ur5e,
        ArmType::Ur10e,
        ArmType::Ec66,
        ArmType::Cs66,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArmType::None => "",
            ArmType::Ur5 => "ur5",
            ArmType::Ur10 => "ur10",
            ArmType::Ur5e => "ur5e",
            ArmType::Ur10e => "ur10e",
            ArmType::Ec66 => "ec66",
            ArmType::Cs66 => "cs66",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }

    pub fn is_present(&self) -> bool {
        *self != ArmType::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JointType {
    Revolute,
    Fixed,
}

impl JointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JointType::Revolute => "revolute",
            JointType::Fixed => "fixed",
        }
    }
}

impl fmt::Display for JointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved, typed launch configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoxConfig {
    pub use_sim_time: bool,
    pub use_joint_state_publisher_gui: bool,
    pub rox_type: DriveType,
    pub imu_enable: bool,
    pub d435_enable: bool,
    pub arm_type: ArmType,
    pub use_ur_dc: bool,
    pub use_rviz: bool,
}

impl RoxConfig {
    pub fn from_context(context: &LaunchContext) -> Result<Self> {
        Ok(Self {
            use_sim_time: context.require_bool(USE_SIM_TIME)?,
            use_joint_state_publisher_gui: context.require_bool(USE_JOINT_STATE_PUBLISHER_GUI)?,
            rox_type: parse_choice(context, ROX_TYPE, DriveType::parse)?,
            imu_enable: context.require_bool(IMU_ENABLE)?,
            d435_enable: context.require_bool(D435_ENABLE)?,
            arm_type: parse_choice(context, ARM_TYPE, ArmType::parse)?,
            use_ur_dc: context.require_bool(USE_UR_DC)?,
            use_rviz: context.require_bool(USE_RVIZ)?,
        })
    }

    pub fn joint_type(&self) -> JointType {
        self.rox_type.joint_type()
    }

    /// `name:=value` mappings passed to the description template
    pub fn xacro_mappings(&self) -> Vec<(&'static str, String)> {
        vec![
            (ARM_TYPE, self.arm_type.as_str().to_string()),
            (ROX_TYPE, self.rox_type.as_str().to_string()),
            ("joint_type", self.joint_type().as_str().to_string()),
            ("use_imu", canonical_bool(self.imu_enable).to_string()),
            (D435_ENABLE, canonical_bool(self.d435_enable).to_string()),
            (USE_UR_DC, canonical_bool(self.use_ur_dc).to_string()),
        ]
    }
}

fn parse_choice<T>(
    context: &LaunchContext,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    let raw = context.require(name)?;
    parse(raw).ok_or_else(|| LaunchError::InvalidChoice {
        argument: name.to_string(),
        value: raw.to_string(),
        choices: context
            .declarations()
            .iter()
            .find(|d| d.name == name)
            .and_then(|d| d.choices.clone())
            .unwrap_or_default(),
    })
}
