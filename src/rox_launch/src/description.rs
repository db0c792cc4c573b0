//! Robot description templating
//!
//! The description is produced by running `xacro` on the template with the
//! resolved configuration as `name:=value` mappings. By default the command is
//! handed to the launch host unevaluated; [`render_description`] runs it here
//! and checks the result is a URDF robot document.

use crate::{
    config::RoxConfig,
    error::{LaunchError, Result},
};
use std::{path::Path, process::Command};

pub const XACRO: &str = "xacro";

/// Build the templating command for a description template
pub fn description_command(template: &Path, config: &RoxConfig) -> Vec<String> {
    let mut cmd = vec![XACRO.to_string(), template.display().to_string()];
    cmd.extend(
        config
            .xacro_mappings()
            .into_iter()
            .map(|(name, value)| format!("{}:={}", name, value)),
    );
    cmd
}

/// Run a templating command and return its validated output
pub fn render_description(cmd: &[String]) -> Result<String> {
    let (program, args) = cmd
        .split_first()
        .ok_or_else(|| LaunchError::CommandFailed("empty command".to_string()))?;

    log::info!("Rendering robot description: {}", cmd.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| LaunchError::CommandFailed(format!("{}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LaunchError::CommandFailed(format!(
            "'{}' exited with {}: {}",
            cmd.join(" "),
            output.status,
            stderr.trim()
        )));
    }

    let urdf = String::from_utf8(output.stdout)
        .map_err(|e| LaunchError::InvalidDescription(format!("output is not UTF-8: {}", e)))?;
    let name = validate_description(&urdf)?;
    log::debug!("Rendered description for robot '{}' ({} bytes)", name, urdf.len());
    Ok(urdf)
}

/// Check that a rendered description is a URDF `<robot>` document.
///
/// Returns the robot name.
pub fn validate_description(urdf: &str) -> Result<String> {
    let doc = roxmltree::Document::parse(urdf)
        .map_err(|e| LaunchError::InvalidDescription(e.to_string()))?;
    let root = doc.root_element();

    if root.tag_name().name() != "robot" {
        return Err(LaunchError::InvalidDescription(format!(
            "expected <robot> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    root.attribute("name")
        .map(str::to_string)
        .ok_or_else(|| LaunchError::InvalidDescription("<robot> has no name".to_string()))
}
