//! Command-line and record generation

use crate::actions::{ExecuteProcessAction, IncludeAction, LaunchAction, NodeAction};
use crate::error::GenerationError;
use crate::package::PackageLocator;
use crate::record::types::{DirectiveKind, DirectiveRecord, LaunchRecord};
use crate::resolver::LaunchDescription;

pub struct CommandGenerator<'a, L> {
    locator: &'a L,
}

impl<'a, L: PackageLocator> CommandGenerator<'a, L> {
    pub fn new(locator: &'a L) -> Self {
        Self { locator }
    }

    /// Flatten a launch description into a record.
    ///
    /// Inactive actions are only recorded when `include_inactive` is set.
    pub fn generate_record(
        &self,
        description: &LaunchDescription,
        include_inactive: bool,
    ) -> Result<LaunchRecord, GenerationError> {
        let directives = description
            .actions
            .iter()
            .filter(|a| include_inactive || a.is_active())
            .map(|a| self.generate_directive(a))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LaunchRecord {
            arguments: description.arguments.clone(),
            directives,
        })
    }

    pub fn generate_directive(
        &self,
        action: &LaunchAction,
    ) -> Result<DirectiveRecord, GenerationError> {
        match action {
            LaunchAction::ExecuteProcess(exec) => Self::generate_process_record(exec),
            LaunchAction::Node(node) => Ok(self.generate_node_record(node)),
            LaunchAction::Include(include) => Ok(Self::generate_include_record(include)),
        }
    }

    fn generate_process_record(
        exec: &ExecuteProcessAction,
    ) -> Result<DirectiveRecord, GenerationError> {
        let (program, args) = exec
            .cmd
            .split_first()
            .ok_or_else(|| GenerationError::EmptyCommand("execute_process".to_string()))?;

        Ok(DirectiveRecord {
            kind: DirectiveKind::Process,
            name: program.clone(),
            package: None,
            program: program.clone(),
            args: args.to_vec(),
            cmd: exec.cmd.clone(),
            parameters: Vec::new(),
            output: exec.output.clone(),
            condition: exec.condition,
            active: exec.condition.map_or(true, |c| c.is_satisfied()),
        })
    }

    pub fn generate_node_record(&self, node: &NodeAction) -> DirectiveRecord {
        let cmd = self.generate_node_command(node);
        let program = cmd[0].clone();

        DirectiveRecord {
            kind: DirectiveKind::Node,
            name: node.node_name().to_string(),
            package: Some(node.package.clone()),
            program,
            args: cmd[1..].to_vec(),
            cmd,
            parameters: node
                .parameters
                .iter()
                .map(|p| (p.name.clone(), p.value.clone()))
                .collect(),
            output: node.output.clone(),
            condition: node.condition,
            active: node.condition.map_or(true, |c| c.is_satisfied()),
        }
    }

    pub fn generate_node_command(&self, node: &NodeAction) -> Vec<String> {
        let mut cmd = self.resolve_executable(&node.package, &node.executable);

        // 1. Node arguments
        cmd.extend(node.arguments.iter().cloned());

        // 2. ROS args delimiter
        cmd.push("--ros-args".to_string());

        // 3. Node name
        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", node.node_name()));

        // 4. Parameters
        for param in &node.parameters {
            cmd.push("-p".to_string());
            cmd.push(format!("{}:={}", param.name, param.value.to_arg_string()));
        }

        cmd
    }

    fn generate_include_record(include: &IncludeAction) -> DirectiveRecord {
        let file = include.file.display().to_string();
        let cmd = vec!["ros2".to_string(), "launch".to_string(), file];

        DirectiveRecord {
            kind: DirectiveKind::Include,
            name: include.file_name(),
            package: None,
            program: cmd[0].clone(),
            args: cmd[1..].to_vec(),
            cmd,
            parameters: Vec::new(),
            output: None,
            condition: include.condition,
            active: include.condition.map_or(true, |c| c.is_satisfied()),
        }
    }

    /// Installed executable path, or a `ros2 run` invocation when the package
    /// cannot be located
    fn resolve_executable(&self, package: &str, executable: &str) -> Vec<String> {
        match self.locator.prefix(package) {
            Some(prefix) => vec![prefix
                .join("lib")
                .join(package)
                .join(executable)
                .display()
                .to_string()],
            None => {
                log::warn!(
                    "Package '{}' not found; falling back to 'ros2 run' for {}",
                    package,
                    executable
                );
                vec![
                    "ros2".to_string(),
                    "run".to_string(),
                    package.to_string(),
                    executable.to_string(),
                ]
            }
        }
    }
}
