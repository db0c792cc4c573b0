//! Execute-process action implementation

use crate::condition::Condition;

/// Executable action for launching non-ROS processes
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteProcessAction {
    pub cmd: Vec<String>,
    pub output: Option<String>,
    pub condition: Option<Condition>,
}

impl ExecuteProcessAction {
    pub fn new<I, S>(cmd: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cmd: cmd.into_iter().map(Into::into).collect(),
            output: None,
            condition: None,
        }
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Program to run, i.e. the first element of the command
    pub fn program(&self) -> Option<&str> {
        self.cmd.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_process() {
        let exec = ExecuteProcessAction::new(["gz", "sim", "world.sdf"]);
        assert_eq!(exec.program(), Some("gz"));
        assert_eq!(exec.cmd.len(), 3);
        assert!(exec.output.is_none());
        assert!(exec.condition.is_none());
    }

    #[test]
    fn test_process_with_output_and_condition() {
        let exec = ExecuteProcessAction::new(["rosbag"])
            .output("screen")
            .condition(Condition::If(false));
        assert_eq!(exec.output.as_deref(), Some("screen"));
        assert_eq!(exec.condition, Some(Condition::If(false)));
    }

    #[test]
    fn test_empty_command_has_no_program() {
        let exec = ExecuteProcessAction::new(Vec::<String>::new());
        assert_eq!(exec.program(), None);
    }
}
