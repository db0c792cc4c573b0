//! Node action implementation

use crate::condition::Condition;
use serde::Serialize;

/// Node action representing a ROS 2 node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAction {
    pub package: String,
    pub executable: String,
    pub name: Option<String>,
    pub arguments: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub output: Option<String>,
    pub condition: Option<Condition>,
}

impl NodeAction {
    pub fn new(package: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            executable: executable.into(),
            name: None,
            arguments: Vec::new(),
            parameters: Vec::new(),
            output: None,
            condition: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            value,
        });
        self
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Node name, falling back to the executable name
    pub fn node_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.executable)
    }

    pub fn get_parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
}

/// Value of a node parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParameterValue {
    Bool(bool),
    Text(String),
    /// Command whose standard output becomes the value when the node starts
    Command(Vec<String>),
}

impl ParameterValue {
    /// Render the value as it appears after `-p name:=` on a ROS command line
    pub fn to_arg_string(&self) -> String {
        match self {
            ParameterValue::Bool(b) => b.to_string(),
            ParameterValue::Text(s) => s.clone(),
            ParameterValue::Command(cmd) => format!("$({})", cmd.join(" ")),
        }
    }
}
