//! Action module

pub mod declare_argument;
pub mod executable;
pub mod include;
pub mod node;

pub use declare_argument::DeclareArgument;
pub use executable::ExecuteProcessAction;
pub use include::IncludeAction;
pub use node::{NodeAction, Parameter, ParameterValue};

use crate::condition::Condition;

/// A process-start action appended to a launch description
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchAction {
    ExecuteProcess(ExecuteProcessAction),
    Node(NodeAction),
    Include(IncludeAction),
}

impl LaunchAction {
    pub fn condition(&self) -> Option<Condition> {
        match self {
            LaunchAction::ExecuteProcess(a) => a.condition,
            LaunchAction::Node(a) => a.condition,
            LaunchAction::Include(a) => a.condition,
        }
    }

    /// Whether the host should start this action
    pub fn is_active(&self) -> bool {
        self.condition().map_or(true, |c| c.is_satisfied())
    }

    /// Short label used in logs and records
    pub fn label(&self) -> String {
        match self {
            LaunchAction::ExecuteProcess(a) => a.program().unwrap_or_default().to_string(),
            LaunchAction::Node(a) => a.node_name().to_string(),
            LaunchAction::Include(a) => a.file_name(),
        }
    }
}

impl From<ExecuteProcessAction> for LaunchAction {
    fn from(action: ExecuteProcessAction) -> Self {
        LaunchAction::ExecuteProcess(action)
    }
}

impl From<NodeAction> for LaunchAction {
    fn from(action: NodeAction) -> Self {
        LaunchAction::Node(action)
    }
}

impl From<IncludeAction> for LaunchAction {
    fn from(action: IncludeAction) -> Self {
        LaunchAction::Include(action)
    }
}
