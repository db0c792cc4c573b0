//! Include action implementation

use crate::condition::Condition;
use std::path::PathBuf;

/// Include action representing a nested launch file
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeAction {
    pub file: PathBuf,
    pub condition: Option<Condition>,
}

impl IncludeAction {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            condition: None,
        }
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// File name of the included launch file
    pub fn file_name(&self) -> String {
        self.file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
