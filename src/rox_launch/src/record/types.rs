//! Launch record data structures

use crate::{actions::ParameterValue, condition::Condition};
use serde::Serialize;

/// Root structure written for the launch host
#[derive(Debug, Clone, Serialize)]
pub struct LaunchRecord {
    /// Resolved argument values in declaration order
    pub arguments: Vec<(String, String)>,
    pub directives: Vec<DirectiveRecord>,
}

impl LaunchRecord {
    pub fn new() -> Self {
        Self {
            arguments: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn active_directives(&self) -> impl Iterator<Item = &DirectiveRecord> {
        self.directives.iter().filter(|d| d.active)
    }
}

impl Default for LaunchRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveKind {
    Process,
    Node,
    Include,
}

/// A single process-start directive
#[derive(Debug, Clone, Serialize)]
pub struct DirectiveRecord {
    pub kind: DirectiveKind,
    pub name: String,
    pub package: Option<String>,
    pub program: String,
    pub args: Vec<String>,
    pub cmd: Vec<String>,
    pub parameters: Vec<(String, ParameterValue)>,
    pub output: Option<String>,
    pub condition: Option<Condition>,
    pub active: bool,
}

impl DirectiveRecord {
    /// Command rendered as a single shell line.
    ///
    /// Deferred command parameters are emitted as a live `"$(...)"`
    /// substitution, so the shell runs them before the program starts.
    pub fn shell_line(&self) -> String {
        self.cmd
            .iter()
            .map(|part| self.shell_word(part))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn shell_word(&self, part: &str) -> String {
        let deferred = self.parameters.iter().find_map(|(name, value)| match value {
            ParameterValue::Command(inner)
                if part == format!("{}:={}", name, value.to_arg_string()) =>
            {
                Some((name, inner))
            }
            _ => None,
        });

        match deferred {
            Some((name, inner)) => {
                let inner: Vec<String> = inner.iter().map(|p| shell_quote(p)).collect();
                format!(
                    "{}\"$({})\"",
                    shell_quote(&format!("{}:=", name)),
                    inner.join(" ")
                )
            }
            None => shell_quote(part),
        }
    }
}

fn shell_quote(part: &str) -> String {
    let safe = !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if safe {
        part.to_string()
    } else {
        format!("'{}'", part.replace('\'', r"'\''"))
    }
}
