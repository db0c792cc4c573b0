//! Declare argument action for argument metadata and validation

use crate::error::{LaunchError, Result};
use serde::Serialize;

/// Declared launch argument with metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclareArgument {
    pub name: String,
    pub default: Option<String>,
    pub description: Option<String>,
    pub choices: Option<Vec<String>>,
}

impl DeclareArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            description: None,
            choices: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Check a raw value against the declared choices, if any
    pub fn validate(&self, value: &str) -> Result<()> {
        match &self.choices {
            Some(choices) if !choices.iter().any(|c| c == value) => {
                Err(LaunchError::InvalidChoice {
                    argument: self.name.clone(),
                    value: value.to_string(),
                    choices: choices.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}
