//! Error types for rox_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Argument '{argument}' has invalid value '{value}'; valid choices are: {}", format_choices(.choices))]
    InvalidChoice {
        argument: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("Required argument '{0}' was not provided and has no default")]
    MissingArgument(String),

    #[error("Argument '{argument}' expects a boolean (true/false), got '{value}'")]
    InvalidBoolean { argument: String, value: String },

    #[error("Invalid launch argument format: '{0}' (expected name:=value)")]
    InvalidArgumentFormat(String),

    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Rendered robot description is invalid: {0}")]
    InvalidDescription(String),

    #[error("Failed to read argument file {file}: {message}")]
    ArgsFile { file: String, message: String },

    #[error("Record generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Directive '{0}' has an empty command")]
    EmptyCommand(String),
}

fn format_choices(choices: &[String]) -> String {
    choices
        .iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LaunchError>;
