//! Condition evaluation for conditionally included actions

use serde::{Deserialize, Serialize};

/// Inclusion gate attached to a launch action.
///
/// Values are resolved booleans, so the gate is decided once at resolution
/// time instead of re-parsing strings when the host evaluates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Include the action when the value is true
    If(bool),
    /// Include the action when the value is false
    Unless(bool),
}

impl Condition {
    pub fn is_satisfied(&self) -> bool {
        match *self {
            Condition::If(value) => value,
            Condition::Unless(value) => !value,
        }
    }
}

/// Parse a launch boolean.
///
/// Accepts `true`/`false`/`1`/`0` in any letter case. Anything else,
/// including values with surrounding whitespace, is rejected.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Canonical string form used when a boolean is passed to description templating
pub fn canonical_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
