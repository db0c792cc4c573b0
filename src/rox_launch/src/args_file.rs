//! Launch argument file loading

use crate::{
    condition::canonical_bool,
    error::{LaunchError, Result},
};
use serde_yaml::Value;
use std::{collections::HashMap, fs, path::Path};

/// Load launch arguments from a YAML mapping of `name: value`.
///
/// Scalars are converted to the strings a launch argument would receive on
/// the command line; booleans become `True`/`False` and null becomes empty.
pub fn load_args_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    parse_args_yaml(&content).map_err(|message| LaunchError::ArgsFile {
        file: path.display().to_string(),
        message,
    })
}

fn parse_args_yaml(content: &str) -> std::result::Result<HashMap<String, String>, String> {
    let yaml: Value =
        serde_yaml::from_str(content).map_err(|e| format!("YAML parse error: {}", e))?;

    let map = match yaml {
        Value::Mapping(map) => map,
        Value::Null => return Ok(HashMap::new()),
        _ => return Err("expected a mapping of argument names to values".to_string()),
    };

    let mut args = HashMap::new();
    for (key, value) in map {
        let name = match key {
            Value::String(s) => s,
            other => return Err(format!("argument name must be a string, got {:?}", other)),
        };
        let value = yaml_scalar_to_string(&value)
            .ok_or_else(|| format!("argument '{}' must be a scalar value", name))?;
        args.insert(name, value);
    }

    Ok(args)
}

fn yaml_scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(canonical_bool(*b).to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Merge argument sources; later sources override earlier ones
pub fn merge_args<I>(sources: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = HashMap<String, String>>,
{
    let mut merged = HashMap::new();
    for source in sources {
        merged.extend(source);
    }
    merged
}
