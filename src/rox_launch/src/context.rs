//! Launch context holding resolved argument values
//!
//! A context is built once from the declared arguments and the raw values
//! supplied by the invoker. Every value is validated while the context is
//! built, so holding a `LaunchContext` means resolution already succeeded.

use crate::{
    actions::DeclareArgument,
    condition::parse_bool,
    error::{LaunchError, Result},
};
use std::collections::HashMap;

/// Launch context holding resolved configurations
#[derive(Debug, Clone)]
pub struct LaunchContext {
    declarations: Vec<DeclareArgument>,
    configurations: HashMap<String, String>,
}

impl LaunchContext {
    /// Resolve declared arguments against supplied raw values.
    ///
    /// Priority: 1) supplied value, 2) declared default. Values are checked
    /// against their declared choices. Supplied names that were never declared
    /// are ignored with a warning.
    pub fn resolve(
        declarations: Vec<DeclareArgument>,
        overrides: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut undeclared: Vec<&String> = overrides
            .keys()
            .filter(|name| !declarations.iter().any(|d| &d.name == *name))
            .collect();
        undeclared.sort();
        for name in undeclared {
            log::warn!("Ignoring undeclared launch argument '{}'", name);
        }

        let mut configurations = HashMap::new();
        for decl in &declarations {
            let value = overrides
                .get(&decl.name)
                .cloned()
                .or_else(|| decl.default.clone())
                .ok_or_else(|| LaunchError::MissingArgument(decl.name.clone()))?;

            decl.validate(&value)?;
            log::debug!("Resolved argument {} = '{}'", decl.name, value);
            configurations.insert(decl.name.clone(), value);
        }

        Ok(Self {
            declarations,
            configurations,
        })
    }

    pub fn declarations(&self) -> &[DeclareArgument] {
        &self.declarations
    }

    pub fn get_configuration(&self, name: &str) -> Option<&str> {
        self.configurations.get(name).map(String::as_str)
    }

    /// Fetch a resolved value, failing for names that hold no value
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get_configuration(name)
            .ok_or_else(|| LaunchError::MissingArgument(name.to_string()))
    }

    /// Fetch a resolved value as a native boolean
    pub fn require_bool(&self, name: &str) -> Result<bool> {
        let raw = self.require(name)?;
        parse_bool(raw).ok_or_else(|| LaunchError::InvalidBoolean {
            argument: name.to_string(),
            value: raw.to_string(),
        })
    }

    /// Resolved values in declaration order
    pub fn ordered_configurations(&self) -> Vec<(String, String)> {
        self.declarations
            .iter()
            .filter_map(|d| {
                self.configurations
                    .get(&d.name)
                    .map(|v| (d.name.clone(), v.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declarations() -> Vec<DeclareArgument> {
        vec![
            DeclareArgument::new("mode")
                .default_value("fast")
                .choices(["fast", "slow"]),
            DeclareArgument::new("enabled").default_value("False"),
        ]
    }

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_apply() {
        let context = LaunchContext::resolve(declarations(), &HashMap::new()).unwrap();
        assert_eq!(context.get_configuration("mode"), Some("fast"));
        assert_eq!(context.get_configuration("enabled"), Some("False"));
    }

    #[test]
    fn test_override_wins_over_default() {
        let context =
            LaunchContext::resolve(declarations(), &overrides(&[("mode", "slow")])).unwrap();
        assert_eq!(context.get_configuration("mode"), Some("slow"));
    }

    #[test]
    fn test_invalid_choice_rejected() {
        let err = LaunchContext::resolve(declarations(), &overrides(&[("mode", "medium")]))
            .unwrap_err();
        assert!(matches!(err, LaunchError::InvalidChoice { .. }));
    }

    #[test]
    fn test_missing_argument_without_default() {
        let decls = vec![DeclareArgument::new("required")];
        let err = LaunchContext::resolve(decls, &HashMap::new()).unwrap_err();
        assert!(matches!(err, LaunchError::MissingArgument(ref name) if name == "required"));
    }

    #[test]
    fn test_undeclared_override_is_ignored() {
        let context =
            LaunchContext::resolve(declarations(), &overrides(&[("unknown", "x")])).unwrap();
        assert!(context.get_configuration("unknown").is_none());
        assert!(matches!(
            context.require("unknown"),
            Err(LaunchError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_require_bool() {
        let context =
            LaunchContext::resolve(declarations(), &overrides(&[("enabled", "true")])).unwrap();
        assert!(context.require_bool("enabled").unwrap());

        let context =
            LaunchContext::resolve(declarations(), &overrides(&[("enabled", "maybe")])).unwrap();
        assert!(matches!(
            context.require_bool("enabled"),
            Err(LaunchError::InvalidBoolean { .. })
        ));
    }

    #[test]
    fn test_ordered_configurations_follow_declarations() {
        let context = LaunchContext::resolve(declarations(), &HashMap::new()).unwrap();
        let names: Vec<String> = context
            .ordered_configurations()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(names, vec!["mode", "enabled"]);
    }
}
