//! rox_launch library
//!
//! Resolves the launch arguments of the ROX simulation bring-up into an
//! ordered list of process-start directives for a launch host.

pub mod actions;
pub mod args_file;
pub mod condition;
pub mod config;
pub mod context;
pub mod description;
pub mod error;
pub mod package;
pub mod record;
pub mod resolver;

use error::{LaunchError, Result};
use package::PackageLocator;
use record::{CommandGenerator, LaunchRecord};
use resolver::LaunchResolver;
use std::collections::HashMap;

pub use resolver::LaunchDescription;

/// Options controlling record generation
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Run the description templating command instead of deferring it
    pub render_description: bool,
    /// Record directives whose condition does not hold
    pub include_inactive: bool,
}

/// Resolve launch arguments and generate the directive record
pub fn resolve_launch<L: PackageLocator>(
    args: &HashMap<String, String>,
    locator: &L,
    options: ResolveOptions,
) -> Result<LaunchRecord> {
    let description = LaunchResolver::new(locator)
        .render_description(options.render_description)
        .resolve(args)?;
    let record = CommandGenerator::new(locator)
        .generate_record(&description, options.include_inactive)?;
    Ok(record)
}

/// Parse a `name:=value` launch argument
pub fn parse_launch_arg(s: &str) -> Result<(String, String)> {
    match s.split_once(":=") {
        Some((name, value)) if !name.is_empty() && !value.contains(":=") => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(LaunchError::InvalidArgumentFormat(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::StaticLocator;
    use crate::record::DirectiveKind;

    fn locator() -> StaticLocator {
        StaticLocator::new()
            .share("rox_description", "/ws/install/rox_description/share/rox_description")
            .share("rox_rviz", "/ws/install/rox_rviz/share/rox_rviz")
    }

    #[test]
    fn test_parse_launch_arg() {
        assert_eq!(
            parse_launch_arg("rox_type:=diff").unwrap(),
            ("rox_type".to_string(), "diff".to_string())
        );
        assert_eq!(
            parse_launch_arg("arm_type:=").unwrap(),
            ("arm_type".to_string(), String::new())
        );
        assert!(parse_launch_arg("rox_type=diff").is_err());
        assert!(parse_launch_arg(":=diff").is_err());
        assert!(parse_launch_arg("a:=b:=c").is_err());
    }

    #[test]
    fn test_resolve_default_record() {
        let record = resolve_launch(&HashMap::new(), &locator(), ResolveOptions::default())
            .unwrap();
        let kinds: Vec<DirectiveKind> = record.directives.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DirectiveKind::Process,
                DirectiveKind::Node,
                DirectiveKind::Include,
                DirectiveKind::Node
            ]
        );
    }

    #[test]
    fn test_inactive_directives_only_on_request() {
        let args: HashMap<String, String> = [
            ("use_rviz".to_string(), "false".to_string()),
            ("arm_type".to_string(), "ur10".to_string()),
        ]
        .into();

        let record = resolve_launch(&args, &locator(), ResolveOptions::default()).unwrap();
        assert_eq!(record.directives.len(), 4);
        assert!(record.directives.iter().all(|d| d.active));

        let options = ResolveOptions {
            include_inactive: true,
            ..Default::default()
        };
        let record = resolve_launch(&args, &locator(), options).unwrap();
        assert_eq!(record.directives.len(), 6);
        assert_eq!(record.active_directives().count(), 4);
    }
}
