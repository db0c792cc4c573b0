//! ROS 2 package share directory lookup

use crate::error::{LaunchError, Result};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

const KNOWN_DISTROS: &[&str] = &["jazzy", "iron", "humble", "galactic", "foxy"];

/// Resolves a package name to its installed share directory
pub trait PackageLocator {
    fn share_directory(&self, package: &str) -> Option<PathBuf>;

    /// Like `share_directory`, failing with `PackageNotFound`
    fn require_share(&self, package: &str) -> Result<PathBuf> {
        self.share_directory(package)
            .ok_or_else(|| LaunchError::PackageNotFound(package.to_string()))
    }

    /// Install prefix of the package (parent of `share/<package>`)
    fn prefix(&self, package: &str) -> Option<PathBuf> {
        let share = self.share_directory(package)?;
        share.parent()?.parent().map(Path::to_path_buf)
    }
}

impl<L: PackageLocator + ?Sized> PackageLocator for &L {
    fn share_directory(&self, package: &str) -> Option<PathBuf> {
        (**self).share_directory(package)
    }
}

/// Lookup through the ament index environment
#[derive(Debug, Clone, Default)]
pub struct AmentIndex {
    prefixes: Vec<PathBuf>,
}

impl AmentIndex {
    /// Build the search list from `AMENT_PREFIX_PATH`, `ROS_DISTRO` and the
    /// well-known distribution prefixes, in that order
    pub fn from_env() -> Self {
        let mut prefixes = Vec::new();

        if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
            prefixes.extend(
                prefix_path
                    .split(':')
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from),
            );
        }

        if let Ok(distro) = std::env::var("ROS_DISTRO") {
            prefixes.push(PathBuf::from(format!("/opt/ros/{}", distro)));
        }

        for distro in KNOWN_DISTROS {
            let prefix = PathBuf::from(format!("/opt/ros/{}", distro));
            if !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }

        log::debug!("Package search prefixes: {:?}", prefixes);
        Self { prefixes }
    }

    pub fn with_prefixes(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }
}

impl PackageLocator for AmentIndex {
    fn share_directory(&self, package: &str) -> Option<PathBuf> {
        self.prefixes
            .iter()
            .map(|prefix| prefix.join("share").join(package))
            .find(|share| share.is_dir())
    }
}

/// Explicit package to share-directory mapping, consulted before a fallback
#[derive(Debug, Clone, Default)]
pub struct StaticLocator<F = AmentIndex> {
    shares: HashMap<String, PathBuf>,
    fallback: Option<F>,
}

impl StaticLocator<AmentIndex> {
    pub fn new() -> Self {
        Self {
            shares: HashMap::new(),
            fallback: None,
        }
    }
}

impl<F: PackageLocator> StaticLocator<F> {
    pub fn with_fallback(fallback: F) -> Self {
        Self {
            shares: HashMap::new(),
            fallback: Some(fallback),
        }
    }

    pub fn insert(&mut self, package: impl Into<String>, share: impl Into<PathBuf>) {
        self.shares.insert(package.into(), share.into());
    }

    pub fn share(mut self, package: impl Into<String>, share: impl Into<PathBuf>) -> Self {
        self.insert(package, share);
        self
    }
}

impl<F: PackageLocator> PackageLocator for StaticLocator<F> {
    fn share_directory(&self, package: &str) -> Option<PathBuf> {
        self.shares.get(package).cloned().or_else(|| {
            self.fallback
                .as_ref()
                .and_then(|f| f.share_directory(package))
        })
    }
}

/// Parse a `package=path` share override
pub fn parse_share_override(s: &str) -> std::result::Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((package, path)) if !package.is_empty() && !path.is_empty() => {
            Ok((package.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!(
            "Invalid share directory override '{}' (expected package=path)",
            s
        )),
    }
}
