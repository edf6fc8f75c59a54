//! The input of a single install run

use std::path::PathBuf;

use super::{InstallConfig, Properties};
use crate::artifact::{DependencySet, ResolvedDependency};
use crate::error::{Result, config};

/// Placeholder older configurations use for an unset domain dependency
const LEGACY_UNSET_PLACEHOLDER: &str = "empty";

/// Values given on the command line, applied over `mule-app.yaml`
#[derive(Debug, Clone, Default)]
pub struct InstallOverrides {
    pub final_name: Option<String>,
    pub archive: Option<PathBuf>,
    pub install_domain: bool,
    pub domain_dependency: Option<String>,
    pub copy_to_apps_directory: bool,
    pub verify_checksum: bool,
    pub dependencies: Vec<ResolvedDependency>,
    pub properties: Properties,
}

impl InstallConfig {
    /// Apply command line values; flags can only switch options on
    pub fn apply(&mut self, overrides: InstallOverrides) {
        if overrides.final_name.is_some() {
            self.final_name = overrides.final_name;
        }
        if overrides.archive.is_some() {
            self.archive = overrides.archive;
        }
        if overrides.domain_dependency.is_some() {
            self.domain_dependency = overrides.domain_dependency;
        }
        self.install_domain |= overrides.install_domain;
        self.copy_to_apps_directory |= overrides.copy_to_apps_directory;
        self.verify_checksum |= overrides.verify_checksum;
        self.dependencies.extend(overrides.dependencies);
        self.properties.merge(overrides.properties);
    }
}

/// Everything one install run needs; built once and never modified
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub install_domain: bool,
    pub copy_to_apps_directory: bool,
    /// Raw domain coordinates; `None` when not configured
    pub domain_dependency: Option<String>,
    pub final_name: Option<String>,
    pub archive: Option<PathBuf>,
    pub dependencies: DependencySet,
    pub verify_checksum: bool,
}

impl InstallRequest {
    /// Build the request from merged configuration
    ///
    /// Blank domain coordinates (and the legacy `empty` placeholder) become
    /// `None`. Coordinates are not parsed here; that happens when the domain
    /// is installed.
    pub fn from_config(config: InstallConfig) -> Result<Self> {
        let request = Self {
            install_domain: config.install_domain,
            copy_to_apps_directory: config.copy_to_apps_directory,
            domain_dependency: normalize_domain_dependency(config.domain_dependency),
            final_name: config.final_name.map(|name| name.trim().to_string()),
            archive: config.archive,
            dependencies: config.dependencies.into_iter().collect(),
            verify_checksum: config.verify_checksum,
        };

        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<()> {
        if !self.copy_to_apps_directory {
            return Ok(());
        }

        match self.final_name.as_deref() {
            None | Some("") => {
                return Err(config::invalid(
                    "finalName is required when copyToAppsDirectory is set",
                ));
            }
            Some(name) if name.contains(['/', '\\']) => {
                return Err(config::invalid(format!(
                    "finalName '{name}' must be a file name, not a path"
                )));
            }
            Some(_) => {}
        }

        if self.archive.is_none() {
            return Err(config::invalid(
                "archive is required when copyToAppsDirectory is set",
            ));
        }

        Ok(())
    }

    /// `<finalName>.zip`, for messages
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.final_name.as_deref().unwrap_or_default())
    }
}

fn normalize_domain_dependency(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && value != LEGACY_UNSET_PLACEHOLDER)
}
