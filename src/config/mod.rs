//! Configuration file handling for mule-app
//!
//! This module contains data structures for:
//! - `mule-app.yaml` - install configuration and resolved dependencies
//! - [`Properties`] - process-wide `key=value` settings
//! - [`InstallRequest`] - the immutable input of one install run

mod properties;
mod request;


pub use properties::{Properties, parse_definition};
pub use request::{InstallOverrides, InstallRequest};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::artifact::ResolvedDependency;
use crate::error::{Result, config};

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE: &str = "mule-app.yaml";

/// Contents of `mule-app.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstallConfig {
    /// Name of the installed archive, without extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_name: Option<String>,

    /// Path to the packaged application archive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<PathBuf>,

    /// Install the domain dependency into `<home>/domains`
    #[serde(default)]
    pub install_domain: bool,

    /// Domain coordinates as `groupId:artifactId:version`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_dependency: Option<String>,

    /// Install the archive into `<home>/apps`
    #[serde(default)]
    pub copy_to_apps_directory: bool,

    /// Compare checksums of the staged archive and its source
    #[serde(default)]
    pub verify_checksum: bool,

    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ResolvedDependency>,
}

impl InstallConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Self::parse(yaml)?)
    }

    fn parse(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a struct
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load configuration from `path`
    ///
    /// Relative `archive` and dependency `file` paths are resolved against
    /// the directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        let mut loaded = Self::parse(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;

        if let Some(base) = path.parent() {
            loaded.resolve_paths(base);
        }

        tracing::debug!(
            path = %path.display(),
            dependencies = loaded.dependencies.len(),
            "loaded install configuration"
        );

        Ok(loaded)
    }

    /// Load the explicit configuration file, or `mule-app.yaml` in `dir` if present
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILE);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        if let Some(archive) = self.archive.as_mut() {
            if archive.is_relative() {
                *archive = base.join(&*archive);
            }
        }
        for dependency in &mut self.dependencies {
            dependency.resolve_file_against(base);
        }
    }
}
