//! Locating and validating the runtime home
//!
//! The home is looked up through a [`HomeLocator`] so that callers (and
//! tests) decide where the value comes from. The default locator reads the
//! `MULE_HOME` environment variable and falls back to the `mule.home`
//! property.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::{DeployableKind, HOME_PROPERTY, HOME_VARIABLE};
use crate::config::Properties;
use crate::error::{Result, fs as fs_error, home};

/// Source of the configured runtime home path
pub trait HomeLocator {
    /// The configured home, or `None` when nothing is configured
    fn locate(&self) -> Option<PathBuf>;
}

type EnvLookup = fn(&str) -> Option<OsString>;

/// Reads `MULE_HOME`, falling back to the `mule.home` property
pub struct EnvironmentLocator {
    env: EnvLookup,
    properties: Properties,
}

impl EnvironmentLocator {
    pub fn new(properties: Properties) -> Self {
        Self::with_env(|key| std::env::var_os(key), properties)
    }

    /// Use a custom environment lookup instead of the process environment
    pub fn with_env(env: EnvLookup, properties: Properties) -> Self {
        Self { env, properties }
    }
}

impl HomeLocator for EnvironmentLocator {
    fn locate(&self) -> Option<PathBuf> {
        (self.env)(HOME_VARIABLE)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                self.properties
                    .get(HOME_PROPERTY)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
    }
}

/// Always yields the same home; `None` means not configured
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct FixedLocator(pub Option<PathBuf>);

#[allow(dead_code)]
impl FixedLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(Some(path.into()))
    }

    pub fn unset() -> Self {
        Self(None)
    }
}

impl HomeLocator for FixedLocator {
    fn locate(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// A validated runtime home directory
///
/// Never created or removed here; only its deployment subdirectories are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeHome {
    path: PathBuf,
}

impl RuntimeHome {
    /// Locate and validate the runtime home
    ///
    /// Returns `Ok(None)` when no home is configured at all. A configured
    /// home must exist, be a directory and be writable.
    pub fn resolve(locator: &dyn HomeLocator) -> Result<Option<Self>> {
        let Some(path) = locator.locate() else {
            return Ok(None);
        };

        Self::validate(&path)?;
        Ok(Some(Self { path }))
    }

    fn validate(path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|_| home::not_found(path))?;

        if !metadata.is_dir() {
            return Err(home::not_a_directory(path));
        }
        // Writable means this user can create a file here, whatever the mode bits say
        tempfile::tempfile_in(path).map_err(|_| home::not_writable(path))?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deployment directory for `kind`, e.g. `<home>/apps`
    pub fn deploy_dir(&self, kind: DeployableKind) -> PathBuf {
        self.path.join(kind.directory_name())
    }

    /// Like [`deploy_dir`](Self::deploy_dir) but creates the directory if missing
    pub fn ensure_deploy_dir(&self, kind: DeployableKind) -> Result<PathBuf> {
        let dir = self.deploy_dir(kind);
        fs::create_dir_all(&dir).map_err(|e| fs_error::write_failed(&dir, e))?;
        Ok(dir)
    }
}
