//! Resolved dependencies handed over by the build

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ArtifactCoordinates;

/// A build artifact whose coordinates and file on disk are already known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    #[serde(flatten)]
    pub coordinates: ArtifactCoordinates,

    /// Path to the artifact's binary
    pub file: PathBuf,

    /// Declared packaging type (e.g. `zip`, `jar`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
}

impl ResolvedDependency {
    pub fn new(coordinates: ArtifactCoordinates, file: impl Into<PathBuf>) -> Self {
        Self {
            coordinates,
            file: file.into(),
            artifact_type: None,
        }
    }

    /// Set the packaging type
    #[allow(dead_code)]
    #[must_use]
    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = Some(artifact_type.into());
        self
    }

    /// File name of the artifact, used as-is when installing it
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.file.file_name()
    }

    /// Whether the artifact is packaged as a zip (or carries no type at all)
    pub fn is_zip(&self) -> bool {
        self.artifact_type
            .as_deref()
            .is_none_or(|t| t.eq_ignore_ascii_case("zip"))
    }

    /// Resolve a relative file path against `base`
    pub fn resolve_file_against(&mut self, base: &Path) {
        if self.file.is_relative() {
            self.file = base.join(&self.file);
        }
    }
}

/// The dependencies resolved for one build, indexed by coordinates
///
/// Insertion order is kept. When the same coordinates appear more than once,
/// lookups return the first one inserted.
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    dependencies: Vec<ResolvedDependency>,
    index: HashMap<ArtifactCoordinates, usize>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency; returns `false` if its coordinates were already present
    pub fn insert(&mut self, dependency: ResolvedDependency) -> bool {
        let position = self.dependencies.len();
        let fresh = !self.index.contains_key(&dependency.coordinates);

        if fresh {
            self.index
                .insert(dependency.coordinates.clone(), position);
        } else {
            tracing::warn!(
                coordinates = %dependency.coordinates,
                file = %dependency.file.display(),
                "duplicate resolved dependency, the first declaration wins"
            );
        }

        self.dependencies.push(dependency);
        fresh
    }

    /// Look up a dependency by its full coordinates
    pub fn find(&self, coordinates: &ArtifactCoordinates) -> Option<&ResolvedDependency> {
        self.index
            .get(coordinates)
            .and_then(|&i| self.dependencies.get(i))
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl FromIterator<ResolvedDependency> for DependencySet {
    fn from_iter<I: IntoIterator<Item = ResolvedDependency>>(iter: I) -> Self {
        let mut set = Self::new();
        for dependency in iter {
            set.insert(dependency);
        }
        set
    }
}

impl Extend<ResolvedDependency> for DependencySet {
    fn extend<I: IntoIterator<Item = ResolvedDependency>>(&mut self, iter: I) {
        for dependency in iter {
            self.insert(dependency);
        }
    }
}
