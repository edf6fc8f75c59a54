//! Artifact coordinates and resolved dependencies
//!
//! Coordinates are written `groupId:artifactId:version`. Resolved
//! dependencies are supplied by the surrounding build and looked up here by
//! their full coordinates.

mod dependency;

pub use dependency::{DependencySet, ResolvedDependency};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MuleError, config};

/// Identity of a build artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ArtifactCoordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl FromStr for ArtifactCoordinates {
    type Err = MuleError;

    /// Parse `groupId:artifactId:version`; exactly three non-empty parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').map(str::trim).collect();

        match parts.as_slice() {
            [group_id, artifact_id, version]
                if !group_id.is_empty() && !artifact_id.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(*group_id, *artifact_id, *version))
            }
            _ => Err(config::malformed_coordinates(s)),
        }
    }
}

impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
