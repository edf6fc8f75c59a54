//! Installing the domain dependency into `<home>/domains`

use std::path::PathBuf;

use crate::artifact::{ArtifactCoordinates, DependencySet};
use crate::error::{MuleError, Result, config, deps};
use crate::progress::CopyProgress;
use crate::runtime::{DeployableKind, RuntimeHome};

use super::staging::StagedFile;

const STAGE: &str = "domain";

/// Copy the dependency named by `domain_dependency` into the domains directory
///
/// The artifact keeps its own file name. It is staged next to its target
/// and renamed into place, so a failed copy leaves an installed domain of
/// the same name untouched. Nothing is written unless the coordinates parse
/// and match a resolved dependency.
pub fn install(
    domain_dependency: Option<&str>,
    dependencies: &DependencySet,
    home: &RuntimeHome,
    progress: &CopyProgress,
) -> Result<PathBuf> {
    let raw = domain_dependency.ok_or(MuleError::DomainDependencyUnset)?;
    let coordinates: ArtifactCoordinates = raw.parse()?;

    let dependency = dependencies
        .find(&coordinates)
        .ok_or_else(|| deps::domain_not_declared(&coordinates))?;

    if !dependency.is_zip() {
        tracing::warn!(
            coordinates = %coordinates,
            artifact_type = dependency.artifact_type.as_deref().unwrap_or_default(),
            "domain dependency is not packaged as zip"
        );
    }

    let file_name = dependency.file_name().ok_or_else(|| {
        config::invalid(format!(
            "dependency {coordinates} points to {} which has no file name",
            dependency.file.display()
        ))
    })?;

    let domains_dir = home.ensure_deploy_dir(DeployableKind::Domain)?;
    let target = domains_dir.join(file_name);
    let mut staged_name = file_name.to_os_string();
    staged_name.push(".temp");

    tracing::info!(
        source = %dependency.file.display(),
        destination = %target.display(),
        "Installing domain {coordinates}"
    );

    let staged = StagedFile::copy_from(
        &dependency.file,
        domains_dir.join(staged_name),
        STAGE,
        progress,
    )?;
    staged.publish(&target)?;

    Ok(target)
}
