//! Installing the application archive into `<home>/apps`
//!
//! The archive is copied to `<finalName>.temp` and then renamed to
//! `<finalName>.zip`, so the final name never refers to a partial file.

use std::path::{Path, PathBuf};

use crate::error::{Result, config};
use crate::hash;
use crate::progress::CopyProgress;
use crate::runtime::{DeployableKind, RuntimeHome};

use super::staging::StagedFile;

const STAGE: &str = "application";

/// Staging and final paths of an archive inside the apps directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTargets {
    pub staged: PathBuf,
    pub published: PathBuf,
}

impl ArchiveTargets {
    pub fn new(apps_dir: &Path, final_name: &str) -> Self {
        Self {
            staged: apps_dir.join(format!("{final_name}.temp")),
            published: apps_dir.join(format!("{final_name}.zip")),
        }
    }
}

/// Copy `archive` into the apps directory as `<final_name>.zip`
pub fn install(
    archive: Option<&Path>,
    final_name: Option<&str>,
    verify_checksum: bool,
    home: &RuntimeHome,
    progress: &CopyProgress,
) -> Result<PathBuf> {
    let archive = archive.ok_or_else(|| config::invalid("no application archive configured"))?;
    let final_name = final_name.ok_or_else(|| config::invalid("no finalName configured"))?;

    let apps_dir = home.ensure_deploy_dir(DeployableKind::Application)?;
    let targets = ArchiveTargets::new(&apps_dir, final_name);

    tracing::info!(
        source = %archive.display(),
        destination = %targets.staged.display(),
        "Copying application archive"
    );

    let staged = StagedFile::copy_from(archive, &targets.staged, STAGE, progress)?;

    if verify_checksum {
        hash::verify_copy(archive, staged.path())?;
    }

    tracing::info!(
        source = %targets.staged.display(),
        destination = %targets.published.display(),
        "Renaming staged archive"
    );

    staged.publish(&targets.published)?;
    Ok(targets.published)
}
