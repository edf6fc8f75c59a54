//! Installation of a packaged Mule application into a runtime home
//!
//! An install run goes through three stages, strictly in order:
//! 1. Resolve and validate the runtime home
//! 2. Install the domain dependency into `domains/` (when requested)
//! 3. Install the application archive into `apps/`
//!
//! Nothing runs unless `copyToAppsDirectory` is set; `installDomain` only
//! adds stage 2 to such a run. The first failing stage ends the run and
//! nothing after it is attempted. A home that is not configured at all is
//! not a failure: the run is skipped with a warning.
//!
//! Concurrent installs into the same home from several processes are not
//! coordinated.

pub mod archive;
pub mod domain;
pub mod file_ops;
pub mod staging;


use std::path::PathBuf;

use crate::config::InstallRequest;
use crate::error::Result;
use crate::progress::CopyProgress;
use crate::runtime::{HOME_VARIABLE, HomeLocator, RuntimeHome};

/// States an install run passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    TargetResolved,
    DomainInstalled,
    DomainSkipped,
    ArchiveInstalled,
    Done,
}

/// Why a run did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `copyToAppsDirectory` is off
    NothingRequested,
    /// No runtime home is configured
    HomeNotConfigured,
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Runtime home the run installed into
    pub home: PathBuf,
    /// Installed domain file, if any
    pub domain: Option<PathBuf>,
    /// Installed application archive
    pub archive: PathBuf,
    /// States visited, in order
    pub states: Vec<InstallState>,
}

fn enter(states: &mut Vec<InstallState>, state: InstallState) {
    tracing::debug!(?state, "install state");
    states.push(state);
}

/// Result of a run that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Skipped(SkipReason),
    Completed(InstallReport),
}

/// Runs the install stages for one request
pub struct Installer<'a> {
    request: &'a InstallRequest,
    locator: &'a dyn HomeLocator,
    progress: CopyProgress,
}

impl<'a> Installer<'a> {
    pub fn new(request: &'a InstallRequest, locator: &'a dyn HomeLocator) -> Self {
        Self {
            request,
            locator,
            progress: CopyProgress::hidden(),
        }
    }

    /// Report copy progress through `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: CopyProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Run all requested stages
    pub fn run(&self) -> Result<InstallOutcome> {
        let request = self.request;

        if !request.copy_to_apps_directory {
            tracing::info!("copyToAppsDirectory is not set, nothing to install");
            return Ok(InstallOutcome::Skipped(SkipReason::NothingRequested));
        }

        let Some(home) = RuntimeHome::resolve(self.locator)? else {
            tracing::warn!(
                "{HOME_VARIABLE} is not set, not copying {}",
                request.archive_file_name()
            );
            return Ok(InstallOutcome::Skipped(SkipReason::HomeNotConfigured));
        };

        tracing::debug!(home = %home.path().display(), "runtime home resolved");
        let mut states = vec![InstallState::TargetResolved];

        let domain = if request.install_domain {
            let installed = domain::install(
                request.domain_dependency.as_deref(),
                &request.dependencies,
                &home,
                &self.progress,
            )?;
            enter(&mut states, InstallState::DomainInstalled);
            Some(installed)
        } else {
            enter(&mut states, InstallState::DomainSkipped);
            None
        };

        let archive = archive::install(
            request.archive.as_deref(),
            request.final_name.as_deref(),
            request.verify_checksum,
            &home,
            &self.progress,
        )?;
        enter(&mut states, InstallState::ArchiveInstalled);
        enter(&mut states, InstallState::Done);

        Ok(InstallOutcome::Completed(InstallReport {
            home: home.path().to_path_buf(),
            domain,
            archive,
            states,
        }))
    }
}
