//! Write-then-rename publishing
//!
//! A [`StagedFile`] is written under a temporary name next to its final
//! location and only becomes visible under the final name through a single
//! rename. If it is dropped before [`StagedFile::publish`] succeeds, the
//! temporary file is removed.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};
use crate::progress::CopyProgress;

use super::file_ops;

/// A file being written under a temporary name
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    file: Option<File>,
    published: bool,
}

impl StagedFile {
    /// Create (or truncate) the staging file at `path`
    ///
    /// A file left at `path` by an earlier, interrupted run is overwritten.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if path.exists() {
            tracing::warn!(
                path = %path.display(),
                "overwriting staged file left by an earlier run"
            );
        }

        let file = File::create(&path).map_err(|e| fs_error::write_failed(&path, e))?;

        Ok(Self {
            path,
            file: Some(file),
            published: false,
        })
    }

    /// Stream `source` into a new staging file at `path`
    ///
    /// The source is opened first, so an unreadable source leaves no staging
    /// file behind. Failures are reported as copy failures of `stage`.
    pub fn copy_from(
        source: &Path,
        path: impl Into<PathBuf>,
        stage: &str,
        progress: &CopyProgress,
    ) -> Result<Self> {
        let path = path.into();
        let (mut input, len) = file_ops::open_source(source)
            .map_err(|e| fs_error::copy_failed(stage, source, &path, e))?;

        let mut staged = Self::create(path)?;

        progress.start(&file_ops::display_name(source), len);
        if let Err(e) = staged.write_from(&mut input, progress) {
            progress.abandon();
            return Err(fs_error::copy_failed(stage, source, &staged.path, e));
        }
        progress.finish();

        staged.close();
        Ok(staged)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stream `reader` into the staging file
    pub fn write_from<R: Read>(&mut self, reader: &mut R, progress: &CopyProgress) -> io::Result<u64> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::other("staged file already closed"))?;

        let copied = file_ops::copy_stream(reader, file, progress)?;
        file.sync_all()?;
        Ok(copied)
    }

    /// Close the staging file so its content can be read back
    pub fn close(&mut self) {
        self.file.take();
    }

    /// Atomically rename the staging file to `target`
    ///
    /// A failed rename is reported as is; there is no copy-and-delete
    /// fallback.
    pub fn publish(mut self, target: &Path) -> Result<()> {
        self.close();

        fs::rename(&self.path, target).map_err(|e| fs_error::rename_failed(&self.path, target, e))?;

        self.published = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.published {
            return;
        }

        self.file.take();
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to remove staged file"
                );
            }
        }
    }
}
