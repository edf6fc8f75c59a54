//! Inspecting packaged application archives
//!
//! Lists the entries of a zip archive and checks that expected entries are
//! present and excluded ones are not.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, archive};

/// Entry names of a zip archive
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveContents {
    pub path: PathBuf,
    pub entries: BTreeSet<String>,
}

/// Entries that must, or must not, be in an archive
#[derive(Debug, Clone, Default)]
pub struct ArchiveExpectations {
    pub present: Vec<String>,
    pub absent: Vec<String>,
}

impl ArchiveContents {
    /// Read the entry names of the archive at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| archive::read_failed(path, e))?;
        let zip = zip::ZipArchive::new(BufReader::new(file))
            .map_err(|e| archive::read_failed(path, e))?;

        let entries = zip.file_names().map(str::to_string).collect();

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry.trim_start_matches('/'))
    }

    /// Fail on the first expectation that does not hold
    pub fn check(&self, expectations: &ArchiveExpectations) -> Result<()> {
        if let Some(missing) = expectations.present.iter().find(|e| !self.contains(e)) {
            return Err(archive::entry_missing(&self.path, missing.as_str()));
        }
        if let Some(unexpected) = expectations.absent.iter().find(|e| self.contains(e)) {
            return Err(archive::entry_unexpected(&self.path, unexpected.as_str()));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
