//! Archive inspection errors

use std::path::Path;

use super::MuleError;

pub fn read_failed(path: &Path, err: impl ToString) -> MuleError {
    MuleError::ArchiveReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn entry_missing(archive: &Path, entry: impl Into<String>) -> MuleError {
    MuleError::ArchiveEntryMissing {
        archive: archive.display().to_string(),
        entry: entry.into(),
    }
}

pub fn entry_unexpected(archive: &Path, entry: impl Into<String>) -> MuleError {
    MuleError::ArchiveEntryUnexpected {
        archive: archive.display().to_string(),
        entry: entry.into(),
    }
}
