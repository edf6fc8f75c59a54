//! File system errors

use std::path::Path;

use super::MuleError;

/// Creates a copy failed error for the given install stage
pub fn copy_failed(
    stage: impl Into<String>,
    source: &Path,
    destination: &Path,
    err: impl ToString,
) -> MuleError {
    MuleError::CopyFailed {
        stage: stage.into(),
        source_path: source.display().to_string(),
        destination: destination.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a rename failed error naming both paths
pub fn rename_failed(from: &Path, to: &Path, err: impl ToString) -> MuleError {
    MuleError::RenameFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn read_failed(path: &Path, err: impl ToString) -> MuleError {
    MuleError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn write_failed(path: &Path, err: impl ToString) -> MuleError {
    MuleError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn checksum_mismatch(
    path: &Path,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> MuleError {
    MuleError::ChecksumMismatch {
        path: path.display().to_string(),
        expected: expected.into(),
        actual: actual.into(),
    }
}
