//! Error types and handling for mule-app
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`deps`]: Dependency resolution errors
//! - [`home`]: Runtime home validation errors
//! - [`fs`]: File system errors
//! - [`archive`]: Archive inspection errors

pub mod archive;
pub mod config;
pub mod deps;
pub mod fs;
pub mod home;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Broad failure categories of an install run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed configuration
    Configuration,
    /// A declared coordinate has no matching resolved dependency
    UnresolvedDependency,
    /// The runtime home is missing or not writable
    HomeValidation,
    /// Copy, rename or read failure
    Io,
}

/// Main error type for mule-app operations
#[derive(Error, Diagnostic, Debug)]
pub enum MuleError {
    // Configuration errors
    #[error("installDomain is set but no domainDependency was configured")]
    #[diagnostic(
        code(mule::config::domain_dependency_unset),
        help(
            "Configure domainDependency as groupId:artifactId:version so the domain can be installed in the Mule server"
        )
    )]
    DomainDependencyUnset,

    #[error("Malformed dependency coordinates '{input}': expected groupId:artifactId:version")]
    #[diagnostic(code(mule::config::malformed_coordinates))]
    MalformedCoordinates { input: String },

    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(mule::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(mule::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(mule::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(mule::config::invalid))]
    ConfigInvalid { message: String },

    // Dependency errors
    #[error(
        "installDomain was configured but domain dependency {coordinates} is not available in the project"
    )]
    #[diagnostic(
        code(mule::deps::domain_not_declared),
        help("Did you forget to add the domain as a dependency with type zip?")
    )]
    DomainNotDeclared { coordinates: String },

    // Runtime home errors
    #[error("{variable} is set to {path} but this directory does not exist")]
    #[diagnostic(code(mule::home::not_found))]
    HomeNotFound { variable: String, path: String },

    #[error("{variable} is set to {path} but it is not a directory")]
    #[diagnostic(code(mule::home::not_a_directory))]
    HomeNotDirectory { variable: String, path: String },

    #[error("{variable} is set to {path} but the directory is not writeable")]
    #[diagnostic(code(mule::home::not_writable))]
    HomeNotWritable { variable: String, path: String },

    // File system errors
    #[error("Failed to copy {source_path} to {destination} while installing {stage}: {reason}")]
    #[diagnostic(code(mule::fs::copy_failed))]
    CopyFailed {
        stage: String,
        source_path: String,
        destination: String,
        reason: String,
    },

    #[error("Could not rename {from} to {to}: {reason}")]
    #[diagnostic(
        code(mule::fs::rename_failed),
        help("The staged file and its final name must be on the same file system")
    )]
    RenameFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(mule::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mule::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Checksum mismatch for {path}: expected {expected}, got {actual}")]
    #[diagnostic(code(mule::fs::checksum_mismatch))]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(mule::fs::io_error))]
    IoError { message: String },

    // Archive errors
    #[error("Failed to read archive {path}: {reason}")]
    #[diagnostic(code(mule::archive::read_failed))]
    ArchiveReadFailed { path: String, reason: String },

    #[error("Archive {archive} does not contain {entry}")]
    #[diagnostic(code(mule::archive::entry_missing))]
    ArchiveEntryMissing { archive: String, entry: String },

    #[error("Archive {archive} should not contain {entry}")]
    #[diagnostic(code(mule::archive::entry_unexpected))]
    ArchiveEntryUnexpected { archive: String, entry: String },
}

impl MuleError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MuleError::DomainDependencyUnset
            | MuleError::MalformedCoordinates { .. }
            | MuleError::ConfigNotFound { .. }
            | MuleError::ConfigReadFailed { .. }
            | MuleError::ConfigParseFailed { .. }
            | MuleError::ConfigInvalid { .. } => ErrorKind::Configuration,
            MuleError::DomainNotDeclared { .. } => ErrorKind::UnresolvedDependency,
            MuleError::HomeNotFound { .. }
            | MuleError::HomeNotDirectory { .. }
            | MuleError::HomeNotWritable { .. } => ErrorKind::HomeValidation,
            MuleError::CopyFailed { .. }
            | MuleError::RenameFailed { .. }
            | MuleError::FileReadFailed { .. }
            | MuleError::FileWriteFailed { .. }
            | MuleError::ChecksumMismatch { .. }
            | MuleError::IoError { .. }
            | MuleError::ArchiveReadFailed { .. }
            | MuleError::ArchiveEntryMissing { .. }
            | MuleError::ArchiveEntryUnexpected { .. } => ErrorKind::Io,
        }
    }
}

impl From<std::io::Error> for MuleError {
    fn from(err: std::io::Error) -> Self {
        MuleError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MuleError {
    fn from(err: serde_yaml::Error) -> Self {
        MuleError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MuleError {
    fn from(err: serde_json::Error) -> Self {
        MuleError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for MuleError {
    fn from(err: zip::result::ZipError) -> Self {
        MuleError::ArchiveReadFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MuleError>;
