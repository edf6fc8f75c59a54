//! Error type tests
//!
//! Tests for MuleError enum, its categories and conversions.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use miette::Diagnostic;

use super::{ErrorKind, MuleError};
use crate::error::{archive, config, deps, fs, home};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_code() {
    let err = deps::domain_not_declared("org.acme:mydomain:1.0");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("mule::deps::domain_not_declared".to_string())
    );
}

#[test]
fn test_domain_not_declared_has_help() {
    let err = deps::domain_not_declared("org.acme:mydomain:1.0");
    let help = err.help().map(|h| h.to_string()).unwrap();
    assert!(help.contains("type zip"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MuleError = io_err.into();
    assert!(matches!(err, MuleError::IoError { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: MuleError = parse_result.unwrap_err().into();
    assert!(matches!(err, MuleError::ConfigParseFailed { .. }));
}

#[test]
fn test_kinds() {
    assert_eq!(
        MuleError::DomainDependencyUnset.kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        config::malformed_coordinates("a:b").kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        deps::domain_not_declared("a:b:c").kind(),
        ErrorKind::UnresolvedDependency
    );
    assert_eq!(
        home::not_writable(Path::new("/srv/runtime")).kind(),
        ErrorKind::HomeValidation
    );
    assert_eq!(
        fs::rename_failed(Path::new("a.temp"), Path::new("a.zip"), "busy").kind(),
        ErrorKind::Io
    );
}

test_error_contains!(
    test_domain_dependency_unset,
    MuleError::DomainDependencyUnset,
    "domainDependency"
);

test_error_contains!(
    test_malformed_coordinates,
    config::malformed_coordinates("org.acme:mydomain"),
    "org.acme:mydomain",
    "groupId:artifactId:version"
);

test_error_contains!(
    test_home_not_found,
    home::not_found(Path::new("/missing/home")),
    "MULE_HOME",
    "/missing/home",
    "does not exist"
);

test_error_contains!(
    test_home_not_writable,
    home::not_writable(Path::new("/read/only")),
    "/read/only",
    "not writeable"
);

test_error_contains!(
    test_copy_failed_names_paths_and_stage,
    fs::copy_failed(
        "domain",
        Path::new("/tmp/d.zip"),
        Path::new("/srv/domains/d.zip"),
        "disk full"
    ),
    "/tmp/d.zip",
    "/srv/domains/d.zip",
    "domain",
    "disk full"
);

test_error_contains!(
    test_rename_failed_names_both_paths,
    fs::rename_failed(
        Path::new("/srv/apps/myapp.temp"),
        Path::new("/srv/apps/myapp.zip"),
        "cross-device link"
    ),
    "/srv/apps/myapp.temp",
    "/srv/apps/myapp.zip"
);

test_error_contains!(
    test_entry_missing,
    archive::entry_missing(Path::new("app.zip"), "lib/log4j.jar"),
    "app.zip",
    "lib/log4j.jar"
);

#[test]
fn test_config_read_failed() {
    let err = config::read_failed("/path/to/mule-app.yaml", "permission denied");
    assert!(matches!(err, MuleError::ConfigReadFailed { .. }));
    assert!(
        err.to_string()
            .contains("Failed to read configuration file")
    );
}

#[test]
fn test_checksum_mismatch() {
    let err = fs::checksum_mismatch(Path::new("app.temp"), "blake3:aa", "blake3:bb");
    assert!(err.to_string().contains("blake3:aa"));
    assert_eq!(err.kind(), ErrorKind::Io);
}
