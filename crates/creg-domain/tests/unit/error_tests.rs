//! Unit tests for domain error types

use creg_domain::Error;
use std::error::Error as _;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("feature/river-1");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "feature/river-1"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_io_error_from_std() {
    let error: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(error, Error::IoSimple { .. }));
    assert!(error.to_string().contains("missing"));
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Missing required setting i18n.default_locale");
    assert!(error.is_configuration());
    assert_eq!(
        error.to_string(),
        "Configuration error: Missing required setting i18n.default_locale"
    );
}

#[test]
fn test_configuration_error_keeps_source() {
    let cause = std::io::Error::other("bad toml");
    let error = Error::configuration_with_source("Settings unreadable", cause);
    assert!(error.is_configuration());
    assert_eq!(error.source().map(ToString::to_string).as_deref(), Some("bad toml"));
}

#[test]
fn test_discovery_error() {
    let error = Error::discovery("container lookup failed");
    match &error {
        Error::Discovery { message, source } => {
            assert_eq!(message, "container lookup failed");
            assert!(source.is_none());
        }
        _ => panic!("Expected Discovery error"),
    }
    assert!(!error.is_configuration());
}

#[test]
fn test_resolution_and_lifecycle_errors() {
    assert_eq!(
        Error::resolution("factory refused key").to_string(),
        "Resolution error: factory refused key"
    );
    assert_eq!(
        Error::lifecycle("update before init").to_string(),
        "Lifecycle error: update before init"
    );
}

#[test]
fn test_internal_error() {
    let error = Error::internal("lock poisoned");
    match error {
        Error::Internal { message } => assert_eq!(message, "lock poisoned"),
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_infrastructure_errors() {
    let plain = Error::infrastructure("watcher stopped");
    assert_eq!(plain.to_string(), "Infrastructure error: watcher stopped");

    let sourced =
        Error::infrastructure_with_source("log file", std::io::Error::other("read-only"));
    assert_eq!(sourced.source().map(ToString::to_string).as_deref(), Some("read-only"));
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("unknown metadata kind");
    assert!(matches!(error, Error::InvalidArgument { .. }));
}
