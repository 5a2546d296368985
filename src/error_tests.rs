//! Tests for SuggesterError

use super::*;
use std::path::Path;

#[test]
fn test_config_read_error_display() {
    let error = SuggesterError::ConfigRead {
        path: PathBuf::from("/tmp/missing.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let msg = error.to_string();
    assert!(msg.contains("Could not read config file"));
    assert!(msg.contains("/tmp/missing.toml"));
    assert!(msg.contains("no such file"));
}

#[test]
fn test_config_parse_error_display() {
    let source = toml::from_str::<toml::Value>("key = ").unwrap_err();
    let error = SuggesterError::ConfigParse {
        path: Path::new("config.toml").to_path_buf(),
        source,
    };
    let msg = error.to_string();
    assert!(msg.starts_with("Invalid config file config.toml"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: SuggesterError = io_err.into();
    assert!(matches!(error, SuggesterError::Io(_)));
    assert!(error.to_string().contains("denied"));
}
