use anecdota::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn default_values_apply_without_a_file() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.notification_timeout_ms, 5000);
}

#[test]
fn config_path_ends_with_the_expected_name() {
    assert!(Config::config_path().ends_with("anecdota/config.toml"));
}

#[test]
fn a_partial_file_keeps_defaults_for_the_rest() {
    let (_dir, path) = write_config("[ui]\nnotification_timeout_ms = 1500\n");

    let config = Config::load_from(&path).expect("Failed to load config");

    assert_eq!(config.ui.notification_timeout_ms, 1500);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn an_empty_file_is_all_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).expect("Failed to load config");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.notification_timeout_ms, 5000);
}

#[test]
fn a_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nope.toml");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[ui\ntick_rate_ms = ");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn a_zero_timeout_fails_validation_on_load() {
    let (_dir, path) = write_config("[ui]\nnotification_timeout_ms = 0\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn unknown_keys_are_ignored() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 100\n\n[future]\nflag = true\n");

    let config = Config::load_from(&path).expect("Failed to load config");

    assert_eq!(config.ui.tick_rate_ms, 100);
}
