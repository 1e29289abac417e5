//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use gamemath::config::AppConfig;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

/// Fresh config directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gamemath_config_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("GM_PARITY__SAMPLES", "123");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("GM_PARITY__SAMPLES");
    assert_eq!(config.parity.samples, 123);
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("GM_PARITY__SAMPLES");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.parity.max_ulps, 1);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(dir.join("default.toml"), "[parity]\nsamples = 50\nseed = 8\n").unwrap();
    fs::write(dir.join("user.toml"), "[parity]\nsamples = 7\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.parity.samples, 7);
    assert_eq!(config.parity.seed, 8);
    // Untouched keys and sections keep their defaults
    assert_eq!(config.parity.max_ulps, 1);
    assert_eq!(config.debug.log_level, "info");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_env_beats_user_file() {
    let dir = scratch_dir("env");
    fs::write(dir.join("user.toml"), "[debug]\nlog_level = \"warn\"\n").unwrap();

    std::env::set_var("GM_DEBUG__LOG_LEVEL", "trace");
    let config = AppConfig::load_from(&dir);
    std::env::remove_var("GM_DEBUG__LOG_LEVEL");

    assert_eq!(config.unwrap().debug.log_level, "trace");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_gives_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.parity.samples, 10_000);
}

#[test]
#[serial]
fn test_malformed_value_is_an_error() {
    let dir = scratch_dir("bad");
    fs::write(dir.join("default.toml"), "[parity]\nsamples = \"many\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
    fs::remove_dir_all(&dir).unwrap();
}
