//! Tests for loading scanner policy from TOML files.

use std::fs;

use betterflag::{ConfigError, FlagSet, ParseConfig};
use tempfile::TempDir;

#[test]
fn load_reads_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("flags.toml");
    fs::write(&path, "strict = true\n").unwrap();

    let config = ParseConfig::load(&path).unwrap();
    assert!(config.strict);
    assert!(!config.stop_at_terminator);
}

#[test]
fn load_missing_file_is_read_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.toml");

    let err = ParseConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { path: p, .. } if p == path));
}

#[test]
fn loaded_config_drives_the_scanner() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("flags.toml");
    fs::write(&path, "stop_at_terminator = true\n").unwrap();

    let config = ParseConfig::load(&path).unwrap();
    let mut flags = FlagSet::new(["prog", "--", "-n=1"]).with_config(config);
    let n = flags.int("n", 0, "");
    flags.parse().unwrap();

    assert_eq!(flags.config(), &config);
    assert_eq!(flags.get(n), Some(0));
    assert_eq!(flags.args(), ["-n=1"]);
}
