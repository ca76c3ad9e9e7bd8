//! Tests for loading the front-end config file.

use rewind_cli::CliConfig;
use rewind_tictactoe::MoveOrder;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "move_order = \"descending\"\nhighlight_winning_line = false\nlog_filter = \"debug\""
    )
    .unwrap();

    let config = CliConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.move_order(), MoveOrder::Descending);
    assert!(!*config.highlight_winning_line());
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "highlight_winning_line = false").unwrap();

    let config = CliConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.move_order(), MoveOrder::Ascending);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CliConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "move_order = \"sideways\"").unwrap();

    let err = CliConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
