//! Tests for loading settings from TOML files.

use multi_tictactoe::{ConfigErrorKind, PartialSettings};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_complete_config() {
    let file = write_config("number_of_players = 4\ntokens = \"ABCD\"\nwin_length = 4\n");
    let partial = PartialSettings::from_file(file.path()).expect("valid config");

    let settings = partial.complete().expect("valid values").expect("all present");
    assert_eq!(*settings.number_of_players(), 4);
    assert_eq!(*settings.win_length(), 4);
    let tokens: String = settings.tokens().iter().map(|t| t.as_char()).collect();
    assert_eq!(tokens, "ABCD");
}

#[test]
fn test_load_partial_config_then_override() {
    let file = write_config("tokens = \"PQR\"\n");
    let partial = PartialSettings::from_file(file.path()).expect("valid config");
    assert_eq!(partial.number_of_players, None);

    let flags = PartialSettings {
        number_of_players: Some(3),
        tokens: None,
        win_length: Some(3),
    };
    let settings = partial
        .merge(flags)
        .complete()
        .expect("valid values")
        .expect("all present");
    assert_eq!(settings.tokens()[0].as_char(), 'P');
}

#[test]
fn test_invalid_values_rejected() {
    let file = write_config("number_of_players = 3\ntokens = \"XY1\"\nwin_length = 3\n");
    let partial = PartialSettings::from_file(file.path()).expect("parses");

    let err = partial.complete().expect_err("digit token");
    assert!(matches!(err.kind, ConfigErrorKind::InvalidConfiguration(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_config("number_of_players = \"three\"\n");
    let err = PartialSettings::from_file(file.path()).expect_err("wrong type");
    assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));

    let file = write_config("players = 3\n");
    let err = PartialSettings::from_file(file.path()).expect_err("unknown field");
    assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = PartialSettings::from_file(dir.path().join("absent.toml")).expect_err("no file");
    assert!(matches!(err.kind, ConfigErrorKind::Io(_)));
}
