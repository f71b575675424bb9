//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_hearth_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, hearth_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[service]
base_url = "https://chat.example.com"

[pacing]
max_ms = 900
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.service.base_url, "https://chat.example.com");
    assert_eq!(config.pacing.max_ms, 900);
    // Defaults preserved
    assert_eq!(config.service.chat_path, "/chat");
    assert_eq!(config.pacing.base_ms, 350);
    assert_eq!(config.pacing.per_char_ms, 12);
    assert!(!config.session.serialize_exchanges);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, hearth_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[service]\nconnect_timeout_secs = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.service.connect_timeout_secs, 0);
}

#[test]
fn load_log_level_and_greeting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[session]\ngreeting = \"\"\nserialize_exchanges = true\n\n[logging]\nlevel = \"DEBUG\"\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(config.session.greeting.is_empty());
    assert!(config.session.serialize_exchanges);
    assert_eq!(config.logging.level, crate::schema::LogLevel::Debug);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hearth").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.session.greeting, crate::schema::DEFAULT_GREETING);
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[pacing]\nbase_ms = 5\n").unwrap();

    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.pacing.base_ms, 5);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::HearthConfig;

    let config: HearthConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.pacing.base_ms, 350);
}

#[test]
fn default_config_path_is_reasonable() {
    // Some CI environments have no config dir
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("hearth"));
        assert!(path_str.ends_with("config.toml"));
    }
}
