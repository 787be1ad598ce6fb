use roster_client::config::{Config, ConfigError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:5000/");
    assert_eq!(config.pagination.page_size, 10);
    assert!(config.storage.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("roster-client/config.toml"));
    assert!(Config::default_storage_path().ends_with("roster-client/storage.json"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://roster.example.edu/backend"

[pagination]
page_size = 25

[storage]
path = "/var/tmp/roster.json"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://roster.example.edu/backend");
    assert_eq!(config.pagination.page_size, 25);
    assert_eq!(config.storage_path(), PathBuf::from("/var/tmp/roster.json"));
    assert_eq!(
        config.base_url().unwrap().as_str(),
        "https://roster.example.edu/backend/"
    );
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config("[pagination]\npage_size = 5\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:5000/");
    assert_eq!(config.pagination.page_size, 5);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_page_size_fails_validation() {
    let (_dir, path) = write_config("[pagination]\npage_size = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("page_size"));
}

#[test]
fn test_unparseable_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"not a url\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
