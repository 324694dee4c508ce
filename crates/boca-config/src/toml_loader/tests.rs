//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_boca_config.toml"));
    assert!(matches!(result, Err(boca_common::ConfigError::ParseError(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[site]
base_url = "https://example.org/app/"

[deep_link]
scheme = "appscheme"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.site.base_url, "https://example.org/app/");
    assert_eq!(config.deep_link.scheme, "appscheme");
    // Defaults preserved
    assert_eq!(config.site.title, "Boca Parliament");
    assert_eq!(config.connectivity.interval_secs, 5);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(boca_common::ConfigError::ParseError(_))));
}

#[test]
fn load_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[connectivity]\ninterval_secs = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.connectivity.interval_secs, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boca").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.site.base_url, "https://israeliparliament.org/boca/user/");
    assert_eq!(config.notifications.token_key, "fcm_token");
}

#[test]
fn default_template_is_valid_toml() {
    let content = super::template::default_config_toml();
    let config: crate::schema::BocaConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_boca() {
    let path = default_config_path().unwrap();
    assert_eq!(path.file_name().unwrap(), "config.toml");
    assert!(path.parent().unwrap().ends_with("boca"));
}
