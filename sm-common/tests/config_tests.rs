//! Unit tests for settings resolution and graceful degradation
//!
//! Covers the CLI → env → TOML → default priority chain and the rule
//! that a missing or malformed config file never aborts startup.
//!
//! Note: Uses serial_test to prevent ENV variable race conditions.
//! Tests that manipulate SM_* variables are marked with #[serial].

use serial_test::serial;
use sm_common::config::{
    CliOverrides, Settings, TomlConfig, DEFAULT_INVOKE_URL, DEFAULT_PORT, DEFAULT_STORE_URL,
};
use std::env;
use std::io::Write;

fn clear_env() {
    env::remove_var("SM_PORT");
    env::remove_var("SM_STORE_URL");
    env::remove_var("SM_INVOKE_URL");
    env::remove_var("SM_INVOKE_API_KEY");
}

#[test]
#[serial]
fn test_defaults_with_no_overrides() {
    clear_env();
    let settings = Settings::resolve_with(&CliOverrides::default(), &TomlConfig::default());
    assert_eq!(settings.port, DEFAULT_PORT);
    assert_eq!(settings.store_url, DEFAULT_STORE_URL);
    assert_eq!(settings.invoke_url, DEFAULT_INVOKE_URL);
    assert!(settings.invoke_api_key.is_none());
}

#[test]
#[serial]
fn test_cli_takes_precedence_over_env_and_toml() {
    clear_env();
    env::set_var("SM_PORT", "6001");
    let toml_config = TomlConfig {
        port: Some(6002),
        ..Default::default()
    };
    let cli = CliOverrides {
        port: Some(6000),
        ..Default::default()
    };

    let settings = Settings::resolve_with(&cli, &toml_config);
    assert_eq!(settings.port, 6000);

    clear_env();
}

#[test]
#[serial]
fn test_env_takes_precedence_over_toml() {
    clear_env();
    env::set_var("SM_STORE_URL", "http://env.example/api");
    let toml_config = TomlConfig {
        store_url: Some("http://toml.example/api".to_string()),
        ..Default::default()
    };

    let settings = Settings::resolve_with(&CliOverrides::default(), &toml_config);
    assert_eq!(settings.store_url, "http://env.example/api");

    clear_env();
}

#[test]
#[serial]
fn test_toml_used_when_no_cli_or_env() {
    clear_env();
    let toml_config = TomlConfig {
        invoke_url: Some("http://toml.example/invoke".to_string()),
        invoke_api_key: Some("key-123".to_string()),
        ..Default::default()
    };

    let settings = Settings::resolve_with(&CliOverrides::default(), &toml_config);
    assert_eq!(settings.invoke_url, "http://toml.example/invoke");
    assert_eq!(settings.invoke_api_key.as_deref(), Some("key-123"));
}

#[test]
#[serial]
fn test_empty_env_var_falls_through() {
    clear_env();
    env::set_var("SM_INVOKE_URL", "");

    let settings = Settings::resolve_with(&CliOverrides::default(), &TomlConfig::default());
    assert_eq!(settings.invoke_url, DEFAULT_INVOKE_URL);

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_env_port_falls_through() {
    clear_env();
    env::set_var("SM_PORT", "not-a-port");

    let settings = Settings::resolve_with(&CliOverrides::default(), &TomlConfig::default());
    assert_eq!(settings.port, DEFAULT_PORT);

    clear_env();
}

#[test]
fn test_toml_file_load() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "port = 7000\nstore_url = \"http://file.example/api\"").expect("write");

    let config = TomlConfig::load(&file.path().to_path_buf()).expect("parses");
    assert_eq!(config.port, Some(7000));
    assert_eq!(config.store_url.as_deref(), Some("http://file.example/api"));
    assert!(config.invoke_url.is_none());
}

#[test]
fn test_malformed_toml_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "port = [this is not toml").expect("write");

    assert!(TomlConfig::load(&file.path().to_path_buf()).is_err());
}

#[test]
#[serial]
fn test_missing_explicit_config_file_degrades_to_defaults() {
    clear_env();
    let cli = CliOverrides {
        config_file: Some("/nonexistent/session-master.toml".into()),
        ..Default::default()
    };

    // Settings::resolve logs a warning and continues on defaults
    let settings = Settings::resolve(&cli);
    assert_eq!(settings.port, DEFAULT_PORT);
}
