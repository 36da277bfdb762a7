//! Configuration loading and settings resolution
//!
//! Each setting resolves through the same priority chain:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable config file never aborts startup; the chain
//! simply falls through to the compiled defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Default listen port for the web UI module
pub const DEFAULT_PORT: u16 = 5780;

/// Default record store base URL (local development stub)
pub const DEFAULT_STORE_URL: &str = "http://127.0.0.1:8440/api";

/// Default model invocation endpoint (local development stub)
pub const DEFAULT_INVOKE_URL: &str = "http://127.0.0.1:8441/invoke";

/// TOML config file schema
///
/// All fields optional; absent fields fall through to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub store_url: Option<String>,
    pub invoke_url: Option<String>,
    pub invoke_api_key: Option<String>,
}

impl TomlConfig {
    /// Load the TOML config from an explicit path
    pub fn load(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Cannot parse {}: {}", path.display(), e)))
    }

    /// Load the TOML config from the platform config directory, if present
    ///
    /// Missing file is not an error; parse failures are logged and treated
    /// as an absent config so startup continues on defaults.
    pub fn load_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }
}

/// Platform config file location (~/.config/session-master/config.toml on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("session-master").join("config.toml"))
}

/// Resolved settings for the web UI module
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub store_url: String,
    pub invoke_url: String,
    pub invoke_api_key: Option<String>,
}

/// Unresolved overrides from the command line (clap lives in the binary
/// crate; this struct keeps the resolution chain testable without it)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub store_url: Option<String>,
    pub invoke_url: Option<String>,
    pub invoke_api_key: Option<String>,
    pub config_file: Option<PathBuf>,
}

impl Settings {
    /// Resolve all settings through the CLI → env → TOML → default chain
    pub fn resolve(cli: &CliOverrides) -> Self {
        let toml_config = match &cli.config_file {
            Some(path) => match TomlConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring config file: {}", e);
                    TomlConfig::default()
                }
            },
            None => TomlConfig::load_default(),
        };
        Self::resolve_with(cli, &toml_config)
    }

    /// Resolution against an explicit TOML config (used by tests)
    pub fn resolve_with(cli: &CliOverrides, toml_config: &TomlConfig) -> Self {
        let port = cli
            .port
            .or_else(|| env_var("SM_PORT").and_then(|v| v.parse().ok()))
            .or(toml_config.port)
            .unwrap_or(DEFAULT_PORT);

        let store_url = cli
            .store_url
            .clone()
            .or_else(|| env_var("SM_STORE_URL"))
            .or_else(|| toml_config.store_url.clone())
            .unwrap_or_else(|| DEFAULT_STORE_URL.to_string());

        let invoke_url = cli
            .invoke_url
            .clone()
            .or_else(|| env_var("SM_INVOKE_URL"))
            .or_else(|| toml_config.invoke_url.clone())
            .unwrap_or_else(|| DEFAULT_INVOKE_URL.to_string());

        let invoke_api_key = cli
            .invoke_api_key
            .clone()
            .or_else(|| env_var("SM_INVOKE_API_KEY"))
            .or_else(|| toml_config.invoke_api_key.clone());

        Settings {
            port,
            store_url,
            invoke_url,
            invoke_api_key,
        }
    }
}

/// Non-empty environment variable lookup
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
