//! Configuration management for jotter.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the user's config dir.
const APP_DIR_NAME: &str = "jotter";

/// Prefix for jotter-specific environment variables.
const ENV_PREFIX: &str = "JOTTER_";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3001;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. The `PORT` environment variable (for `server.port` only)
/// 2. Environment variables prefixed with `JOTTER_`, nested with `__`
///    (e.g. `JOTTER_STORAGE__PATH`)
/// 3. TOML config file at `~/.config/jotter/config.toml`
/// 4. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Note storage configuration.
    pub storage: StorageConfig,
    /// Static asset configuration.
    pub assets: AssetsConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the JSON note collection, relative to the working directory
    /// unless absolute.
    pub path: PathBuf,
}

/// Static asset configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `index.html`, `notes.html` and their assets.
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: 100 * 1024,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("db").join("db.json"),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config: Config = Self::figment(config_path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the layered figment without extracting it.
    #[must_use]
    pub fn figment(config_path: Option<PathBuf>) -> Figment {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.max_body_bytes == 0 {
            return Err(Error::config_validation(
                "max_body_bytes must be greater than 0",
            ));
        }

        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(Error::config_validation(format!(
                "invalid host address: {}",
                self.server.host
            )));
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(Error::config_validation("storage path must not be empty"));
        }

        Ok(())
    }

    /// Get the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            Error::config_validation(format!("invalid host address: {}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Path to the page served at `/notes`.
    #[must_use]
    pub fn notes_page(&self) -> PathBuf {
        self.assets.public_dir.join("notes.html")
    }

    /// Path to the page served for unmatched routes.
    #[must_use]
    pub fn index_page(&self) -> PathBuf {
        self.assets.public_dir.join("index.html")
    }
}
