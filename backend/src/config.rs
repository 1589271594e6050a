//! Server configuration from a TOML file and environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{name} must be {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 8080)
    pub port: u16,
    /// Largest accepted request body in bytes (default: 64 KiB)
    pub body_limit_bytes: usize,
    /// Log filter directive (default: info)
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            body_limit_bytes: 64 * 1024,
            log_level: "info".to_string(),
        }
    }
}

/// Layout of the TOML file: everything lives under `[server]`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ServerConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.server)
    }

    /// Load configuration from the process environment.
    ///
    /// # Environment Variables
    /// - `HOURS_CONFIG` (optional): TOML file to start from instead of the defaults
    /// - `HOST` (optional): overrides `host`
    /// - `PORT` (optional): overrides `port`
    /// - `BODY_LIMIT` (optional): overrides `body_limit_bytes`
    /// - `RUST_LOG` (optional): overrides `log_level`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("HOURS_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                expected: "a valid port number",
                value: port.clone(),
            })?;
        }
        if let Some(limit) = lookup("BODY_LIMIT") {
            config.body_limit_bytes = limit.parse().map_err(|_| ConfigError::InvalidValue {
                name: "BODY_LIMIT",
                expected: "a size in bytes",
                value: limit.clone(),
            })?;
        }
        if let Some(level) = lookup("RUST_LOG") {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Socket address to bind the server to.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidValue {
            name: "HOST",
            expected: "an IP address",
            value: self.host.clone(),
        })
    }
}
