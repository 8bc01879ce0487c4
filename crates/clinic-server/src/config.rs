//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,
    /// Bind port
    pub port: u16,
    /// SQLite database path, or `:memory:`
    pub database: String,
    /// Directory of frontend assets served for non-API paths
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            database: "clinic.db".to_string(),
            static_dir: None,
        }
    }
}

impl Config {
    /// Load from `CLINIC_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup("CLINIC_HOST") {
            config.host = value.parse().map_err(|_| ConfigError::Invalid {
                var: "CLINIC_HOST",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("CLINIC_PORT") {
            config.port = value.parse().map_err(|_| ConfigError::Invalid {
                var: "CLINIC_PORT",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("CLINIC_DATABASE") {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    var: "CLINIC_DATABASE",
                    value,
                });
            }
            config.database = value;
        }
        config.static_dir = lookup("CLINIC_STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn is_in_memory(&self) -> bool {
        self.database == ":memory:"
    }
}
