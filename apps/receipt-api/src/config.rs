//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use receipt_store::StoreConfig;
use serde::{Deserialize, Serialize};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for terminals
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Receipt API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (IP literal)
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Maximum retained receipts (None = unbounded)
    pub receipt_capacity: Option<usize>,

    /// Default log filter when RUST_LOG is unset
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            receipt_capacity: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host = lookup("RECEIPT_API_HOST").unwrap_or(defaults.host);
        host.parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_HOST".to_string()))?;

        let port = match lookup("RECEIPT_API_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?,
            None => defaults.port,
        };

        let receipt_capacity = match lookup("RECEIPT_CAPACITY") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::InvalidValue("RECEIPT_CAPACITY".to_string()))
                }
                Ok(capacity) => Some(capacity),
            },
            None => None,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(ServerConfig {
            host,
            port,
            receipt_capacity,
            log_level,
            log_format,
        })
    }

    /// Socket address to bind the HTTP listener to.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_HOST".to_string()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        match self.receipt_capacity {
            Some(capacity) => StoreConfig::unbounded().capacity(capacity),
            None => StoreConfig::unbounded(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_map(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.receipt_capacity, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.bind_address().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.store_config().capacity, None);
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("RECEIPT_API_HOST", "127.0.0.1"),
            ("RECEIPT_API_PORT", "9000"),
            ("RECEIPT_CAPACITY", "500"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.bind_address().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(config.receipt_capacity, Some(500));
        assert_eq!(config.store_config().capacity, Some(500));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            ("RECEIPT_API_HOST", "localhost"),
            ("RECEIPT_API_PORT", "eighty"),
            ("RECEIPT_API_PORT", "70000"),
            ("RECEIPT_CAPACITY", "0"),
            ("RECEIPT_CAPACITY", "-5"),
            ("LOG_FORMAT", "xml"),
        ] {
            let err = from_map(&[(key, value)]).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid value for {key}"));
        }
    }
}
