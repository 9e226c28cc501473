use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

/// On-disk shape of the config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfigFile {
    address: Option<IpAddr>,
    port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<CatalogConfigFile> for CatalogConfig {
    fn from(file_config: CatalogConfigFile) -> Self {
        CatalogConfig {
            address: file_config
                .address
                .unwrap_or(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))),
            port: file_config.port.unwrap_or(DEFAULT_PORT),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfigFile::default().into()
    }
}

impl CatalogConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let file_config: CatalogConfigFile = serde_json::from_str(contents)?;
        Ok(file_config.into())
    }

    /// Rocket settings with only the bind address overridden. Environment
    /// variables and `Rocket.toml` are not consulted.
    pub fn rocket_config(&self) -> rocket::Config {
        rocket::Config {
            address: self.address,
            port: self.port,
            ..rocket::Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = CatalogConfig::from_json(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 9000);

        let config = CatalogConfig::from_json(r#"{"address": "0.0.0.0"}"#).unwrap();
        assert_eq!(config.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let result = CatalogConfig::from_json(r#"{"port": "eighty"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CatalogConfig::load("does/not/exist/album-catalog.config");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_full_file_keeps_values() {
        let json = r#"{
            "address": "10.0.0.2",
            "port": 3000
        }"#;
        let expected = CatalogConfig {
            address: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)),
            port: 3000,
        };
        assert_eq!(CatalogConfig::from_json(json).unwrap(), expected);
    }

    #[test]
    fn test_rocket_config_uses_bind_address() {
        let config = CatalogConfig::from_json(r#"{"port": 9100}"#).unwrap();
        let rocket_config = config.rocket_config();
        assert_eq!(rocket_config.port, 9100);
        assert_eq!(rocket_config.address, config.address);
    }
}
