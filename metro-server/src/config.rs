//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default static assets directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Error from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address could not be parsed
    #[error("invalid METRO_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Configuration for the route finder server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`METRO_ADDR`).
    pub addr: SocketAddr,

    /// Network file to load instead of the built-in metro (`METRO_NETWORK`).
    pub network_path: Option<PathBuf>,

    /// Directory served under `/static` (`METRO_STATIC_DIR`).
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration using a custom variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr_value = get("METRO_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        Ok(Self {
            addr,
            network_path: get("METRO_NETWORK").map(PathBuf::from),
            static_dir: get("METRO_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network_path: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("METRO_ADDR", "0.0.0.0:8080"),
            ("METRO_NETWORK", "/etc/metro/network.json"),
            ("METRO_STATIC_DIR", "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(
            config.network_path,
            Some(PathBuf::from("/etc/metro/network.json"))
        );
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn empty_values_are_unset() {
        let config =
            ServerConfig::from_lookup(lookup(&[("METRO_ADDR", ""), ("METRO_NETWORK", "  ")]))
                .unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn invalid_address_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("METRO_ADDR", "not-an-address")]))
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid METRO_ADDR \"not-an-address\""));
    }
}
