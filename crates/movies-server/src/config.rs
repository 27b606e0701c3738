//! Server configuration read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `MOVIES_HOST` | `0.0.0.0` |
//! | `MOVIES_PORT` | `10000` |
//! | `MOVIES_SEED_FILE` | `data.json` |
//!
//! The seed file is only read when every pair in [`SEED_FILE_GATE`] matches
//! the environment exactly.

use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_SEED_FILE: &str = "data.json";

/// Environment variables that must all hold these exact values for the seed
/// file to be loaded.
///
/// `HOME=/root` alone matches any root shell. The image that ships the seed
/// file carries no toolchain variable such as `GOPATH`, so it sets
/// `MOVIES_RUNTIME` to mark itself instead.
pub const SEED_FILE_GATE: [(&str, &str); 2] = [("MOVIES_RUNTIME", "container"), ("HOME", "/root")];

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid MOVIES_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Runtime settings for the movies server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path of the JSON seed file.
    pub seed_file: PathBuf,
    /// Whether the seed-file gate was open at startup.
    pub load_seed_file: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: PathBuf::from(DEFAULT_SEED_FILE),
            load_seed_file: false,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("MOVIES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("MOVIES_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let seed_file = lookup("MOVIES_SEED_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE));
        let load_seed_file = SEED_FILE_GATE
            .iter()
            .all(|(key, expected)| lookup(key).as_deref() == Some(*expected));

        Ok(ServerConfig {
            host,
            port,
            seed_file,
            load_seed_file,
        })
    }

    /// The `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:10000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("MOVIES_HOST", "127.0.0.1"),
            ("MOVIES_PORT", "8080"),
            ("MOVIES_SEED_FILE", "/tmp/movies.json"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.seed_file, PathBuf::from("/tmp/movies.json"));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("MOVIES_PORT", "ten")])).unwrap_err();
        match err {
            ConfigError::InvalidPort { value, .. } => assert_eq!(value, "ten"),
        }
    }

    #[test]
    fn test_seed_gate_requires_both_values() {
        let open = ServerConfig::from_lookup(lookup_from(&[
            ("MOVIES_RUNTIME", "container"),
            ("HOME", "/root"),
        ]))
        .unwrap();
        assert!(open.load_seed_file);

        let half = ServerConfig::from_lookup(lookup_from(&[("MOVIES_RUNTIME", "container")])).unwrap();
        assert!(!half.load_seed_file);

        let wrong = ServerConfig::from_lookup(lookup_from(&[
            ("MOVIES_RUNTIME", "container"),
            ("HOME", "/home/someone"),
        ]))
        .unwrap();
        assert!(!wrong.load_seed_file);
    }
}
