//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables
//! (after loading a `.env` file, if present).
//!
//! # Environment Variables
//!
//! - `HOST`: server host address (default: `0.0.0.0`)
//! - `PORT`: server port (default: `8000`)
//! - `SEED_FIXTURES`: load the fixture tasks and users (default: `true`)
//! - `RUST_LOG`: log filter, read by the tracing subscriber

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Whether both collections start with the fixture records.
    pub seed_fixtures: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_fixtures: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file is not read here; `main` loads it with `dotenvy` before
    /// tracing starts so that `RUST_LOG` is picked up too.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT").map_or(Ok(DEFAULT_PORT), |value| parse_port(&value))?;
        let seed_fixtures = lookup("SEED_FIXTURES")
            .map_or(Ok(true), |value| parse_flag("SEED_FIXTURES", &value))?;

        Ok(Self {
            host,
            port,
            seed_fixtures,
        })
    }

    /// Returns the `host:port` address to bind.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|error: std::num::ParseIntError| ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: error.to_string(),
        })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected true/false, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let variables: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| variables.get(key).cloned()
    }

    #[rstest]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
    }

    #[rstest]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("SEED_FIXTURES", "no"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(!config.seed_fixtures);
        assert_eq!(config.socket_addr(), "127.0.0.1:3000");
    }

    #[rstest]
    #[case("true", true)]
    #[case("1", true)]
    #[case("YES", true)]
    #[case("false", false)]
    #[case(" 0 ", false)]
    fn seed_flag_accepts_common_spellings(#[case] raw: &str, #[case] expected: bool) {
        let config = AppConfig::from_lookup(lookup_from(&[("SEED_FIXTURES", raw)])).unwrap();

        assert_eq!(config.seed_fixtures, expected);
    }

    #[rstest]
    #[case("PORT", "eighty")]
    #[case("PORT", "70000")]
    #[case("SEED_FIXTURES", "maybe")]
    fn invalid_values_name_the_variable(#[case] key: &str, #[case] raw: &str) {
        let error = AppConfig::from_lookup(lookup_from(&[(key, raw)])).unwrap_err();

        let ConfigError::InvalidValue { key: reported, .. } = error;
        assert_eq!(reported, key);
    }

    #[rstest]
    fn from_env_reads_only_process_environment() {
        let from_process = AppConfig::from_lookup(|key| env::var(key).ok()).ok();

        assert_eq!(AppConfig::from_env().ok(), from_process);
    }

    #[rstest]
    fn config_error_display() {
        let error = ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: "must be a number".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid value for PORT: must be a number");
    }
}
