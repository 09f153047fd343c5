//! Runtime settings read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `MENU_CHANNEL_BUFFER` | `32` |
//! | `MENU_SEED_DATA` | `true` |
//! | `MENU_LOG_FILTER` | `menu_service=info,tower_http=info` (used when `RUST_LOG` is unset) |

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "menu_service=info,tower_http=info";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name}='{value}' is not a valid {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub channel_buffer: usize,
    pub seed_data: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            channel_buffer: 32,
            seed_data: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match var("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
                expected: "port number",
            })?,
            None => defaults.port,
        };

        let channel_buffer = match var("MENU_CHANNEL_BUFFER") {
            Some(value) => match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "MENU_CHANNEL_BUFFER",
                        value,
                        expected: "positive integer",
                    })
                }
            },
            None => defaults.channel_buffer,
        };

        let seed_data = match var("MENU_SEED_DATA") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidValue {
                name: "MENU_SEED_DATA",
                value,
                expected: "boolean",
            })?,
            None => defaults.seed_data,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            channel_buffer,
            seed_data,
            log_filter: var("MENU_LOG_FILTER").unwrap_or(defaults.log_filter),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("MENU_CHANNEL_BUFFER", "8"),
            ("MENU_SEED_DATA", "no"),
            ("MENU_LOG_FILTER", "debug"),
        ]))
        .unwrap();

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.channel_buffer, 8);
        assert!(!settings.seed_data);
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let settings = Settings::from_lookup(lookup(&[("PORT", "  "), ("HOST", "")])).unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.host, "0.0.0.0");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            Settings::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidValue { name: "PORT", .. })
        ));
        assert!(matches!(
            Settings::from_lookup(lookup(&[("MENU_CHANNEL_BUFFER", "0")])),
            Err(ConfigError::InvalidValue { name: "MENU_CHANNEL_BUFFER", .. })
        ));
        assert!(matches!(
            Settings::from_lookup(lookup(&[("MENU_SEED_DATA", "maybe")])),
            Err(ConfigError::InvalidValue { name: "MENU_SEED_DATA", .. })
        ));
    }

    #[test]
    fn test_invalid_host_is_reported_on_address() {
        let settings = Settings::from_lookup(lookup(&[("HOST", "not a host")])).unwrap();
        assert!(matches!(settings.socket_addr(), Err(ConfigError::InvalidAddress(_))));
    }
}
