//! Configuration management for the norm-helpers server.
//!
//! This module handles loading and validating configuration from environment variables.
//! Nothing here writes to stdout, which MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the norm-helpers server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Pretty-print JSON tool responses (default: true)
    pub pretty_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level or filter directive (default: "error")
    /// - `NORM_HELPERS_PRETTY_JSON`: Pretty-print tool responses (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let pretty_json = Self::parse_env_bool("NORM_HELPERS_PRETTY_JSON", true)?;

        Ok(Config {
            log_level,
            pretty_json,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            pretty_json: true,
        }
    }
}
