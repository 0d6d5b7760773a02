// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_ENV_VAR: &str = "PORT";

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppSection {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_description")]
    pub description: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: default_app_description(),
        }
    }
}

fn default_app_name() -> String {
    "Primer".to_string()
}

fn default_app_description() -> String {
    "Curated software-engineering study pages".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QuoteSection {
    #[serde(default = "default_quote_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_quote_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for QuoteSection {
    fn default() -> Self {
        Self {
            endpoint: default_quote_endpoint(),
            timeout_ms: default_quote_timeout_ms(),
        }
    }
}

fn default_quote_endpoint() -> String {
    "https://zenquotes.io/api/random".to_string()
}

// The upstream contract specifies no timeout; 3 seconds bounds how long a
// request task may hang on the quote boundary before the fallback wins.
fn default_quote_timeout_ms() -> u64 {
    3000
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Validated application configuration.
///
/// Built from defaults, optionally overlaid by a `config.yaml` in the
/// working directory; the `PORT` environment variable wins over both for
/// the listening port.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub quote: QuoteSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl AppConfig {
    pub fn load(config_path: &Path) -> Result<AppConfig, ConfigError> {
        let mut config = if config_path.exists() {
            let raw = fs::read_to_string(config_path).map_err(|e| {
                ConfigError::LoadError(format!("failed to read {}: {}", config_path.display(), e))
            })?;
            serde_yaml::from_str(&raw).map_err(|e| {
                ConfigError::LoadError(format!("failed to parse {}: {}", config_path.display(), e))
            })?
        } else {
            AppConfig::default()
        };

        config.server.port = port_from_env(std::env::var(PORT_ENV_VAR).ok(), config.server.port);
        config.validate()?;
        Ok(config)
    }

    pub fn quote_timeout(&self) -> Duration {
        Duration::from_millis(self.quote.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.quote.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "quote.endpoint must not be empty".to_string(),
            ));
        }
        if self.quote.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "quote.timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// `PORT` overrides the configured port when it parses to a usable value;
/// anything else keeps the fallback, with a warning rather than an abort.
fn port_from_env(value: Option<String>, fallback: u16) -> u16 {
    match value {
        Some(raw) => match raw.trim().parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                warn!("Ignoring invalid {} value '{}'", PORT_ENV_VAR, raw);
                fallback
            }
        },
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.quote.endpoint, "https://zenquotes.io/api/random");
        assert_eq!(config.quote.timeout_ms, 3000);
        assert_eq!(config.logging.level, "info");
        config.validate().expect("defaults validate");
    }

    #[test]
    fn port_env_overrides_fallback() {
        assert_eq!(port_from_env(Some("8080".to_string()), 3000), 8080);
    }

    #[test]
    fn port_env_unset_keeps_fallback() {
        assert_eq!(port_from_env(None, 3000), 3000);
    }

    #[test]
    fn port_env_invalid_keeps_fallback() {
        assert_eq!(port_from_env(Some("eighty".to_string()), 3000), 3000);
        assert_eq!(port_from_env(Some("0".to_string()), 3000), 3000);
        assert_eq!(port_from_env(Some("99999".to_string()), 3000), 3000);
    }

    #[test]
    fn yaml_overlay_parses() {
        let raw = r#"
app:
  name: Primer Test
server:
  host: 127.0.0.1
  port: 5466
quote:
  endpoint: http://127.0.0.1:1/api/random
  timeout_ms: 250
"#;
        let config: AppConfig = serde_yaml::from_str(raw).expect("yaml config");
        assert_eq!(config.app.name, "Primer Test");
        assert_eq!(config.server.port, 5466);
        assert_eq!(config.quote.timeout_ms, 250);
        // Unlisted sections fall back to defaults.
        assert_eq!(config.logging.level, "info");
        config.validate().expect("overlay validates");
    }

    #[test]
    fn zero_port_fails_validation() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = AppConfig::default();
        config.quote.timeout_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn empty_endpoint_fails_validation() {
        let mut config = AppConfig::default();
        config.quote.endpoint = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
