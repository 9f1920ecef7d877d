// ABOUTME: Environment-based configuration for data location and UI timing
// ABOUTME: Parses SMOOTHIE_* variables with defaults and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::timing::{DEFAULT_GENERATION_DELAY_MS, DEFAULT_NOTIFICATION_TTL_MS};
use crate::errors::{AppError, AppResult};

/// Directory name used under the platform data directory
const DATA_DIR_NAME: &str = "smoothie-lab";

/// Longest accepted generation delay
const MAX_GENERATION_DELAY: Duration = Duration::from_secs(60);

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// End-user installation
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the persisted records
    pub data_dir: PathBuf,
    /// Delay between a generation request and the recipe appearing
    pub generation_delay: Duration,
    /// How long notifications stay visible
    pub notification_ttl: Duration,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            generation_delay: Duration::from_millis(DEFAULT_GENERATION_DELAY_MS),
            notification_ttl: Duration::from_millis(DEFAULT_NOTIFICATION_TTL_MS),
            environment: Environment::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `SMOOTHIE_DATA_DIR`: storage directory
    /// - `SMOOTHIE_GENERATION_DELAY_MS`: cosmetic generation delay
    /// - `SMOOTHIE_NOTIFICATION_TTL_MS`: notification lifetime
    /// - `ENVIRONMENT`: development, production, or testing
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a numeric variable does not parse or the
    /// resulting configuration fails [`AppConfig::validate`]
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var("SMOOTHIE_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(Self::default_data_dir, PathBuf::from);

        let generation_delay = Duration::from_millis(parse_millis(
            "SMOOTHIE_GENERATION_DELAY_MS",
            DEFAULT_GENERATION_DELAY_MS,
        )?);
        let notification_ttl = Duration::from_millis(parse_millis(
            "SMOOTHIE_NOTIFICATION_TTL_MS",
            DEFAULT_NOTIFICATION_TTL_MS,
        )?);
        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));

        let config = Self {
            data_dir,
            generation_delay,
            notification_ttl,
            environment,
        };
        config.validate()?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Platform data directory joined with `smoothie-lab`, or `./data` when unknown
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir().map_or_else(|| PathBuf::from("data"), |dir| dir.join(DATA_DIR_NAME))
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the notification lifetime is zero, the
    /// generation delay exceeds one minute, or the data directory is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.notification_ttl.is_zero() {
            return Err(AppError::config(
                "SMOOTHIE_NOTIFICATION_TTL_MS must be greater than zero",
            ));
        }
        if self.generation_delay > MAX_GENERATION_DELAY {
            return Err(AppError::config(format!(
                "SMOOTHIE_GENERATION_DELAY_MS must be at most {}",
                MAX_GENERATION_DELAY.as_millis()
            )));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::config("data directory must not be empty"));
        }
        Ok(())
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_millis(key: &str, default: u64) -> AppResult<u64> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
            AppError::config(format!("{key} must be a whole number of milliseconds, got '{raw}'"))
                .with_source(e)
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation_delay, Duration::from_secs(2));
        assert_eq!(config.notification_ttl, Duration::from_secs(3));
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let config = AppConfig {
            notification_ttl: Duration::ZERO,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
