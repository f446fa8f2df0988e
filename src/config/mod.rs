//! # Configuration
//!
//! Settings are read from environment variables (a `.env` file is loaded first by `main`).
//! Tests build configs through [`ConfigBuilder`] instead.
//!
//! | Variable               | Default       |
//! |------------------------|---------------|
//! | `HOST`                 | `0.0.0.0`     |
//! | `PORT`                 | `8080`        |
//! | `REQUEST_TIMEOUT_SECS` | `30`          |
//! | `ENVIRONMENT`          | `development` |

use std::{env, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Service settings.
///
/// # Example
/// ```rust
/// use tiny_links::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.port, 8080);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Upper bound for handling a single request
    pub request_timeout_secs: u64,

    /// Runtime environment (development, production)
    pub environment: Environment,
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,

    Testing,

    /// Logs are emitted as JSON lines
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Unknown values fall back to development.
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// Build the config from environment variables.
    ///
    /// Missing or unparseable numbers fall back to their defaults.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the resulting config does not pass [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let get_env = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let config = Self {
            host: get_env("HOST", &defaults.host),
            port: parse_env("PORT", defaults.port),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            environment: get_env("ENVIRONMENT", "development").into(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the config for values the server cannot run with.
    ///
    /// # Errors
    /// `AppError::Config` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::Config("HOST cannot be empty".to_string()));
        }

        if self.port == 0 {
            return Err(AppError::Config("PORT cannot be 0".to_string()));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "REQUEST_TIMEOUT_SECS cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// `host:port` for binding the listener.
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

// =====================================
// Builder Pattern
// =====================================
/// Builds a [`Config`] step by step, starting from the defaults.
///
/// # Example
/// ```rust
/// use tiny_links::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(9000)
///     .host("127.0.0.1")
///     .build();
/// assert_eq!(config.server_addr(), "127.0.0.1:9000");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate.
    ///
    /// # Errors
    /// Whatever [`Config::validate`] rejects.
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}
