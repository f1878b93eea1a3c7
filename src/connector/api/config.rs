use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::connector::adapter::{DEFAULT_BASE_URL, DEFAULT_RELAY_URL};
use crate::domain::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 60;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const PORT_VAR: &str = "PORT";
pub const RELAY_URL_VAR: &str = "RELAY_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set; export it or run with --mock-provider")]
    MissingApiKey,

    #[error("Invalid value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Values given on the command line. `None` means "not given", so the
/// environment or the default applies.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub public: bool,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub upstream_timeout_secs: Option<u64>,
    pub mock_provider: bool,
    pub relay_url: Option<String>,
}

/// Settings resolved once at startup and shared read-only afterwards.
///
/// Precedence: command-line override, then environment, then default.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub port: u16,
    pub public: bool,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub upstream_timeout: Duration,
    pub mock_provider: bool,
    pub relay_url: String,
    pub relay_timeout: Duration,
}

impl RelayConfig {
    /// Resolve against the process environment.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    pub fn resolve(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match overrides.port {
            Some(port) => port,
            None => parse_or_default(PORT_VAR, var(PORT_VAR), DEFAULT_PORT)?,
        };

        Ok(Self {
            api_key: var(API_KEY_VAR),
            port,
            public: overrides.public,
            base_url: overrides
                .base_url
                .or_else(|| var(BASE_URL_VAR))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: overrides
                .model
                .or_else(|| var(MODEL_VAR))
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: overrides.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            upstream_timeout: Duration::from_secs(
                overrides
                    .upstream_timeout_secs
                    .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            ),
            mock_provider: overrides.mock_provider,
            relay_url: overrides
                .relay_url
                .or_else(|| var(RELAY_URL_VAR))
                .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string()),
            relay_timeout: Duration::from_secs(DEFAULT_RELAY_TIMEOUT_SECS),
        })
    }

    /// The relay cannot do anything useful without a credential, unless it is
    /// running against the mock provider.
    pub fn validate_for_serving(&self) -> Result<(), ConfigError> {
        if self.api_key.is_none() && !self.mock_provider {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        let host = if self.public { "0.0.0.0" } else { "127.0.0.1" };
        format!("{host}:{}", self.port)
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!("Invalid {key} value: {e}");
                Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value,
                    reason: e.to_string(),
                })
            }
        },
        None => {
            debug!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
