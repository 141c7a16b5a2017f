//! Configuration for the browser and the HTTP provider.
//!
//! Both structs have sensible defaults and deserialize from JSON, so an
//! embedding application can load them from its own settings file. The
//! HTTP settings can also be read from the environment:
//!
//! | Variable                  | Field      | Default                     |
//! |---------------------------|------------|-----------------------------|
//! | `CREATURE_API_URL`        | `base_url` | `https://pokeapi.co/api/v2` |
//! | `CREATURE_API_TIMEOUT_MS` | `timeout`  | `10000`                     |

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::creature::VariantKey;
use crate::identifier::CreatureId;

pub const ENV_API_URL: &str = "CREATURE_API_URL";
pub const ENV_API_TIMEOUT_MS: &str = "CREATURE_API_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one browser instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Identifier fetched on creation and restored by `reset()`.
    pub default_id: CreatureId,
    /// Variant selected on creation.
    pub default_variant: VariantKey,
    /// Abort the task of a superseded fetch instead of letting it run to
    /// completion and be discarded. Observable state is the same either way.
    pub cancel_superseded: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_id: CreatureId::DEFAULT,
            default_variant: VariantKey::default(),
            cancel_superseded: false,
        }
    }
}

impl BrowserConfig {
    pub fn with_default_id(mut self, id: impl Into<CreatureId>) -> Self {
        self.default_id = id.into();
        self
    }

    pub fn with_default_variant(mut self, variant: VariantKey) -> Self {
        self.default_variant = variant;
        self
    }

    pub fn cancel_superseded(mut self, cancel: bool) -> Self {
        self.cancel_superseded = cancel;
        self
    }
}

/// Settings for the HTTP provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Root of the API; `/pokemon/{id}` is appended.
    pub base_url: String,
    /// Whole-request timeout.
    #[serde(with = "duration_ms")]
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::Invalid {
                    key: ENV_API_URL,
                    value: url.to_string(),
                });
            }
            config.base_url = url.to_string();
        }

        if let Some(raw) = lookup(ENV_API_TIMEOUT_MS) {
            let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_API_TIMEOUT_MS,
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A setting had a value that could not be used.
    Invalid { key: &'static str, value: String },
    /// The HTTP client could not be constructed.
    Client(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
            ConfigError::Client(msg) => write!(f, "http client error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
