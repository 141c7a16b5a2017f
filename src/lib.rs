mod browser;
mod config;
mod creature;
mod identifier;
mod provider;

pub use browser::{Browser, BrowserState, CreatureView, FetchTicket, Phase, Resolution, View};
pub use config::{
    BrowserConfig, ConfigError, HttpConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_API_TIMEOUT_MS,
    ENV_API_URL,
};
pub use creature::{Creature, UnknownVariant, VariantKey};
pub use identifier::{CreatureId, InvalidCreatureId};
pub use provider::{InMemoryProvider, Provider, ProviderError};

#[cfg(feature = "http")]
pub use provider::{decode_creature, HttpProvider};

// Re-export so provider implementations outside this crate can use the same
// attribute without a direct dependency.
pub use async_trait::async_trait;
