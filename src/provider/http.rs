//! HTTP provider for PokeAPI-shaped endpoints.
//!
//! Requires the `http` feature. Uses reqwest.
//!
//! ## Wire format
//!
//! `GET {base_url}/pokemon/{id}` answers with (abridged):
//!
//! ```json
//! {
//!   "name": "bulbasaur",
//!   "sprites": {
//!     "front_default": "https://.../1.png",
//!     "back_default": "https://.../back/1.png",
//!     "front_shiny": "https://.../shiny/1.png",
//!     "back_shiny": null
//!   }
//! }
//! ```
//!
//! Null sprites are left out of the variant mapping; unknown fields are
//! ignored.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{Provider, ProviderError};
use crate::config::{ConfigError, HttpConfig};
use crate::creature::{Creature, VariantKey};
use crate::identifier::CreatureId;

#[derive(Debug, Deserialize)]
struct WireCreature {
    name: String,
    #[serde(default)]
    sprites: WireSprites,
}

#[derive(Debug, Default, Deserialize)]
struct WireSprites {
    front_default: Option<String>,
    back_default: Option<String>,
    front_shiny: Option<String>,
    back_shiny: Option<String>,
}

impl From<WireCreature> for Creature {
    fn from(wire: WireCreature) -> Self {
        let WireSprites {
            front_default,
            back_default,
            front_shiny,
            back_shiny,
        } = wire.sprites;

        [
            (VariantKey::FrontDefault, front_default),
            (VariantKey::BackDefault, back_default),
            (VariantKey::FrontShiny, front_shiny),
            (VariantKey::BackShiny, back_shiny),
        ]
        .into_iter()
        .filter_map(|(key, reference)| reference.map(|r| (key, r)))
        .fold(Creature::new(wire.name), |creature, (key, reference)| {
            creature.with_variant(key, reference)
        })
    }
}

/// Decode a response body into a creature.
pub fn decode_creature(body: &[u8]) -> Result<Creature, ProviderError> {
    let wire: WireCreature = serde_json::from_slice(body)?;
    Ok(wire.into())
}

/// Provider that fetches creatures over HTTP.
#[derive(Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProvider {
    /// Build a provider from explicit settings.
    pub fn new(config: HttpConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a provider from `CREATURE_API_URL` / `CREATURE_API_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(HttpConfig::from_env()?)
    }

    /// Shorthand for the default timeout against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(HttpConfig {
            base_url: base_url.into(),
            ..HttpConfig::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn creature_url(&self, id: CreatureId) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn fetch(&self, id: CreatureId) -> Result<Creature, ProviderError> {
        let url = self.creature_url(id);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(ProviderError::NotFound(id)),
            status if !status.is_success() => {
                return Err(ProviderError::Status(status.as_u16()))
            }
            _ => {}
        }

        let body = response.bytes().await?;
        decode_creature(&body)
    }
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}
