use async_trait::async_trait;

use super::ProviderError;
use crate::creature::Creature;
use crate::identifier::CreatureId;

/// Source of creatures, keyed by identifier.
///
/// Implementations might include:
/// - `InMemoryProvider` - a fixed catalogue for tests and demos
/// - `HttpProvider` - a PokeAPI-shaped REST endpoint (feature `http`)
///
/// Retries and timeouts, if any, live in the implementation. The browser
/// calls `fetch` exactly once per issued request and never waits on it.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn fetch(&self, id: CreatureId) -> Result<Creature, ProviderError>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for std::sync::Arc<P> {
    async fn fetch(&self, id: CreatureId) -> Result<Creature, ProviderError> {
        (**self).fetch(id).await
    }
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Box<P> {
    async fn fetch(&self, id: CreatureId) -> Result<Creature, ProviderError> {
        (**self).fetch(id).await
    }
}
