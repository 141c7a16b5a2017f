//! Test fixtures: the bulbasaur/ivysaur catalogue and a provider whose
//! completions the test releases by hand.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use creature_browser::{
    async_trait, Creature, CreatureId, InMemoryProvider, Provider, ProviderError, VariantKey,
};
use tokio::sync::Semaphore;

pub fn creature(name: &str, suffix: &str) -> Creature {
    Creature::new(name)
        .with_variant(VariantKey::FrontDefault, format!("fd{}", suffix))
        .with_variant(VariantKey::BackDefault, format!("bd{}", suffix))
        .with_variant(VariantKey::FrontShiny, format!("fs{}", suffix))
        .with_variant(VariantKey::BackShiny, format!("bs{}", suffix))
}

pub fn bulbasaur() -> Creature {
    creature("bulbasaur", "1")
}

pub fn ivysaur() -> Creature {
    creature("ivysaur", "2")
}

/// Provider answering 1 → bulbasaur and 2 → ivysaur; everything else is
/// not found.
pub fn scenario_provider() -> InMemoryProvider {
    InMemoryProvider::new().with(1, bulbasaur()).with(2, ivysaur())
}

/// Provider with `creature-N` for every N in `1..=count`.
pub fn numbered_provider(count: i64) -> InMemoryProvider {
    let provider = InMemoryProvider::new();
    for n in 1..=count {
        provider.insert(n, creature(&format!("creature-{}", n), &n.to_string()));
    }
    provider
}

/// Wraps an in-memory provider; each fetch for an id blocks until the test
/// calls `release(id)`, so completion order is under test control.
#[derive(Clone)]
pub struct GatedProvider {
    inner: InMemoryProvider,
    gates: Arc<Mutex<HashMap<CreatureId, Arc<Semaphore>>>>,
}

impl GatedProvider {
    pub fn new(inner: InMemoryProvider) -> Self {
        Self {
            inner,
            gates: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Let one pending (or future) fetch for `id` through.
    pub fn release(&self, id: i64) {
        self.gate(CreatureId::new(id)).add_permits(1);
    }

    /// Ids that made it past their gate, in completion order.
    pub fn completed(&self) -> Vec<CreatureId> {
        self.inner.calls()
    }

    fn gate(&self, id: CreatureId) -> Arc<Semaphore> {
        let mut gates = self.gates.lock().unwrap();
        gates
            .entry(id)
            .or_insert_with(|| Arc::new(Semaphore::new(0)))
            .clone()
    }
}

#[async_trait]
impl Provider for GatedProvider {
    async fn fetch(&self, id: CreatureId) -> Result<Creature, ProviderError> {
        let gate = self.gate(id);
        let permit = gate
            .acquire()
            .await
            .map_err(|e| ProviderError::Other(e.to_string()))?;
        permit.forget();
        self.inner.fetch(id).await
    }
}

/// Provider that blows up on every call.
pub struct PanickingProvider;

#[async_trait]
impl Provider for PanickingProvider {
    async fn fetch(&self, id: CreatureId) -> Result<Creature, ProviderError> {
        panic!("provider exploded on {}", id);
    }
}
