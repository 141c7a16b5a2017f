//! InMemoryProvider - HashMap-backed provider for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{Provider, ProviderError};
use crate::creature::Creature;
use crate::identifier::CreatureId;

/// In-memory catalogue of creatures.
///
/// Clone-friendly via Arc: clones share the catalogue and the call log, so a
/// test can hand one clone to a browser and inspect the other.
#[derive(Clone, Default)]
pub struct InMemoryProvider {
    catalogue: Arc<RwLock<HashMap<CreatureId, Creature>>>,
    calls: Arc<RwLock<Vec<CreatureId>>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, id: impl Into<CreatureId>, creature: Creature) -> Self {
        self.insert(id, creature);
        self
    }

    /// Add or replace a creature. Returns the previous entry, if any.
    pub fn insert(&self, id: impl Into<CreatureId>, creature: Creature) -> Option<Creature> {
        match self.catalogue.write() {
            Ok(mut catalogue) => catalogue.insert(id.into(), creature),
            Err(poisoned) => poisoned.into_inner().insert(id.into(), creature),
        }
    }

    pub fn remove(&self, id: impl Into<CreatureId>) -> Option<Creature> {
        match self.catalogue.write() {
            Ok(mut catalogue) => catalogue.remove(&id.into()),
            Err(poisoned) => poisoned.into_inner().remove(&id.into()),
        }
    }

    /// Every identifier fetched so far, in request order.
    pub fn calls(&self) -> Vec<CreatureId> {
        match self.calls.read() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn call_count(&self) -> usize {
        match self.calls.read() {
            Ok(calls) => calls.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    fn record(&self, id: CreatureId) -> Result<(), ProviderError> {
        self.calls
            .write()
            .map_err(|_| ProviderError::Other("call log poisoned".into()))?
            .push(id);
        Ok(())
    }
}

#[async_trait]
impl Provider for InMemoryProvider {
    async fn fetch(&self, id: CreatureId) -> Result<Creature, ProviderError> {
        self.record(id)?;
        let catalogue = self
            .catalogue
            .read()
            .map_err(|_| ProviderError::Other("catalogue poisoned".into()))?;
        catalogue.get(&id).cloned().ok_or(ProviderError::NotFound(id))
    }
}
