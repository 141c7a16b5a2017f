use std::sync::Arc;

use serde::Serialize;

use crate::creature::{Creature, VariantKey};
use crate::identifier::CreatureId;

/// Where a browser is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum Phase {
    /// Nothing held and nothing outstanding.
    Empty,
    /// The latest request, for this identifier, has not completed yet.
    Loading(CreatureId),
    /// The latest request completed; a creature fetched for this identifier
    /// is held.
    Loaded(CreatureId),
}

impl Phase {
    pub fn is_loading(self) -> bool {
        matches!(self, Phase::Loading(_))
    }
}

/// The loaded creature as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureView {
    /// Identifier the creature was fetched for. May differ from the
    /// browser's current identifier after a failed fetch.
    pub id: CreatureId,
    pub name: String,
    /// `variants[selected]`, or `None` if the creature lacks that variant.
    pub reference: Option<String>,
}

/// Read-only snapshot of a browser, recomputed after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Current identifier as shown in the input box.
    pub id_text: String,
    pub phase: Phase,
    pub selected: VariantKey,
    pub creature: Option<CreatureView>,
}

impl View {
    pub(crate) fn compose(
        current_id: CreatureId,
        phase: Phase,
        selected: VariantKey,
        loaded: Option<(CreatureId, &Arc<Creature>)>,
    ) -> Self {
        Self {
            id_text: current_id.to_string(),
            phase,
            selected,
            creature: loaded.map(|(id, creature)| CreatureView {
                id,
                name: creature.name().to_string(),
                reference: creature.reference(selected).map(str::to_string),
            }),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.creature.as_ref().map(|c| c.name.as_str())
    }

    pub fn reference(&self) -> Option<&str> {
        self.creature.as_ref().and_then(|c| c.reference.as_deref())
    }
}
