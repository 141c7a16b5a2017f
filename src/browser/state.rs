//! BrowserState - the synchronous heart of the browser.
//!
//! Every intent is a plain `&mut self` method. Intents that change the
//! current identifier hand back a [`FetchTicket`]; whoever drives the state
//! (see [`super::Browser`]) runs the fetch and feeds the outcome back through
//! [`BrowserState::resolve`] together with that ticket.
//!
//! Tickets carry a per-instance sequence number. Only the most recently
//! issued ticket can change what is displayed, so the last *request* wins no
//! matter in which order the provider answers.

use std::sync::Arc;

use crate::config::BrowserConfig;
use crate::creature::{Creature, VariantKey};
use crate::identifier::CreatureId;
use crate::provider::ProviderError;

use super::view::{Phase, View};

/// Tag attached to one outstanding fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    seq: u64,
    id: CreatureId,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }
}

/// What `resolve` did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The creature replaced whatever was loaded.
    Applied,
    /// The fetch failed; the loaded creature (if any) was kept.
    Failed,
    /// A newer request had been issued; the completion was ignored.
    Stale,
}

#[derive(Debug, Clone)]
struct Loaded {
    id: CreatureId,
    creature: Arc<Creature>,
}

#[derive(Debug, Clone)]
pub struct BrowserState {
    current_id: CreatureId,
    loaded: Option<Loaded>,
    selected: VariantKey,
    default_id: CreatureId,
    last_seq: u64,
    pending: Option<FetchTicket>,
}

impl BrowserState {
    /// Fresh state plus the ticket for the eager initial fetch.
    pub fn new(config: &BrowserConfig) -> (Self, FetchTicket) {
        let mut state = Self {
            current_id: config.default_id,
            loaded: None,
            selected: config.default_variant,
            default_id: config.default_id,
            last_seq: 0,
            pending: None,
        };
        let ticket = state.issue();
        (state, ticket)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Direct entry. Text that isn't an integer leaves everything untouched.
    pub fn set_id_from_text(&mut self, text: &str) -> Option<FetchTicket> {
        match CreatureId::parse(text) {
            Some(id) => Some(self.set_id(id)),
            None => {
                log::debug!("ignoring non-numeric id input {:?}", text);
                None
            }
        }
    }

    pub fn set_id(&mut self, id: CreatureId) -> FetchTicket {
        self.current_id = id;
        self.issue()
    }

    /// `current_id + 1`; `None` only on overflow.
    pub fn next(&mut self) -> Option<FetchTicket> {
        let id = self.current_id.succ()?;
        Some(self.set_id(id))
    }

    /// `current_id - 1`; `None` only on overflow.
    pub fn previous(&mut self) -> Option<FetchTicket> {
        let id = self.current_id.pred()?;
        Some(self.set_id(id))
    }

    pub fn reset(&mut self) -> FetchTicket {
        self.set_id(self.default_id)
    }

    /// Fetch the current identifier again, superseding anything outstanding.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Drop the loaded creature. Does not touch the identifier and does not
    /// cancel an outstanding fetch: if that fetch is still the latest when it
    /// completes, its creature shows up.
    pub fn clear(&mut self) {
        self.loaded = None;
    }

    // ------------------------------------------------------------------
    // Variant selection
    // ------------------------------------------------------------------

    pub fn select_variant(&mut self, key: VariantKey) {
        self.selected = key;
    }

    /// Textual selection; returns `false` (and changes nothing) for keys
    /// outside the variant set.
    pub fn select_variant_text(&mut self, text: &str) -> bool {
        match VariantKey::parse(text) {
            Some(key) => {
                self.select_variant(key);
                true
            }
            None => {
                log::debug!("ignoring unknown variant {:?}", text);
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Completions
    // ------------------------------------------------------------------

    /// Apply the outcome of the fetch issued with `ticket`.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Creature, ProviderError>,
    ) -> Resolution {
        if ticket.seq != self.last_seq {
            log::debug!(
                "discarding stale result for id {} (request #{}, latest #{})",
                ticket.id,
                ticket.seq,
                self.last_seq
            );
            return Resolution::Stale;
        }

        self.pending = None;
        match result {
            Ok(creature) => {
                log::info!("loaded {} for id {}", creature.name(), ticket.id);
                self.loaded = Some(Loaded {
                    id: ticket.id,
                    creature: Arc::new(creature),
                });
                Resolution::Applied
            }
            Err(err) => {
                log::warn!("fetch for id {} failed: {}", ticket.id, err);
                Resolution::Failed
            }
        }
    }

    /// Whether a completion for `ticket` would still be applied.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.last_seq
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn current_id(&self) -> CreatureId {
        self.current_id
    }

    pub fn id_text(&self) -> String {
        self.current_id.to_string()
    }

    pub fn selected_variant(&self) -> VariantKey {
        self.selected
    }

    pub fn creature(&self) -> Option<&Arc<Creature>> {
        self.loaded.as_ref().map(|l| &l.creature)
    }

    /// Identifier the held creature was fetched for.
    pub fn loaded_id(&self) -> Option<CreatureId> {
        self.loaded.as_ref().map(|l| l.id)
    }

    /// Reference for the selected variant of the held creature.
    pub fn reference(&self) -> Option<&str> {
        self.creature()
            .and_then(|creature| creature.reference(self.selected))
    }

    pub fn pending(&self) -> Option<FetchTicket> {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        match (&self.pending, &self.loaded) {
            (Some(ticket), _) => Phase::Loading(ticket.id),
            (None, Some(loaded)) => Phase::Loaded(loaded.id),
            (None, None) => Phase::Empty,
        }
    }

    pub fn view(&self) -> View {
        View::compose(
            self.current_id,
            self.phase(),
            self.selected,
            self.loaded.as_ref().map(|l| (l.id, &l.creature)),
        )
    }

    fn issue(&mut self) -> FetchTicket {
        self.last_seq += 1;
        let ticket = FetchTicket {
            seq: self.last_seq,
            id: self.current_id,
        };
        log::debug!("request #{} for id {}", ticket.seq, ticket.id);
        self.pending = Some(ticket);
        ticket
    }
}
