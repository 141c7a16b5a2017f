use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::state::{BrowserState, FetchTicket, Resolution};
use super::view::{Phase, View};
use crate::config::BrowserConfig;
use crate::creature::{Creature, VariantKey};
use crate::identifier::CreatureId;
use crate::provider::{Provider, ProviderError};

/// A finished fetch on its way back to the browser.
struct Completion {
    ticket: FetchTicket,
    result: Result<Creature, ProviderError>,
}

/// Sends exactly one completion per fetch task, even if the task is
/// aborted or the provider panics.
struct Reporter {
    ticket: FetchTicket,
    tx: mpsc::UnboundedSender<Completion>,
    sent: bool,
}

impl Reporter {
    fn report(mut self, result: Result<Creature, ProviderError>) {
        self.sent = true;
        // The receiver lives inside the browser; if it's gone so is the browser.
        let _ = self.tx.send(Completion {
            ticket: self.ticket,
            result,
        });
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        if !self.sent {
            let _ = self.tx.send(Completion {
                ticket: self.ticket,
                result: Err(ProviderError::Other("fetch abandoned".into())),
            });
        }
    }
}

/// Async driver around [`BrowserState`].
///
/// Intents are synchronous. Each one that changes the identifier spawns the
/// provider call on the tokio runtime; results come back over a channel and
/// are applied, one at a time, when the owner calls [`Browser::pump`],
/// [`Browser::next_completion`] or [`Browser::settle`].
///
/// ## Example
///
/// ```ignore
/// use creature_browser::{Browser, BrowserConfig, InMemoryProvider};
///
/// let mut browser = Browser::new(provider, BrowserConfig::default());
/// browser.settle().await;
/// println!("{:?}", browser.view().name());
///
/// browser.next();
/// browser.select_variant_text("back-shiny");
/// browser.settle().await;
/// ```
pub struct Browser<P> {
    state: BrowserState,
    provider: Arc<P>,
    config: BrowserConfig,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: Option<JoinHandle<()>>,
    view: watch::Sender<View>,
}

impl<P: Provider + 'static> Browser<P> {
    /// Create a browser and start fetching the default identifier.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(provider: P, config: BrowserConfig) -> Self {
        Self::with_shared(Arc::new(provider), config)
    }

    /// Like [`Browser::new`] for a provider shared with other owners.
    pub fn with_shared(provider: Arc<P>, config: BrowserConfig) -> Self {
        let (state, ticket) = BrowserState::new(&config);
        let (tx, rx) = mpsc::unbounded_channel();
        let (view, _) = watch::channel(state.view());

        let mut browser = Self {
            state,
            provider,
            config,
            tx,
            rx,
            in_flight: None,
            view,
        };
        browser.dispatch(ticket);
        browser
    }

    // ========================================================================
    // Intents
    // ========================================================================

    /// Direct entry; returns `false` and changes nothing for non-numeric text.
    pub fn set_id_from_text(&mut self, text: &str) -> bool {
        match self.state.set_id_from_text(text) {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    pub fn set_id(&mut self, id: CreatureId) {
        let ticket = self.state.set_id(id);
        self.dispatch(ticket);
    }

    pub fn next(&mut self) -> bool {
        match self.state.next() {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.state.previous() {
            Some(ticket) => {
                self.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        let ticket = self.state.reset();
        self.dispatch(ticket);
    }

    pub fn refresh(&mut self) {
        let ticket = self.state.refresh();
        self.dispatch(ticket);
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.publish();
    }

    pub fn select_variant(&mut self, key: VariantKey) {
        self.state.select_variant(key);
        self.publish();
    }

    pub fn select_variant_text(&mut self, text: &str) -> bool {
        let selected = self.state.select_variant_text(text);
        if selected {
            self.publish();
        }
        selected
    }

    // ========================================================================
    // Completions
    // ========================================================================

    /// Apply every completion that has already arrived, without waiting.
    /// Returns how many were processed (stale ones included).
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(completion) = self.rx.try_recv() {
            self.apply(completion);
            processed += 1;
        }
        processed
    }

    /// Wait for the next completion and apply it.
    pub async fn next_completion(&mut self) -> Option<Resolution> {
        let completion = self.rx.recv().await?;
        Some(self.apply(completion))
    }

    /// Apply completions until the latest request has been resolved, then
    /// drain whatever else already arrived.
    pub async fn settle(&mut self) {
        while self.state.pending().is_some() {
            if self.next_completion().await.is_none() {
                break;
            }
        }
        self.pump();
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view()
    }

    /// Receiver that sees a fresh [`View`] after every change.
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.view.subscribe()
    }

    pub fn current_id(&self) -> CreatureId {
        self.state.current_id()
    }

    pub fn id_text(&self) -> String {
        self.state.id_text()
    }

    pub fn creature(&self) -> Option<&Arc<Creature>> {
        self.state.creature()
    }

    pub fn selected_variant(&self) -> VariantKey {
        self.state.selected_variant()
    }

    pub fn reference(&self) -> Option<&str> {
        self.state.reference()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn dispatch(&mut self, ticket: FetchTicket) {
        if self.config.cancel_superseded {
            if let Some(handle) = self.in_flight.take() {
                handle.abort();
            }
        }

        let provider = Arc::clone(&self.provider);
        let reporter = Reporter {
            ticket,
            tx: self.tx.clone(),
            sent: false,
        };
        self.in_flight = Some(tokio::spawn(async move {
            let result = provider.fetch(ticket.id()).await;
            reporter.report(result);
        }));

        self.publish();
    }

    fn apply(&mut self, completion: Completion) -> Resolution {
        let resolution = self.state.resolve(completion.ticket, completion.result);
        if resolution != Resolution::Stale {
            self.publish();
        }
        resolution
    }

    fn publish(&self) {
        let next = self.state.view();
        self.view.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}
