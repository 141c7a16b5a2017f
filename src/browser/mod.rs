//! Browser - identifier navigation, fetch sequencing, and variant selection.
//!
//! ## State machine
//!
//! ```text
//!                 create
//!                   │
//!                   ▼
//!   ┌───────► Loading(id) ──── navigate ────┐
//!   │          │       │                     │
//!   │  success │       │ failure,            ▼
//!   │          ▼       │ nothing held    Loading(id')
//!   │     Loaded(id)   ▼
//!   │          │     Empty
//!   └─navigate─┘
//!
//!   clear(): drops the creature from any state, keeps the id and any
//!            outstanding request.
//! ```
//!
//! Superseded requests are never cancelled at the transport level unless
//! `BrowserConfig::cancel_superseded` is set; either way their results are
//! discarded on arrival.
//!
//! ## Policies
//!
//! - A failed fetch keeps whatever creature was already shown.
//! - The selected variant persists across creature changes.

#[allow(clippy::module_inception)]
mod browser;
mod state;
mod view;

pub use browser::Browser;
pub use state::{BrowserState, FetchTicket, Resolution};
pub use view::{CreatureView, Phase, View};
