//! Providers - where creatures come from.
//!
//! The browser only knows the [`Provider`] contract: one async call,
//! identifier in, creature or [`ProviderError`] out.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Browser (per session)            │
//! │  issues one fetch per identifier change       │
//! └──────────────────────────────────────────────┘
//!                        │ fetch(id)
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │               Provider trait                  │
//! └──────────────────────────────────────────────┘
//!            │                         │
//!            ▼                         ▼
//! ┌──────────────────┐      ┌──────────────────────┐
//! │ InMemoryProvider │      │     HttpProvider     │
//! │   (included)     │      │  (feature = "http")  │
//! └──────────────────┘      └──────────────────────┘
//! ```

mod error;
mod in_memory;
#[allow(clippy::module_inception)]
mod provider;

#[cfg(feature = "http")]
mod http;

pub use error::ProviderError;
pub use in_memory::InMemoryProvider;
pub use provider::Provider;

#[cfg(feature = "http")]
pub use http::{decode_creature, HttpProvider};
