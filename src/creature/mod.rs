//! Creature - the immutable resource a provider hands back.
//!
//! A creature is a display name plus a mapping from [`VariantKey`] to an
//! opaque reference (a sprite URL in practice). The browser holds it behind
//! an `Arc` and swaps it wholesale on every applied fetch.
//!
//! ```ignore
//! use creature_browser::{Creature, VariantKey};
//!
//! let bulbasaur = Creature::new("bulbasaur")
//!     .with_variant(VariantKey::FrontDefault, "https://.../1.png")
//!     .with_variant(VariantKey::BackDefault, "https://.../back/1.png");
//!
//! assert_eq!(bulbasaur.reference(VariantKey::BackShiny), None);
//! ```

mod variant;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use variant::{UnknownVariant, VariantKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    name: String,
    #[serde(default)]
    variants: BTreeMap<VariantKey, String>,
}

impl Creature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: BTreeMap::new(),
        }
    }

    /// Attach a reference for `key`, replacing any previous one.
    pub fn with_variant(mut self, key: VariantKey, reference: impl Into<String>) -> Self {
        self.variants.insert(key, reference.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &BTreeMap<VariantKey, String> {
        &self.variants
    }

    /// The reference for `key`, if this creature has one.
    pub fn reference(&self, key: VariantKey) -> Option<&str> {
        self.variants.get(&key).map(String::as_str)
    }

    pub fn has_variant(&self, key: VariantKey) -> bool {
        self.variants.contains_key(&key)
    }
}
