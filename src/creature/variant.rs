use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which sprite of a creature is surfaced to the renderer.
///
/// The set is closed. Textual form is kebab-case (`back-shiny`); the
/// provider's snake_case spelling (`back_shiny`) is accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKey {
    #[default]
    FrontDefault,
    BackDefault,
    FrontShiny,
    BackShiny,
}

impl VariantKey {
    /// Every key, in the order a selector presents them.
    pub const ALL: [VariantKey; 4] = [
        VariantKey::FrontDefault,
        VariantKey::BackDefault,
        VariantKey::FrontShiny,
        VariantKey::BackShiny,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VariantKey::FrontDefault => "front-default",
            VariantKey::BackDefault => "back-default",
            VariantKey::FrontShiny => "front-shiny",
            VariantKey::BackShiny => "back-shiny",
        }
    }

    /// Button caption for the selector.
    pub fn label(self) -> &'static str {
        match self {
            VariantKey::FrontDefault => "Front",
            VariantKey::BackDefault => "Back",
            VariantKey::FrontShiny => "Shiny Front",
            VariantKey::BackShiny => "Shiny Back",
        }
    }

    /// Parse either spelling; `None` for anything outside the set.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.trim().to_ascii_lowercase().replace('_', "-");
        VariantKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by `VariantKey::from_str` for keys outside the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for VariantKey {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariantKey::parse(s).ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
