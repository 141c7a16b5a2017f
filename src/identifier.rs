//! CreatureId - the integer key the browser navigates over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a creature as known to a provider.
///
/// No range is enforced: zero, negative, and out-of-catalogue ids are
/// perfectly navigable. It's the provider that reports them as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(i64);

impl CreatureId {
    /// The identifier a fresh browser starts on and `reset()` returns to.
    pub const DEFAULT: CreatureId = CreatureId(1);

    pub const fn new(value: i64) -> Self {
        CreatureId(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Parse user-entered text. Surrounding whitespace is ignored; anything
    /// else that isn't an `i64` (including the empty string) is rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<i64>().ok().map(CreatureId)
    }

    /// The following identifier, or `None` at `i64::MAX`.
    pub fn succ(self) -> Option<Self> {
        self.0.checked_add(1).map(CreatureId)
    }

    /// The preceding identifier, or `None` at `i64::MIN`.
    pub fn pred(self) -> Option<Self> {
        self.0.checked_sub(1).map(CreatureId)
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        CreatureId::DEFAULT
    }
}

impl From<i64> for CreatureId {
    fn from(value: i64) -> Self {
        CreatureId(value)
    }
}

impl From<i32> for CreatureId {
    fn from(value: i32) -> Self {
        CreatureId(i64::from(value))
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned by `CreatureId::from_str` for text that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCreatureId(pub String);

impl fmt::Display for InvalidCreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a creature id: {:?}", self.0)
    }
}

impl std::error::Error for InvalidCreatureId {}

impl FromStr for CreatureId {
    type Err = InvalidCreatureId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CreatureId::parse(s).ok_or_else(|| InvalidCreatureId(s.to_string()))
    }
}
