use std::fmt;

use crate::identifier::CreatureId;

/// Why a provider could not produce a creature.
///
/// The browser treats every variant the same way (the round yields nothing),
/// the distinction exists for logging and for provider-level tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No creature exists under this identifier.
    NotFound(CreatureId),
    /// The remote answered with a non-success status other than 404.
    Status(u16),
    /// The request never produced a response (connect, timeout, TLS...).
    Transport(String),
    /// The response body was not a creature.
    Decode(String),
    /// Any other failure.
    Other(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NotFound(id) => write!(f, "creature {} not found", id),
            ProviderError::Status(code) => write!(f, "provider answered with status {}", code),
            ProviderError::Transport(msg) => write!(f, "transport error: {}", msg),
            ProviderError::Decode(msg) => write!(f, "decode error: {}", msg),
            ProviderError::Other(msg) => write!(f, "provider error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Decode(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::Status(status.as_u16())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}
