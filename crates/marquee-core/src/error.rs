//! # Bridge Error Taxonomy
//!
//! Errors surfaced by the runtime bridge. Slice mutators are pure state
//! transitions and never fail; only bridge operations return these. Callers
//! translate them into slice mutations (expected failures) or rethrow them
//! for UI-level handling.

use thiserror::Error;

/// Error returned by runtime bridge operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The remote session is missing or no longer valid. Expected during
    /// normal operation; drives `session.is_active = false`.
    #[error("session is no longer valid")]
    InvalidSession,

    /// The backing service could not be reached. Often transient.
    #[error("server unavailable: {0}")]
    ServerUnavailable(String),

    /// Anything the bridge could not classify.
    #[error("unknown bridge error: {0}")]
    Unknown(String),
}

impl BridgeError {
    /// Stable code for logging and UI translation keys.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSession => "errors.session.invalid",
            Self::ServerUnavailable(_) => "errors.server.unavailable",
            Self::Unknown(_) => "errors.unknown",
        }
    }

    /// Whether this is the expected invalid-session signal.
    pub fn is_invalid_session(&self) -> bool {
        matches!(self, Self::InvalidSession)
    }

    /// Whether retrying without user action could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ServerUnavailable(_))
    }
}
