//! # App Readiness Slice

use serde::{Deserialize, Serialize};

/// Aggregate readiness flags and build identity.
///
/// Both flags are monotonic: once `true` they only return to `false`
/// through a full store reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Browsing can start: providers, session, preferences, and settings
    /// are all initialized.
    pub initialized: bool,
    /// Boot routing can happen: session and settings are initialized.
    /// Deliberately excludes providers and preferences, which are only
    /// needed for browsing, not for the splash -> onboarding/login decision.
    pub boot_initialized: bool,
    /// Current application version, reported by the shell.
    pub version: Option<String>,
    /// Whether this is a nightly build.
    pub nightly: bool,
}
