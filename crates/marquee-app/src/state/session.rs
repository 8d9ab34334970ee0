//! # Session, Settings, and Preferences Slices

use marquee_core::{Country, Locale};
use serde::{Deserialize, Serialize};

/// Whether the user holds a valid remote session.
///
/// `is_active` flipping to `false` after having been `true` triggers the
/// session reset protocol; the initial `false` does not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Session validation has completed at least once (pass or fail).
    pub initialized: bool,
    /// The remote session is currently valid.
    pub is_active: bool,
    /// A validation round-trip is in flight.
    pub is_loading: bool,
}

/// Local device settings (onboarding).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    pub initialized: bool,
    /// Whether the onboarding flow has been completed on this device.
    pub onboarded: bool,
}

/// The user's content locale/region choice.
///
/// `initialized` with both fields unset means the user has not picked yet;
/// the forced-dialog derivation reacts to exactly that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesState {
    pub initialized: bool,
    pub country: Option<Country>,
    pub language: Option<Locale>,
}
