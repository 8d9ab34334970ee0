//! Session workflows: validation, logout, and preference loading.

use marquee_core::{BridgeError, Country, Locale};

use crate::bridge::RuntimeBridge;
use crate::GlobalStore;

/// Result of a session validation round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The session is valid and active.
    Active,
    /// The bridge reported the expected invalid-session signal. Navigation
    /// to login (on private routes) is the UI layer's job.
    Invalid,
}

/// Validate the remote session and commit the result.
///
/// Always leaves `session.is_loading == false` and `session.initialized ==
/// true`, whatever the bridge said — a failed validation still counts as a
/// completed one for boot sequencing.
pub async fn revalidate(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
) -> Result<SessionOutcome, BridgeError> {
    store.session().set_is_loading(true);

    let outcome = match bridge.validate_session().await {
        Ok(()) => {
            store.session().set_is_active(true);
            Ok(SessionOutcome::Active)
        }
        Err(BridgeError::InvalidSession) => {
            store.session().set_is_active(false);
            Ok(SessionOutcome::Invalid)
        }
        Err(err) => {
            tracing::warn!(code = err.code(), "session validation failed: {err}");
            store.session().set_is_active(false);
            Err(err)
        }
    };

    store.session().set_is_loading(false);
    store.session().set_initialized();
    outcome
}

/// Handle the shell's session-changed push event by revalidating.
pub async fn handle_session_event(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
) -> Result<SessionOutcome, BridgeError> {
    revalidate(store, bridge).await
}

/// Terminate the session. Deactivating the session triggers the reset
/// protocol through the derivation graph.
pub async fn logout(store: &GlobalStore, bridge: &dyn RuntimeBridge) -> Result<(), BridgeError> {
    bridge.logout().await?;
    store.session().set_is_active(false);
    Ok(())
}

/// Load the user's content preferences once the session is active.
///
/// Load failures fall back to unset preferences; the slice is marked
/// initialized either way so boot can proceed to the forced preferences
/// dialog instead of hanging.
pub async fn load_preferences(store: &GlobalStore, bridge: &dyn RuntimeBridge) {
    if !store.state().session.is_active {
        return;
    }

    match bridge.load_preferences().await {
        Ok(preferences) => store.preferences().set_preferences(preferences),
        Err(err) => {
            tracing::warn!(
                code = err.code(),
                "failed to load preferences, falling back to unset: {err}"
            );
        }
    }
    store.preferences().set_initialized();
}

/// Persist new preferences and commit the stored value.
///
/// Errors propagate to the caller for UI handling (toast); the slice is
/// left untouched on failure.
pub async fn update_preferences(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
    country: Country,
    language: Locale,
) -> Result<(), BridgeError> {
    let stored = bridge.update_preferences(country, language).await?;
    store.preferences().set_preferences(Some(stored));
    Ok(())
}
