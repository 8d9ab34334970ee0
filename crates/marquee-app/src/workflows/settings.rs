//! Settings workflows: device settings load and onboarding completion.

use marquee_core::BridgeError;

use crate::bridge::RuntimeBridge;
use crate::GlobalStore;

/// Load device-local settings and commit the onboarding flag.
pub async fn load_settings(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
) -> Result<(), BridgeError> {
    let settings = bridge.load_settings().await?;
    store.settings().set_onboarded(settings.onboarded);
    Ok(())
}

/// Persist onboarding completion, then commit it.
pub async fn complete_onboarding(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
) -> Result<(), BridgeError> {
    bridge.set_onboarded(true).await?;
    store.settings().set_onboarded(true);
    Ok(())
}
