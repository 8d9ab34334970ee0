//! Updater workflows: update checks and download/install progression.
//!
//! The check interval and the update-binary delivery mechanics are owned by
//! the shell; these workflows only drive the updater slice.

use chrono::Utc;
use marquee_core::BridgeError;

use crate::bridge::RuntimeBridge;
use crate::state::{UpdateProgress, UpdateStatus};
use crate::GlobalStore;

/// Check for an update and commit the outcome.
pub async fn check(store: &GlobalStore, bridge: &dyn RuntimeBridge) -> Result<(), BridgeError> {
    store.updater().set_last_checked(Some(Utc::now()));

    match bridge.check_update().await {
        Ok(Some(update)) => {
            tracing::debug!(version = %update.version, "update available");
            store.updater().set_status(UpdateStatus::Available);
            store.updater().set_available_update(Some(update));
            Ok(())
        }
        Ok(None) => {
            store.updater().set_status(UpdateStatus::NoUpdate);
            store.updater().set_available_update(None);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(code = err.code(), "update check failed: {err}");
            Err(err)
        }
    }
}

/// Download and install the available update, driving `progress` through
/// its stages. No-op when no update is available.
///
/// On failure the progress marker is cleared so the UI falls back to the
/// plain "update available" presentation.
pub async fn download_and_install(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
) -> Result<(), BridgeError> {
    let Some(update) = store.state().updater.available_update else {
        return Ok(());
    };

    store.updater().set_progress(Some(UpdateProgress::Downloading));
    if let Err(err) = bridge.download_update(&update).await {
        tracing::warn!(code = err.code(), "update download failed: {err}");
        store.updater().set_progress(None);
        return Err(err);
    }
    store.updater().set_progress(Some(UpdateProgress::Downloaded));

    store.updater().set_progress(Some(UpdateProgress::Installing));
    if let Err(err) = bridge.install_update(&update).await {
        tracing::warn!(code = err.code(), "update install failed: {err}");
        store.updater().set_progress(None);
        return Err(err);
    }
    store.updater().set_progress(Some(UpdateProgress::Installed));
    Ok(())
}
