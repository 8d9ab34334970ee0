//! Provider workflows: catalog refresh and favorites mutations.

use marquee_core::{BridgeError, Country};

use crate::bridge::RuntimeBridge;
use crate::state::Provider;
use crate::GlobalStore;

/// Load one provider list, absorbing failures into an empty list so a
/// flaky catalog cannot wedge boot.
async fn load_list(
    bridge: &dyn RuntimeBridge,
    country: &Country,
    favorites_only: bool,
) -> Vec<Provider> {
    match bridge.load_providers(country, favorites_only).await {
        Ok(providers) => providers,
        Err(err) => {
            tracing::warn!(
                code = err.code(),
                favorites_only,
                "failed to load providers: {err}"
            );
            Vec::new()
        }
    }
}

/// Refresh the provider catalog and favorites for a country.
///
/// Always marks the slice initialized and clears the loading flag, even
/// when both loads failed — the empty catalog is the committed result.
pub async fn refresh(store: &GlobalStore, bridge: &dyn RuntimeBridge, country: &Country) {
    store.providers().set_is_loading(true);

    let favorites = load_list(bridge, country, true).await;
    let all = load_list(bridge, country, false).await;

    store.providers().set_favorites(favorites);
    store.providers().set_providers(all);
    store.providers().set_initialized();
    store.providers().set_is_loading(false);
}

/// Mark a provider as favorite, then reload the favorites subset.
pub async fn add_favorite(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
    country: &Country,
    key: &str,
) -> Result<(), BridgeError> {
    store.providers().set_is_loading(true);
    let result = bridge.add_favorite_provider(country, key).await;
    store.providers().set_is_loading(false);
    result?;

    let favorites = load_list(bridge, country, true).await;
    store.providers().set_favorites(favorites);
    Ok(())
}

/// Remove a provider from favorites, then reload the favorites subset.
pub async fn remove_favorite(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
    country: &Country,
    key: &str,
) -> Result<(), BridgeError> {
    store.providers().set_is_loading(true);
    let result = bridge.remove_favorite_provider(country, key).await;
    store.providers().set_is_loading(false);
    result?;

    let favorites = load_list(bridge, country, true).await;
    store.providers().set_favorites(favorites);
    Ok(())
}
