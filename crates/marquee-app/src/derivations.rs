//! # Derivation Graph
//!
//! The declarative subscription graph over [`GlobalState`]. Each watcher
//! observes a pure projection and reacts by mutating the store again; the
//! store's reentrant cascade drains every consequence before the triggering
//! mutate returns.
//!
//! All reactions are idempotent for a stabilized projection, which is what
//! makes the cascade converge: readiness flags are monotonic, the favorites
//! sync rewrites the same keys, the forced dialog only ever opens.
//!
//! Registration order matters and is fixed here: locale cascade, favorites
//! sync, favorites preference toggle, app readiness, boot readiness, session
//! reset, forced preferences dialog.

use std::sync::Arc;

use marquee_core::Store;

use crate::bridge::LocaleSink;
use crate::state::{GlobalState, SearchArguments};

/// Wire the full derivation graph onto a freshly-built store.
///
/// Called exactly once, from `GlobalStoreBuilder::build`, before the store
/// is handed to any caller.
pub(crate) fn register(store: &Store<GlobalState>, locale_sink: Arc<dyn LocaleSink>) {
    // Locale cascade: direction and collaborator notification are driven
    // from this one watcher regardless of which entry point changed the
    // locale (direct set_locale or the set_preferences atomic write).
    let locale_store = store.clone();
    store.watch(
        |s: &GlobalState| s.i18n.locale,
        move |locale| {
            locale_sink.language_changed(locale);
            let direction = locale.direction();
            locale_store.mutate(|s| s.i18n.direction = direction);
            locale_sink.direction_changed(direction);
        },
    );

    // Favorites sync. Watching the initialized flag alongside the favorites
    // list is what implements "defer until initialized": a favorites commit
    // that lands before the catalog finishes loading is picked up again the
    // moment the flag flips.
    let favorites_store = store.clone();
    store.watch(
        |s: &GlobalState| (s.providers.initialized, s.providers.favorites.clone()),
        move |_| sync_favorites(&favorites_store),
    );

    // Favorites preference toggle: on re-syncs, off removes only the
    // providers key and leaves the rest of the filter untouched.
    let prefer_store = store.clone();
    store.watch(
        |s: &GlobalState| s.browse.prefer_favorites,
        move |prefer| {
            if prefer {
                sync_favorites(&prefer_store);
            } else {
                prefer_store.mutate(|s| {
                    if let Some(args) = &mut s.browse.args {
                        args.providers = None;
                    }
                });
            }
        },
    );

    // App readiness: browsing is safe once every dependency reported in.
    // AND-reduction is commutative, so completion order does not matter.
    let app_ready_store = store.clone();
    store.watch(
        |s: &GlobalState| {
            s.providers.initialized
                && s.session.initialized
                && s.preferences.initialized
                && s.settings.initialized
        },
        move |ready| {
            if ready && !app_ready_store.get().app.initialized {
                tracing::debug!("all dependencies ready; marking app initialized");
                app_ready_store.mutate(|s| s.app.initialized = true);
            }
        },
    );

    // Boot readiness: providers & preferences are not required for boot
    // routing, only for browsing.
    let boot_ready_store = store.clone();
    store.watch(
        |s: &GlobalState| s.session.initialized && s.settings.initialized,
        move |ready| {
            if ready && !boot_ready_store.get().app.boot_initialized {
                tracing::debug!("session and settings ready; marking boot initialized");
                boot_ready_store.mutate(|s| s.app.boot_initialized = true);
            }
        },
    );

    // Session reset protocol: an actual transition away from active wipes
    // the whole aggregate back to cold-boot state. The watcher is seeded
    // with the initial `false`, so process start does not trigger it.
    let reset_store = store.clone();
    store.watch(
        |s: &GlobalState| s.session.is_active,
        move |is_active| {
            if !is_active {
                tracing::info!("session no longer active; resetting global state");
                reset_store.replace(GlobalState::default());
            }
        },
    );

    // Forced preferences dialog: a booted, onboarded, active session whose
    // preferences resolved without a country or language cannot browse, so
    // the dialog opens itself. One-directional; closing is handled by the
    // guarded toggle and set_preferences.
    let dialog_store = store.clone();
    store.watch(
        |s: &GlobalState| {
            s.app.boot_initialized
                && s.session.is_active
                && s.settings.onboarded
                && s.preferences.initialized
                && (s.preferences.country.is_none() || s.preferences.language.is_none())
                && !s.dialogs.preferences.is_open
        },
        move |missing_preferences| {
            if missing_preferences {
                tracing::debug!("preferences incomplete; forcing preferences dialog open");
                dialog_store.mutate(|s| s.dialogs.preferences.is_open = true);
            }
        },
    );
}

/// Write the deduplicated, first-seen-order favorite provider keys into the
/// browse filter. No-op until the catalog is initialized or while the
/// favorites preference is off.
///
/// An empty favorites list yields `Some(vec![])`: filter to nothing, which
/// is distinct from `None`, no provider filter.
fn sync_favorites(store: &Store<GlobalState>) {
    let state = store.get();
    if !state.providers.initialized || !state.browse.prefer_favorites {
        return;
    }
    let mut keys: Vec<String> = Vec::new();
    for provider in &state.providers.favorites {
        if !keys.contains(&provider.key) {
            keys.push(provider.key.clone());
        }
    }
    store.mutate(|s| {
        s.browse
            .args
            .get_or_insert_with(SearchArguments::default)
            .providers = Some(keys);
    });
}
