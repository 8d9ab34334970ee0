//! Workflow behavior against a scripted bridge: session validation,
//! preferences, settings, providers, search, and updates.

use assert_matches::assert_matches;

use marquee_app::bridge::{DeviceSettings, UserPreferences};
use marquee_app::state::{SortKey, UpdateProgress, UpdateStatus};
use marquee_app::workflows::session::SessionOutcome;
use marquee_app::workflows::{browse, providers, session, settings, updater};
use marquee_app::{BridgeError, Country, GlobalState, GlobalStore, Locale};
use marquee_testkit::{init_tracing, mark_all_ready, provider, update, BridgeCall, MockBridge};

fn unavailable() -> BridgeError {
    BridgeError::ServerUnavailable("down".into())
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn test_revalidate_valid_session() {
    init_tracing();
    let store = GlobalStore::new();
    let bridge = MockBridge::new();

    let outcome = session::revalidate(&store, &bridge).await;

    assert_matches!(outcome, Ok(SessionOutcome::Active));
    let state = store.state();
    assert!(state.session.is_active);
    assert!(state.session.initialized);
    assert!(!state.session.is_loading);
    assert_eq!(bridge.calls(), vec![BridgeCall::ValidateSession]);
}

#[tokio::test]
async fn test_revalidate_invalid_session_is_not_an_error() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new().with_validate_session(Err(BridgeError::InvalidSession));

    let outcome = session::revalidate(&store, &bridge).await;

    assert_matches!(outcome, Ok(SessionOutcome::Invalid));
    let state = store.state();
    assert!(!state.session.is_active);
    assert!(state.session.initialized);
    assert!(!state.session.is_loading);
}

#[tokio::test]
async fn test_revalidate_transport_failure_still_completes() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new().with_validate_session(Err(unavailable()));

    let outcome = session::revalidate(&store, &bridge).await;

    assert_matches!(outcome, Err(BridgeError::ServerUnavailable(_)));
    let state = store.state();
    assert!(!state.session.is_active);
    // A failed validation still counts as a completed one.
    assert!(state.session.initialized);
    assert!(!state.session.is_loading);
}

#[tokio::test]
async fn test_logout_triggers_full_reset() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new();
    mark_all_ready(&store);
    store.session().set_is_active(true);
    store.browse().set_query(Some("batman".into()));
    store.app().set_version("9.9.9");

    session::logout(&store, &bridge).await.unwrap();

    assert_eq!(bridge.calls(), vec![BridgeCall::Logout]);
    assert_eq!(store.state(), GlobalState::default());
}

#[tokio::test]
async fn test_logout_failure_leaves_session_active() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new().with_logout(Err(unavailable()));
    store.session().set_is_active(true);

    let result = session::logout(&store, &bridge).await;

    assert_matches!(result, Err(BridgeError::ServerUnavailable(_)));
    assert!(store.state().session.is_active);
}

// =============================================================================
// Preferences
// =============================================================================

#[tokio::test]
async fn test_load_preferences_skipped_without_active_session() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new();

    session::load_preferences(&store, &bridge).await;

    assert!(bridge.calls().is_empty());
    assert!(!store.state().preferences.initialized);
}

#[tokio::test]
async fn test_load_preferences_commits_stored_value() {
    let store = GlobalStore::new();
    store.session().set_is_active(true);
    let bridge = MockBridge::new().with_preferences(Ok(Some(UserPreferences {
        country: Country::DE,
        language: Locale::De,
    })));

    session::load_preferences(&store, &bridge).await;

    let state = store.state();
    assert!(state.preferences.initialized);
    assert_eq!(state.preferences.country, Some(Country::DE));
    assert_eq!(state.preferences.language, Some(Locale::De));
    assert_eq!(state.i18n.locale, Locale::De);
}

#[tokio::test]
async fn test_load_preferences_failure_falls_back_to_unset() {
    let store = GlobalStore::new();
    store.session().set_is_active(true);
    let bridge = MockBridge::new().with_preferences(Err(unavailable()));

    session::load_preferences(&store, &bridge).await;

    let state = store.state();
    assert!(state.preferences.initialized);
    assert_eq!(state.preferences.country, None);
    assert_eq!(state.preferences.language, None);
}

#[tokio::test]
async fn test_update_preferences_commits_echo() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new();

    session::update_preferences(&store, &bridge, Country::FR, Locale::Fr)
        .await
        .unwrap();

    let state = store.state();
    assert_eq!(state.preferences.country, Some(Country::FR));
    assert_eq!(state.preferences.language, Some(Locale::Fr));
    assert_eq!(state.i18n.locale, Locale::Fr);
    assert_eq!(
        bridge.calls(),
        vec![BridgeCall::UpdatePreferences {
            country: Country::FR,
            language: Locale::Fr,
        }]
    );
}

#[tokio::test]
async fn test_update_preferences_failure_leaves_slice_untouched() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new().with_update_preferences_error(unavailable());

    let result = session::update_preferences(&store, &bridge, Country::FR, Locale::Fr).await;

    assert_matches!(result, Err(BridgeError::ServerUnavailable(_)));
    let state = store.state();
    assert_eq!(state.preferences.country, None);
    assert_eq!(state.i18n.locale, Locale::En);
}

// =============================================================================
// Settings
// =============================================================================

#[tokio::test]
async fn test_load_settings_commits_onboarding_flag() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new().with_settings(Ok(DeviceSettings { onboarded: true }));

    settings::load_settings(&store, &bridge).await.unwrap();

    let state = store.state();
    assert!(state.settings.initialized);
    assert!(state.settings.onboarded);
}

#[tokio::test]
async fn test_complete_onboarding_persists_then_commits() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new();

    settings::complete_onboarding(&store, &bridge).await.unwrap();

    assert_eq!(bridge.calls(), vec![BridgeCall::SetOnboarded(true)]);
    assert!(store.state().settings.onboarded);
}

// =============================================================================
// Providers
// =============================================================================

#[tokio::test]
async fn test_refresh_loads_favorites_then_catalog() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new()
        .with_favorites(Ok(vec![provider("netflix")]))
        .with_providers(Ok(vec![provider("netflix"), provider("hulu")]));

    providers::refresh(&store, &bridge, &Country::US).await;

    let state = store.state();
    assert!(state.providers.initialized);
    assert!(!state.providers.is_loading);
    assert_eq!(state.providers.favorites, vec![provider("netflix")]);
    assert_eq!(
        state.providers.providers,
        vec![provider("netflix"), provider("hulu")]
    );
    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::LoadProviders {
                country: Country::US,
                favorites_only: true,
            },
            BridgeCall::LoadProviders {
                country: Country::US,
                favorites_only: false,
            },
        ]
    );
    // The favorites synchronizer ran off the refreshed favorites.
    let args = state.browse.args.expect("args populated");
    assert_eq!(args.providers, Some(vec!["netflix".to_string()]));
}

#[tokio::test]
async fn test_refresh_absorbs_catalog_failures() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new()
        .with_favorites(Err(unavailable()))
        .with_providers(Err(unavailable()));

    providers::refresh(&store, &bridge, &Country::US).await;

    let state = store.state();
    assert!(state.providers.initialized);
    assert!(!state.providers.is_loading);
    assert!(state.providers.providers.is_empty());
    assert!(state.providers.favorites.is_empty());
}

#[tokio::test]
async fn test_add_favorite_reloads_favorites() {
    let store = GlobalStore::new();
    store.providers().set_initialized();
    let bridge = MockBridge::new().with_favorites(Ok(vec![provider("hulu")]));

    providers::add_favorite(&store, &bridge, &Country::US, "hulu")
        .await
        .unwrap();

    let state = store.state();
    assert!(!state.providers.is_loading);
    assert_eq!(state.providers.favorites, vec![provider("hulu")]);
    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::AddFavoriteProvider {
                country: Country::US,
                key: "hulu".to_string(),
            },
            BridgeCall::LoadProviders {
                country: Country::US,
                favorites_only: true,
            },
        ]
    );
}

#[tokio::test]
async fn test_remove_favorite_failure_skips_reload() {
    let store = GlobalStore::new();
    store.providers().set_favorites(vec![provider("hulu")]);
    let bridge = MockBridge::new().with_favorite_mutation(Err(unavailable()));

    let result = providers::remove_favorite(&store, &bridge, &Country::US, "hulu").await;

    assert_matches!(result, Err(BridgeError::ServerUnavailable(_)));
    let state = store.state();
    assert!(!state.providers.is_loading);
    assert_eq!(state.providers.favorites, vec![provider("hulu")]);
    assert_eq!(
        bridge.calls(),
        vec![BridgeCall::RemoveFavoriteProvider {
            country: Country::US,
            key: "hulu".to_string(),
        }]
    );
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_skipped_without_country() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new();

    let page = browse::run_search(&store, &bridge).await.unwrap();

    assert_eq!(page, None);
    assert!(bridge.calls().is_empty());
}

#[tokio::test]
async fn test_search_request_assembled_from_slices() {
    let store = GlobalStore::new();
    store.preferences().set_preferences(Some(UserPreferences {
        country: Country::GB,
        language: Locale::En,
    }));
    store.browse().set_query(Some("dune".into()));
    store.browse().set_sort_key(SortKey::ReleasedAt);
    let bridge = MockBridge::new();

    let page = browse::run_search(&store, &bridge).await.unwrap();

    assert!(page.is_some());
    let calls = bridge.calls();
    assert_matches!(&calls[..], [BridgeCall::Search(request)] => {
        assert_eq!(request.country, Country::GB);
        assert_eq!(request.language, Some(Locale::En));
        assert_eq!(request.query.as_deref(), Some("dune"));
        assert_eq!(request.sort_key, SortKey::ReleasedAt);
    });
}

// =============================================================================
// Updater
// =============================================================================

#[tokio::test]
async fn test_check_commits_available_update() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new().with_check_update(Ok(Some(update("2.0.0"))));

    updater::check(&store, &bridge).await.unwrap();

    let state = store.state();
    assert_eq!(state.updater.status, UpdateStatus::Available);
    assert_eq!(state.updater.available_update, Some(update("2.0.0")));
    assert!(state.updater.last_checked.is_some());
}

#[tokio::test]
async fn test_check_clears_stale_update() {
    let store = GlobalStore::new();
    store.updater().set_status(UpdateStatus::Available);
    store.updater().set_available_update(Some(update("2.0.0")));
    let bridge = MockBridge::new();

    updater::check(&store, &bridge).await.unwrap();

    let state = store.state();
    assert_eq!(state.updater.status, UpdateStatus::NoUpdate);
    assert_eq!(state.updater.available_update, None);
}

#[tokio::test]
async fn test_check_failure_propagates() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new().with_check_update(Err(unavailable()));

    let result = updater::check(&store, &bridge).await;

    assert_matches!(result, Err(BridgeError::ServerUnavailable(_)));
    let state = store.state();
    assert_eq!(state.updater.status, UpdateStatus::NoUpdate);
    assert!(state.updater.last_checked.is_some());
}

#[tokio::test]
async fn test_download_and_install_runs_to_installed() {
    let store = GlobalStore::new();
    store.updater().set_available_update(Some(update("2.0.0")));
    let bridge = MockBridge::new();

    updater::download_and_install(&store, &bridge).await.unwrap();

    assert_eq!(
        store.state().updater.progress,
        Some(UpdateProgress::Installed)
    );
    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::DownloadUpdate("2.0.0".to_string()),
            BridgeCall::InstallUpdate("2.0.0".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_download_failure_clears_progress() {
    let store = GlobalStore::new();
    store.updater().set_available_update(Some(update("2.0.0")));
    let bridge = MockBridge::new().with_download_update(Err(unavailable()));

    let result = updater::download_and_install(&store, &bridge).await;

    assert_matches!(result, Err(BridgeError::ServerUnavailable(_)));
    assert_eq!(store.state().updater.progress, None);
    assert_eq!(bridge.calls(), vec![BridgeCall::DownloadUpdate("2.0.0".to_string())]);
}

#[tokio::test]
async fn test_download_and_install_without_update_is_a_no_op() {
    let store = GlobalStore::new();
    let bridge = MockBridge::new();

    updater::download_and_install(&store, &bridge).await.unwrap();

    assert!(bridge.calls().is_empty());
    assert_eq!(store.state().updater.progress, None);
}
