//! Boot sequencing: the derived `app.initialized` and `app.boot_initialized`
//! flags over every completion order of their dependencies.

use marquee_app::{GlobalState, GlobalStore};
use marquee_testkit::mark_all_ready;

type InitOp = fn(&GlobalStore);

fn init_session(store: &GlobalStore) {
    store.session().set_initialized();
}

fn init_settings(store: &GlobalStore) {
    store.settings().set_onboarded(false);
}

fn init_preferences(store: &GlobalStore) {
    store.preferences().set_initialized();
}

fn init_providers(store: &GlobalStore) {
    store.providers().set_initialized();
}

const INIT_OPS: [InitOp; 4] = [init_session, init_settings, init_preferences, init_providers];

#[test]
fn test_starts_uninitialized() {
    let store = GlobalStore::new();
    let state = store.state();
    assert!(!state.app.initialized);
    assert!(!state.app.boot_initialized);
}

#[test]
fn test_app_initialized_in_every_completion_order() {
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let order = [a, b, c, d];
                    let mut seen = [false; 4];
                    for &i in &order {
                        seen[i] = true;
                    }
                    if seen != [true; 4] {
                        continue;
                    }

                    let store = GlobalStore::new();
                    for &i in &order[..3] {
                        INIT_OPS[i](&store);
                    }
                    assert!(
                        !store.state().app.initialized,
                        "initialized early with order {order:?}"
                    );
                    INIT_OPS[order[3]](&store);
                    assert!(
                        store.state().app.initialized,
                        "not initialized after order {order:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_boot_initialized_needs_only_session_and_settings() {
    let store = GlobalStore::new();

    store.session().set_initialized();
    assert!(!store.state().app.boot_initialized);

    store.settings().set_onboarded(false);
    let state = store.state();
    assert!(state.app.boot_initialized);
    // Browsing readiness still waits on preferences and providers.
    assert!(!state.app.initialized);
}

#[test]
fn test_readiness_is_monotonic_under_unrelated_churn() {
    let store = GlobalStore::new();
    mark_all_ready(&store);
    assert!(store.state().app.initialized);

    store.browse().set_query(Some("dune".into()));
    store.dialogs().toggle_watch_preferences();
    store.app().set_version("1.2.3");
    store.app().set_nightly(true);

    let state = store.state();
    assert!(state.app.initialized);
    assert!(state.app.boot_initialized);
}

#[test]
fn test_reset_returns_flags_to_cold_boot() {
    let store = GlobalStore::new();
    mark_all_ready(&store);
    store.session().set_is_active(true);

    store.session().set_is_active(false);
    assert_eq!(store.state(), GlobalState::default());

    // The graph stays wired: readiness derives again after the reset.
    mark_all_ready(&store);
    assert!(store.state().app.initialized);
}
