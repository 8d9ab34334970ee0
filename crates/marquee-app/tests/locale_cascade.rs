//! The locale cascade: direction recomputation and collaborator
//! notification on every locale change, whichever entry point made it.

use std::sync::Arc;

use marquee_app::bridge::UserPreferences;
use marquee_app::{Country, Direction, GlobalStore, Locale};
use marquee_testkit::{LocaleEvent, RecordingLocaleSink};

fn store_with_sink() -> (GlobalStore, Arc<RecordingLocaleSink>) {
    let sink = Arc::new(RecordingLocaleSink::new());
    let store = GlobalStore::builder().locale_sink(sink.clone()).build();
    (store, sink)
}

#[test]
fn test_initial_locale_is_english_ltr() {
    let (store, sink) = store_with_sink();
    let state = store.state();
    assert_eq!(state.i18n.locale, Locale::En);
    assert_eq!(state.i18n.direction, Direction::Ltr);
    // Watchers are seeded at registration; no notification for the
    // initial value.
    assert!(sink.events().is_empty());
}

#[test]
fn test_locale_change_updates_direction_and_notifies() {
    let (store, sink) = store_with_sink();

    store.i18n().set_locale(Locale::Ar);

    let state = store.state();
    assert_eq!(state.i18n.locale, Locale::Ar);
    assert_eq!(state.i18n.direction, Direction::Rtl);
    assert_eq!(
        sink.events(),
        vec![
            LocaleEvent::Language(Locale::Ar),
            LocaleEvent::Direction(Direction::Rtl),
        ]
    );
}

#[test]
fn test_direction_notified_even_when_unchanged() {
    let (store, sink) = store_with_sink();

    store.i18n().set_locale(Locale::Fr);

    assert_eq!(store.state().i18n.direction, Direction::Ltr);
    assert_eq!(
        sink.events(),
        vec![
            LocaleEvent::Language(Locale::Fr),
            LocaleEvent::Direction(Direction::Ltr),
        ]
    );
}

#[test]
fn test_setting_same_locale_does_not_renotify() {
    let (store, sink) = store_with_sink();
    store.i18n().set_locale(Locale::De);
    sink.clear();

    store.i18n().set_locale(Locale::De);
    assert!(sink.events().is_empty());
}

#[test]
fn test_preferences_drive_the_same_cascade() {
    let (store, sink) = store_with_sink();

    store.preferences().set_preferences(Some(UserPreferences {
        country: Country::FR,
        language: Locale::Fr,
    }));

    let state = store.state();
    assert_eq!(state.i18n.locale, Locale::Fr);
    assert_eq!(state.preferences.language, Some(Locale::Fr));
    assert_eq!(sink.languages(), vec![Locale::Fr]);
    assert_eq!(sink.directions(), vec![Direction::Ltr]);
}

#[test]
fn test_rtl_round_trip() {
    let (store, sink) = store_with_sink();

    store.i18n().set_locale(Locale::He);
    store.i18n().set_locale(Locale::En);

    assert_eq!(store.state().i18n.direction, Direction::Ltr);
    assert_eq!(
        sink.directions(),
        vec![Direction::Rtl, Direction::Ltr]
    );
}
