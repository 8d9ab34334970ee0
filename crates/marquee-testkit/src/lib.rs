//! # Marquee Testkit
//!
//! Test doubles and scenario builders shared by the Marquee test suites:
//!
//! - [`MockBridge`]: a scripted [`RuntimeBridge`] with per-operation
//!   results, failure injection, and call recording
//! - [`RecordingLocaleSink`]: a [`LocaleSink`] that captures every
//!   language/direction notification in order
//! - scenario helpers for common starting states ([`ready_store`],
//!   [`provider`])
//!
//! Everything here uses interior mutability so a mock can be shared with
//! the code under test as `Arc<MockBridge>` and still be re-scripted or
//! inspected mid-test.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use marquee_app::bridge::{
    DeviceSettings, LocaleSink, RuntimeBridge, SearchPage, SearchRequest, UserPreferences,
};
use marquee_app::state::{AvailableUpdate, Provider};
use marquee_app::GlobalStore;
use marquee_core::{BridgeError, Country, Direction, Locale};

/// Install a compact fmt subscriber honoring `RUST_LOG` for test runs.
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Call recording
// =============================================================================

/// One recorded bridge invocation, in argument-carrying form.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCall {
    ValidateSession,
    Logout,
    LoadSettings,
    SetOnboarded(bool),
    LoadPreferences,
    UpdatePreferences { country: Country, language: Locale },
    LoadProviders { country: Country, favorites_only: bool },
    AddFavoriteProvider { country: Country, key: String },
    RemoveFavoriteProvider { country: Country, key: String },
    Search(SearchRequest),
    CheckUpdate,
    DownloadUpdate(String),
    InstallUpdate(String),
}

// =============================================================================
// MockBridge
// =============================================================================

/// Scripted [`RuntimeBridge`] for tests.
///
/// Defaults to the happy path: a valid session, un-onboarded settings, no
/// stored preferences, empty provider lists, an empty search page, and no
/// available update. Script deviations with the `with_*` builders before
/// sharing, or the `set_*` methods at any point after.
pub struct MockBridge {
    validate_session: Mutex<Result<(), BridgeError>>,
    logout: Mutex<Result<(), BridgeError>>,
    settings: Mutex<Result<DeviceSettings, BridgeError>>,
    set_onboarded: Mutex<Result<(), BridgeError>>,
    preferences: Mutex<Result<Option<UserPreferences>, BridgeError>>,
    update_preferences: Mutex<Option<BridgeError>>,
    providers: Mutex<Result<Vec<Provider>, BridgeError>>,
    favorites: Mutex<Result<Vec<Provider>, BridgeError>>,
    favorite_mutation: Mutex<Result<(), BridgeError>>,
    search: Mutex<Result<SearchPage, BridgeError>>,
    check_update: Mutex<Result<Option<AvailableUpdate>, BridgeError>>,
    download_update: Mutex<Result<(), BridgeError>>,
    install_update: Mutex<Result<(), BridgeError>>,
    calls: Mutex<Vec<BridgeCall>>,
}

impl Default for MockBridge {
    fn default() -> Self {
        Self {
            validate_session: Mutex::new(Ok(())),
            logout: Mutex::new(Ok(())),
            settings: Mutex::new(Ok(DeviceSettings::default())),
            set_onboarded: Mutex::new(Ok(())),
            preferences: Mutex::new(Ok(None)),
            update_preferences: Mutex::new(None),
            providers: Mutex::new(Ok(Vec::new())),
            favorites: Mutex::new(Ok(Vec::new())),
            favorite_mutation: Mutex::new(Ok(())),
            search: Mutex::new(Ok(SearchPage::default())),
            check_update: Mutex::new(Ok(None)),
            download_update: Mutex::new(Ok(())),
            install_update: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Scripting (builder form)
    // -------------------------------------------------------------------------

    pub fn with_validate_session(self, result: Result<(), BridgeError>) -> Self {
        *self.validate_session.lock() = result;
        self
    }

    pub fn with_logout(self, result: Result<(), BridgeError>) -> Self {
        *self.logout.lock() = result;
        self
    }

    pub fn with_settings(self, result: Result<DeviceSettings, BridgeError>) -> Self {
        *self.settings.lock() = result;
        self
    }

    pub fn with_preferences(self, result: Result<Option<UserPreferences>, BridgeError>) -> Self {
        *self.preferences.lock() = result;
        self
    }

    /// Make `update_preferences` fail; by default it echoes its arguments.
    pub fn with_update_preferences_error(self, error: BridgeError) -> Self {
        *self.update_preferences.lock() = Some(error);
        self
    }

    pub fn with_providers(self, result: Result<Vec<Provider>, BridgeError>) -> Self {
        *self.providers.lock() = result;
        self
    }

    pub fn with_favorites(self, result: Result<Vec<Provider>, BridgeError>) -> Self {
        *self.favorites.lock() = result;
        self
    }

    pub fn with_favorite_mutation(self, result: Result<(), BridgeError>) -> Self {
        *self.favorite_mutation.lock() = result;
        self
    }

    pub fn with_search(self, result: Result<SearchPage, BridgeError>) -> Self {
        *self.search.lock() = result;
        self
    }

    pub fn with_check_update(self, result: Result<Option<AvailableUpdate>, BridgeError>) -> Self {
        *self.check_update.lock() = result;
        self
    }

    pub fn with_download_update(self, result: Result<(), BridgeError>) -> Self {
        *self.download_update.lock() = result;
        self
    }

    pub fn with_install_update(self, result: Result<(), BridgeError>) -> Self {
        *self.install_update.lock() = result;
        self
    }

    /// Finish scripting and produce the shareable handle.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    // -------------------------------------------------------------------------
    // Re-scripting (mid-test)
    // -------------------------------------------------------------------------

    pub fn set_validate_session(&self, result: Result<(), BridgeError>) {
        *self.validate_session.lock() = result;
    }

    pub fn set_favorites(&self, result: Result<Vec<Provider>, BridgeError>) {
        *self.favorites.lock() = result;
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    /// Every bridge invocation so far, in order.
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: BridgeCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl RuntimeBridge for MockBridge {
    async fn validate_session(&self) -> Result<(), BridgeError> {
        self.record(BridgeCall::ValidateSession);
        self.validate_session.lock().clone()
    }

    async fn logout(&self) -> Result<(), BridgeError> {
        self.record(BridgeCall::Logout);
        self.logout.lock().clone()
    }

    async fn load_settings(&self) -> Result<DeviceSettings, BridgeError> {
        self.record(BridgeCall::LoadSettings);
        self.settings.lock().clone()
    }

    async fn set_onboarded(&self, onboarded: bool) -> Result<(), BridgeError> {
        self.record(BridgeCall::SetOnboarded(onboarded));
        self.set_onboarded.lock().clone()
    }

    async fn load_preferences(&self) -> Result<Option<UserPreferences>, BridgeError> {
        self.record(BridgeCall::LoadPreferences);
        self.preferences.lock().clone()
    }

    async fn update_preferences(
        &self,
        country: Country,
        language: Locale,
    ) -> Result<UserPreferences, BridgeError> {
        self.record(BridgeCall::UpdatePreferences { country, language });
        match self.update_preferences.lock().clone() {
            Some(error) => Err(error),
            None => Ok(UserPreferences { country, language }),
        }
    }

    async fn load_providers(
        &self,
        country: &Country,
        favorites_only: bool,
    ) -> Result<Vec<Provider>, BridgeError> {
        self.record(BridgeCall::LoadProviders {
            country: *country,
            favorites_only,
        });
        if favorites_only {
            self.favorites.lock().clone()
        } else {
            self.providers.lock().clone()
        }
    }

    async fn add_favorite_provider(&self, country: &Country, key: &str) -> Result<(), BridgeError> {
        self.record(BridgeCall::AddFavoriteProvider {
            country: *country,
            key: key.to_string(),
        });
        self.favorite_mutation.lock().clone()
    }

    async fn remove_favorite_provider(
        &self,
        country: &Country,
        key: &str,
    ) -> Result<(), BridgeError> {
        self.record(BridgeCall::RemoveFavoriteProvider {
            country: *country,
            key: key.to_string(),
        });
        self.favorite_mutation.lock().clone()
    }

    async fn search(&self, request: SearchRequest) -> Result<SearchPage, BridgeError> {
        self.record(BridgeCall::Search(request));
        self.search.lock().clone()
    }

    async fn check_update(&self) -> Result<Option<AvailableUpdate>, BridgeError> {
        self.record(BridgeCall::CheckUpdate);
        self.check_update.lock().clone()
    }

    async fn download_update(&self, update: &AvailableUpdate) -> Result<(), BridgeError> {
        self.record(BridgeCall::DownloadUpdate(update.version.clone()));
        self.download_update.lock().clone()
    }

    async fn install_update(&self, update: &AvailableUpdate) -> Result<(), BridgeError> {
        self.record(BridgeCall::InstallUpdate(update.version.clone()));
        self.install_update.lock().clone()
    }
}

// =============================================================================
// RecordingLocaleSink
// =============================================================================

/// One captured locale notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleEvent {
    Language(Locale),
    Direction(Direction),
}

/// [`LocaleSink`] that records every notification in order.
#[derive(Debug, Default)]
pub struct RecordingLocaleSink {
    events: Mutex<Vec<LocaleEvent>>,
}

impl RecordingLocaleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LocaleEvent> {
        self.events.lock().clone()
    }

    /// Just the language notifications, in order.
    pub fn languages(&self) -> Vec<Locale> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                LocaleEvent::Language(locale) => Some(*locale),
                LocaleEvent::Direction(_) => None,
            })
            .collect()
    }

    /// Just the direction notifications, in order.
    pub fn directions(&self) -> Vec<Direction> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                LocaleEvent::Direction(direction) => Some(*direction),
                LocaleEvent::Language(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl LocaleSink for RecordingLocaleSink {
    fn language_changed(&self, locale: Locale) {
        self.events.lock().push(LocaleEvent::Language(locale));
    }

    fn direction_changed(&self, direction: Direction) {
        self.events.lock().push(LocaleEvent::Direction(direction));
    }
}

// =============================================================================
// Scenario helpers
// =============================================================================

/// A store with every boot-gating slice already initialized: session,
/// preferences, and providers initialized, settings loaded with onboarding
/// complete. The readiness derivations have therefore flipped
/// `app.initialized` and `app.boot_initialized` to `true`.
pub fn ready_store() -> GlobalStore {
    let store = GlobalStore::new();
    mark_all_ready(&store);
    store
}

/// Drive an existing store to the all-slices-initialized state.
pub fn mark_all_ready(store: &GlobalStore) {
    store.session().set_initialized();
    store.settings().set_onboarded(true);
    store.preferences().set_initialized();
    store.providers().set_initialized();
}

/// A provider with the key as its display name and no icon.
pub fn provider(key: &str) -> Provider {
    Provider::new(key, key)
}

/// A minimal available update for a version string.
pub fn update(version: &str) -> AvailableUpdate {
    AvailableUpdate {
        version: version.to_string(),
        notes: None,
        date: None,
    }
}
