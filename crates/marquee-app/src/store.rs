//! # GlobalStore
//!
//! The process-wide store: the [`GlobalState`] aggregate wrapped with
//! slice-scoped mutator surfaces and the derivation graph, which is wired
//! during construction so no caller can observe a store without its
//! reactions.
//!
//! Mutators are pure state transitions: they never fail and never cross
//! slice boundaries. The two sanctioned exceptions live in
//! [`PreferencesOps::set_preferences`] (atomic locale write + dialog close)
//! and the guarded close in [`DialogsOps::toggle_preferences`]; everything
//! else crosses slices only through the derivation graph.

use std::sync::Arc;

use marquee_core::{Locale, Store, StoreConfig, WatchHandle};

use crate::bridge::{LocaleSink, NoopLocaleSink, UserPreferences};
use crate::derivations;
use crate::state::{
    AvailableUpdate, GlobalState, Provider, SearchArguments, SortKey, UpdateProgress, UpdateStatus,
};
use chrono::{DateTime, Utc};

/// The process-wide reactive store.
///
/// Cheap to clone; clones share state and watchers. Construct once per
/// process with [`GlobalStore::new`] or [`GlobalStore::builder`].
#[derive(Clone)]
pub struct GlobalStore {
    store: Store<GlobalState>,
}

impl GlobalStore {
    /// Create a store with a no-op locale sink and default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> GlobalStoreBuilder {
        GlobalStoreBuilder::default()
    }

    /// Snapshot the full aggregate.
    pub fn state(&self) -> GlobalState {
        self.store.get()
    }

    /// Restore the initial aggregate. Normally driven by the session reset
    /// derivation; exposed for shells and tests.
    pub fn reset(&self) {
        self.store.replace(GlobalState::default());
    }

    /// Subscribe to a projection of the aggregate, for UI-driven derived
    /// display logic outside the core's own graph.
    pub fn watch<V, F, R>(&self, selector: F, reaction: R) -> WatchHandle<GlobalState>
    where
        V: Clone + PartialEq + Send + 'static,
        F: Fn(&GlobalState) -> V + Send + Sync + 'static,
        R: Fn(V) + Send + Sync + 'static,
    {
        self.store.watch(selector, reaction)
    }

    pub(crate) fn raw(&self) -> &Store<GlobalState> {
        &self.store
    }

    // =========================================================================
    // Slice operations
    // =========================================================================

    pub fn i18n(&self) -> I18nOps<'_> {
        I18nOps(self)
    }

    pub fn session(&self) -> SessionOps<'_> {
        SessionOps(self)
    }

    pub fn settings(&self) -> SettingsOps<'_> {
        SettingsOps(self)
    }

    pub fn preferences(&self) -> PreferencesOps<'_> {
        PreferencesOps(self)
    }

    pub fn app(&self) -> AppOps<'_> {
        AppOps(self)
    }

    pub fn updater(&self) -> UpdaterOps<'_> {
        UpdaterOps(self)
    }

    pub fn providers(&self) -> ProvidersOps<'_> {
        ProvidersOps(self)
    }

    pub fn browse(&self) -> BrowseOps<'_> {
        BrowseOps(self)
    }

    pub fn dialogs(&self) -> DialogsOps<'_> {
        DialogsOps(self)
    }
}

impl Default for GlobalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GlobalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalStore").finish_non_exhaustive()
    }
}

/// Builder for [`GlobalStore`].
pub struct GlobalStoreBuilder {
    locale_sink: Arc<dyn LocaleSink>,
    config: StoreConfig,
}

impl Default for GlobalStoreBuilder {
    fn default() -> Self {
        Self {
            locale_sink: Arc::new(NoopLocaleSink),
            config: StoreConfig::default(),
        }
    }
}

impl GlobalStoreBuilder {
    /// Collaborator notified on locale/direction changes.
    pub fn locale_sink(mut self, sink: Arc<dyn LocaleSink>) -> Self {
        self.locale_sink = sink;
        self
    }

    pub fn store_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> GlobalStore {
        let store = Store::with_config(GlobalState::default(), self.config);
        derivations::register(&store, self.locale_sink);
        GlobalStore { store }
    }
}

// =============================================================================
// I18n
// =============================================================================

pub struct I18nOps<'a>(&'a GlobalStore);

impl I18nOps<'_> {
    /// Update the application locale. Direction recomputation and
    /// collaborator notification happen in the locale cascade.
    pub fn set_locale(&self, locale: Locale) {
        self.0.store.mutate(|s| s.i18n.locale = locale);
    }
}

// =============================================================================
// Session
// =============================================================================

pub struct SessionOps<'a>(&'a GlobalStore);

impl SessionOps<'_> {
    /// Session validation has completed at least once. Monotonic until reset.
    pub fn set_initialized(&self) {
        self.0.store.mutate(|s| s.session.initialized = true);
    }

    pub fn set_is_active(&self, is_active: bool) {
        self.0.store.mutate(|s| s.session.is_active = is_active);
    }

    pub fn set_is_loading(&self, is_loading: bool) {
        self.0.store.mutate(|s| s.session.is_loading = is_loading);
    }
}

// =============================================================================
// Settings
// =============================================================================

pub struct SettingsOps<'a>(&'a GlobalStore);

impl SettingsOps<'_> {
    /// Record the onboarding flag; marks the slice initialized, since
    /// settings arrive in a single load.
    pub fn set_onboarded(&self, onboarded: bool) {
        self.0.store.mutate(|s| {
            s.settings.onboarded = onboarded;
            s.settings.initialized = true;
        });
    }
}

// =============================================================================
// Preferences
// =============================================================================

pub struct PreferencesOps<'a>(&'a GlobalStore);

impl PreferencesOps<'_> {
    pub fn set_initialized(&self) {
        self.0.store.mutate(|s| s.preferences.initialized = true);
    }

    /// Record the user's content preferences (or the absence of any).
    ///
    /// Sanctioned cross-slice writes: a supplied language updates
    /// `i18n.locale` in the same commit, so preference-driven locale change
    /// is atomic rather than eventually consistent; and the preferences
    /// dialog closes, satisfying its guarded-close invariant.
    pub fn set_preferences(&self, preferences: Option<UserPreferences>) {
        self.0.store.mutate(|s| {
            if let Some(prefs) = &preferences {
                s.i18n.locale = prefs.language;
            }
            s.preferences.country = preferences.as_ref().map(|p| p.country);
            s.preferences.language = preferences.as_ref().map(|p| p.language);
            s.dialogs.preferences.is_open = false;
        });
    }
}

// =============================================================================
// App
// =============================================================================

pub struct AppOps<'a>(&'a GlobalStore);

impl AppOps<'_> {
    pub fn set_version(&self, version: impl Into<String>) {
        let version = version.into();
        self.0.store.mutate(|s| s.app.version = Some(version));
    }

    pub fn set_nightly(&self, nightly: bool) {
        self.0.store.mutate(|s| s.app.nightly = nightly);
    }
}

// =============================================================================
// Updater
// =============================================================================

pub struct UpdaterOps<'a>(&'a GlobalStore);

impl UpdaterOps<'_> {
    pub fn set_status(&self, status: UpdateStatus) {
        self.0.store.mutate(|s| s.updater.status = status);
    }

    pub fn set_progress(&self, progress: Option<UpdateProgress>) {
        self.0.store.mutate(|s| s.updater.progress = progress);
    }

    pub fn set_available_update(&self, update: Option<AvailableUpdate>) {
        self.0.store.mutate(|s| s.updater.available_update = update);
    }

    pub fn set_last_checked(&self, when: Option<DateTime<Utc>>) {
        self.0.store.mutate(|s| s.updater.last_checked = when);
    }
}

// =============================================================================
// Providers
// =============================================================================

pub struct ProvidersOps<'a>(&'a GlobalStore);

impl ProvidersOps<'_> {
    pub fn set_initialized(&self) {
        self.0.store.mutate(|s| s.providers.initialized = true);
    }

    pub fn set_is_loading(&self, is_loading: bool) {
        self.0.store.mutate(|s| s.providers.is_loading = is_loading);
    }

    pub fn set_providers(&self, providers: Vec<Provider>) {
        self.0.store.mutate(|s| s.providers.providers = providers);
    }

    pub fn set_favorites(&self, favorites: Vec<Provider>) {
        self.0.store.mutate(|s| s.providers.favorites = favorites);
    }
}

// =============================================================================
// Browse
// =============================================================================

pub struct BrowseOps<'a>(&'a GlobalStore);

impl BrowseOps<'_> {
    pub fn set_query(&self, query: Option<String>) {
        self.0.store.mutate(|s| s.browse.query = query);
    }

    pub fn set_cursor(&self, cursor: Option<String>) {
        self.0.store.mutate(|s| s.browse.cursor = cursor);
    }

    pub fn set_args(&self, args: Option<SearchArguments>) {
        self.0.store.mutate(|s| s.browse.args = args);
    }

    pub fn set_sort_key(&self, sort_key: SortKey) {
        self.0.store.mutate(|s| s.browse.sort_key = sort_key);
    }

    pub fn toggle_prefer_favorites(&self) {
        self.0
            .store
            .mutate(|s| s.browse.prefer_favorites = !s.browse.prefer_favorites);
    }
}

// =============================================================================
// Dialogs
// =============================================================================

pub struct DialogsOps<'a>(&'a GlobalStore);

impl DialogsOps<'_> {
    /// Open the media dialog for a slug.
    pub fn open_media(&self, slug: Option<String>) {
        self.0.store.mutate(|s| {
            s.dialogs.media.is_open = true;
            s.dialogs.media.slug = slug;
        });
    }

    /// Flip the media dialog; always clears the slug.
    pub fn toggle_media(&self) {
        self.0.store.mutate(|s| {
            s.dialogs.media.slug = None;
            s.dialogs.media.is_open = !s.dialogs.media.is_open;
        });
    }

    /// Flip the preferences dialog, unless that would close it while
    /// preferences are initialized with neither country nor language set.
    pub fn toggle_preferences(&self) {
        self.0.store.mutate(|s| {
            let must_stay_open = s.dialogs.preferences.is_open
                && s.preferences.initialized
                && s.preferences.country.is_none()
                && s.preferences.language.is_none();
            if must_stay_open {
                return;
            }
            s.dialogs.preferences.is_open = !s.dialogs.preferences.is_open;
        });
    }

    pub fn toggle_watch_preferences(&self) {
        self.0
            .store
            .mutate(|s| s.dialogs.watch_preferences.is_open = !s.dialogs.watch_preferences.is_open);
    }
}
