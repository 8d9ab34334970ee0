//! # RuntimeBridge: Abstract Native Shell Operations
//!
//! This module defines the `RuntimeBridge` trait, which abstracts the
//! operations the core needs from the native shell (session validation,
//! settings storage, catalog queries, update checks). It keeps `marquee-app`
//! a pure application core with no transport or platform dependencies.
//!
//! ## Design
//!
//! ```text
//! marquee-app (pure)        native shell (runtime)
//! ┌─────────────────┐       ┌─────────────────┐
//! │ GlobalStore     │       │ desktop shell   │
//! │   ┌───────────┐ │       │   implements    │
//! │   │RuntimeBridge│◄──────│   RuntimeBridge │
//! │   └───────────┘ │       │                 │
//! └─────────────────┘       └─────────────────┘
//! ```
//!
//! Every operation is request/response with structured errors
//! ([`BridgeError`]); retries, timeouts, and cancellation are owned by the
//! implementor, never by the core.

use std::sync::Arc;

use async_trait::async_trait;
use marquee_core::{BridgeError, Country, Direction, Locale};
use serde::{Deserialize, Serialize};

use crate::state::{AvailableUpdate, MediaKind, Provider, SearchArguments, SortKey};

// =============================================================================
// Bridge Types
// =============================================================================

/// Device-local settings as persisted by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSettings {
    /// Whether onboarding has been completed on this device.
    pub onboarded: bool,
}

/// The user's remote content preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub country: Country,
    pub language: Locale,
}

/// A fully-specified catalog search, assembled from the browse and
/// preferences slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub country: Country,
    pub language: Option<Locale>,
    pub query: Option<String>,
    pub args: Option<SearchArguments>,
    pub cursor: Option<String>,
    pub sort_key: SortKey,
}

/// One result row of a catalog search.
///
/// Minimal bridge-level shape; the browse UI resolves artwork and details
/// on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSummary {
    pub slug: String,
    pub title: String,
    pub kind: Option<MediaKind>,
    pub poster: Option<String>,
    pub year: Option<i32>,
}

/// Cursor information for paging through search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// A page of catalog search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub nodes: Vec<MediaSummary>,
    pub page_info: PageInfo,
}

// =============================================================================
// RuntimeBridge
// =============================================================================

/// Bridge trait for native shell operations.
///
/// The primary implementation lives in the desktop shell. For tests,
/// `marquee-testkit` provides a scripted mock.
#[async_trait]
pub trait RuntimeBridge: Send + Sync {
    // =========================================================================
    // Session
    // =========================================================================

    /// Validate the current remote session.
    ///
    /// `Ok(())` means the session is active. `Err(InvalidSession)` is the
    /// expected signal for a missing or expired session.
    async fn validate_session(&self) -> Result<(), BridgeError>;

    /// Terminate the current remote session.
    async fn logout(&self) -> Result<(), BridgeError>;

    // =========================================================================
    // Settings & Preferences
    // =========================================================================

    /// Load device-local settings.
    async fn load_settings(&self) -> Result<DeviceSettings, BridgeError>;

    /// Persist the onboarding-complete flag.
    async fn set_onboarded(&self, onboarded: bool) -> Result<(), BridgeError>;

    /// Load the user's content preferences, if any have been chosen.
    async fn load_preferences(&self) -> Result<Option<UserPreferences>, BridgeError>;

    /// Persist new content preferences; returns the stored value.
    async fn update_preferences(
        &self,
        country: Country,
        language: Locale,
    ) -> Result<UserPreferences, BridgeError>;

    // =========================================================================
    // Providers
    // =========================================================================

    /// Load the provider catalog for a country, optionally restricted to
    /// the user's favorites.
    async fn load_providers(
        &self,
        country: &Country,
        favorites_only: bool,
    ) -> Result<Vec<Provider>, BridgeError>;

    /// Mark a provider as favorite.
    async fn add_favorite_provider(
        &self,
        country: &Country,
        key: &str,
    ) -> Result<(), BridgeError>;

    /// Remove a provider from favorites.
    async fn remove_favorite_provider(
        &self,
        country: &Country,
        key: &str,
    ) -> Result<(), BridgeError>;

    // =========================================================================
    // Search
    // =========================================================================

    /// Run a catalog search.
    async fn search(&self, request: SearchRequest) -> Result<SearchPage, BridgeError>;

    // =========================================================================
    // Updates
    // =========================================================================

    /// Check for an application update.
    async fn check_update(&self) -> Result<Option<AvailableUpdate>, BridgeError>;

    /// Download an update's payload.
    async fn download_update(&self, update: &AvailableUpdate) -> Result<(), BridgeError>;

    /// Install a previously downloaded update.
    async fn install_update(&self, update: &AvailableUpdate) -> Result<(), BridgeError>;
}

/// Shared handle to a runtime bridge.
pub type BoxedRuntimeBridge = Arc<dyn RuntimeBridge>;

// =============================================================================
// LocaleSink
// =============================================================================

/// Collaborator notified of locale changes.
///
/// The localization subsystem switches its active dictionary on
/// `language_changed`; the platform layer mirrors `direction_changed` into
/// the document/window. Both are invoked synchronously from the locale
/// cascade, whichever entry point changed the locale.
pub trait LocaleSink: Send + Sync {
    fn language_changed(&self, locale: Locale);
    fn direction_changed(&self, direction: Direction);
}

/// Default sink for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLocaleSink;

impl LocaleSink for NoopLocaleSink {
    fn language_changed(&self, _locale: Locale) {}
    fn direction_changed(&self, _direction: Direction) {}
}
