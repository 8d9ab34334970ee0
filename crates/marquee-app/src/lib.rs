//! # Marquee App
//!
//! Portable headless application core for Marquee, a desktop media browser.
//! The UI shell renders and navigates; this crate owns everything the shell
//! reacts to:
//!
//! - [`state`]: the global aggregate and its slices
//! - [`GlobalStore`]: slice-scoped mutators over a reactive store
//! - the derivation graph: boot sequencing, favorites synchronization, the
//!   session reset protocol, forced dialogs, and the locale cascade, wired
//!   at construction
//! - [`bridge`]: the `RuntimeBridge` trait the native shell implements
//! - [`workflows`]: async choreography between bridge calls and slice
//!   mutations
//!
//! The core never suspends mid-derivation: every mutation drains its full
//! consequence cascade before returning, so external tasks commit partial
//! results slice by slice and readiness is discovered incrementally.

pub mod bridge;
mod derivations;
pub mod state;
mod store;
pub mod workflows;

pub use bridge::{
    BoxedRuntimeBridge, DeviceSettings, LocaleSink, MediaSummary, NoopLocaleSink, PageInfo,
    RuntimeBridge, SearchPage, SearchRequest, UserPreferences,
};
pub use state::GlobalState;
pub use store::{
    AppOps, BrowseOps, DialogsOps, GlobalStore, GlobalStoreBuilder, I18nOps, PreferencesOps,
    ProvidersOps, SessionOps, SettingsOps, UpdaterOps,
};

pub use marquee_core::{BridgeError, Country, Direction, Locale, StoreConfig};
