//! # Workflows
//!
//! Async choreography between the runtime bridge and the store. Each
//! workflow performs bridge calls and commits results through slice
//! mutators; no workflow waits for a sibling task's result before
//! committing its own slice. Readiness is discovered incrementally by the
//! derivation graph.
//!
//! Error policy: expected failures become slice mutations (an invalid
//! session deactivates the session); transient/unknown failures are either
//! logged and absorbed with a safe fallback (preferences, provider lists
//! fall back to empty) or propagated for UI-level handling (preference
//! updates, favorites mutations).

pub mod browse;
pub mod providers;
pub mod session;
pub mod settings;
pub mod updater;
