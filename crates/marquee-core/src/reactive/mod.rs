//! # Reactive Store Primitives
//!
//! This module provides the reactive store that backs Marquee's global
//! application state.
//!
//! ## Core Types
//!
//! - [`Store<S>`]: a shared aggregate value with atomic mutation and
//!   selector-based change notification.
//!
//! - [`WatchHandle`]: returned from `watch`, removes the watcher on
//!   `dispose()`.
//!
//! - [`StoreConfig`]: tuning knobs for the notification cascade.
//!
//! ## Design Principles
//!
//! 1. **Synchronous cascade**: every `mutate` commits, then drains all
//!    watchers before returning. Callers never observe a state where derived
//!    fields lag behind their inputs.
//!
//! 2. **Reentrant**: a reaction may mutate the store again; the nested call
//!    drains the full watcher list against the new snapshot before control
//!    returns to the outer reaction. Convergence relies on idempotent
//!    reactions and is bounded by [`StoreConfig::max_cascade_depth`].
//!
//! 3. **Single writer**: the execution model is cooperative and
//!    single-threaded. Internal locks exist so the store is `Send + Sync`,
//!    not to arbitrate concurrent writers.
//!
//! ## Usage
//!
//! ```rust
//! use marquee_core::reactive::Store;
//!
//! #[derive(Clone, Default)]
//! struct State { count: u32, doubled: u32 }
//!
//! let store = Store::new(State::default());
//! let mirror = store.clone();
//! store.watch(|s: &State| s.count, move |count| {
//!     mirror.mutate(|s| s.doubled = count * 2);
//! });
//!
//! store.mutate(|s| s.count = 4);
//! assert_eq!(store.get().doubled, 8);
//! ```

mod store;

pub use store::{Store, StoreConfig, WatchHandle};
