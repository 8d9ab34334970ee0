//! Store<S> - a shared aggregate with selector-based change notification
//!
//! `Store<S>` holds one aggregate value. Mutations commit atomically and then
//! synchronously notify every registered watcher whose projection changed.
//! Watchers are notified in registration order, and reactions may mutate the
//! store again (reentrant cascade), bounded by a configurable depth.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

/// Tuning knobs for the notification cascade.
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// Maximum nesting depth of reaction-triggered mutations before the
    /// cascade is abandoned. Exceeding this signals a logic error (a
    /// non-converging reaction cycle), not a load problem.
    pub max_cascade_depth: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_cascade_depth: 10,
        }
    }
}

/// Type-erased watcher slot.
///
/// `poll` recomputes the projection against the given snapshot, records it,
/// and reports whether it changed. `fire` invokes the reaction with the last
/// recorded value. The two are split so no store lock is held while a
/// reaction runs.
trait AnyWatcher<S>: Send + Sync {
    fn poll(&self, state: &S) -> bool;
    fn fire(&self);
}

struct Watcher<S, V> {
    selector: Box<dyn Fn(&S) -> V + Send + Sync>,
    equal: Box<dyn Fn(&V, &V) -> bool + Send + Sync>,
    reaction: Box<dyn Fn(V) + Send + Sync>,
    last: Mutex<V>,
}

impl<S, V> AnyWatcher<S> for Watcher<S, V>
where
    V: Clone + Send + 'static,
{
    fn poll(&self, state: &S) -> bool {
        let next = (self.selector)(state);
        let mut last = self.last.lock();
        if (self.equal)(&last, &next) {
            false
        } else {
            *last = next;
            true
        }
    }

    fn fire(&self) {
        let value = self.last.lock().clone();
        (self.reaction)(value);
    }
}

struct StoreInner<S> {
    state: RwLock<S>,
    watchers: RwLock<Vec<(u64, Arc<dyn AnyWatcher<S>>)>>,
    next_watcher_id: AtomicU64,
    cascade_depth: AtomicUsize,
    config: StoreConfig,
}

/// A shared aggregate value with atomic mutation and selector-based change
/// notification.
///
/// `Store<S>` is cheap to clone; clones share the same state and watcher
/// list. It is intended to be constructed once per process and handed to
/// every consumer.
///
/// # Notification Semantics
///
/// - One cascade per `mutate`/`replace` call, however many fields changed.
/// - Watchers run in registration order against the committed snapshot.
/// - A watcher fires only when its projection differs from the last value it
///   observed, per its equality predicate (`PartialEq` by default).
/// - Watchers are seeded at registration and do not fire for the value the
///   store already holds.
pub struct Store<S> {
    inner: Arc<StoreInner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    /// Create a store with the default configuration.
    pub fn new(initial: S) -> Self {
        Self::with_config(initial, StoreConfig::default())
    }

    /// Create a store with an explicit configuration.
    pub fn with_config(initial: S, config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                watchers: RwLock::new(Vec::new()),
                next_watcher_id: AtomicU64::new(0),
                cascade_depth: AtomicUsize::new(0),
                config,
            }),
        }
    }

    /// Snapshot the current aggregate.
    pub fn get(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Apply `f` to the aggregate, commit, and drain the watcher cascade.
    ///
    /// By the time this returns, every derived field downstream of the
    /// change is consistent with the committed state.
    pub fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut S),
    {
        {
            let mut state = self.inner.state.write();
            f(&mut state);
        }
        self.notify();
    }

    /// Discard the current aggregate and adopt `next`, then drain the
    /// cascade. Used by the session reset protocol.
    pub fn replace(&self, next: S) {
        {
            *self.inner.state.write() = next;
        }
        self.notify();
    }

    /// Register a watcher with `PartialEq` change detection.
    ///
    /// The selector must be pure and cheap; it runs on every commit. The
    /// reaction may mutate the store (on a clone) and must be idempotent for
    /// a stabilized value.
    pub fn watch<V, F, R>(&self, selector: F, reaction: R) -> WatchHandle<S>
    where
        V: Clone + PartialEq + Send + 'static,
        F: Fn(&S) -> V + Send + Sync + 'static,
        R: Fn(V) + Send + Sync + 'static,
    {
        self.watch_with(selector, |a: &V, b: &V| a == b, reaction)
    }

    /// Register a watcher with a custom equality predicate.
    pub fn watch_with<V, F, E, R>(&self, selector: F, equal: E, reaction: R) -> WatchHandle<S>
    where
        V: Clone + Send + 'static,
        F: Fn(&S) -> V + Send + Sync + 'static,
        E: Fn(&V, &V) -> bool + Send + Sync + 'static,
        R: Fn(V) + Send + Sync + 'static,
    {
        let seed = {
            let state = self.inner.state.read();
            selector(&state)
        };
        let watcher: Arc<dyn AnyWatcher<S>> = Arc::new(Watcher {
            selector: Box::new(selector),
            equal: Box::new(equal),
            reaction: Box::new(reaction),
            last: Mutex::new(seed),
        });
        let id = self.inner.next_watcher_id.fetch_add(1, Ordering::Relaxed);
        self.inner.watchers.write().push((id, watcher));
        WatchHandle {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of registered watchers.
    pub fn watcher_count(&self) -> usize {
        self.inner.watchers.read().len()
    }

    /// Drain the watcher cascade against the committed state.
    ///
    /// Reactions run with no store lock held, so they are free to mutate the
    /// store; the nested `notify` drains the full list again before the
    /// outer loop continues. Re-polling a watcher that already stabilized is
    /// a no-op, which is what terminates the recursion.
    fn notify(&self) {
        let depth = self.inner.cascade_depth.fetch_add(1, Ordering::AcqRel);
        if depth >= self.inner.config.max_cascade_depth {
            self.inner.cascade_depth.fetch_sub(1, Ordering::AcqRel);
            tracing::error!(
                depth,
                max = self.inner.config.max_cascade_depth,
                "reactive cascade exceeded depth bound; abandoning \
                 notification (non-converging reaction cycle?)"
            );
            return;
        }

        // Snapshot the watcher list so reactions can register or dispose
        // watchers without deadlocking. Late registrations see the next
        // commit.
        let watchers: Vec<Arc<dyn AnyWatcher<S>>> = self
            .inner
            .watchers
            .read()
            .iter()
            .map(|(_, w)| w.clone())
            .collect();

        for (index, watcher) in watchers.iter().enumerate() {
            let changed = {
                let state = self.inner.state.read();
                watcher.poll(&state)
            };
            if changed {
                tracing::trace!(watcher = index, depth, "projection changed; firing");
                watcher.fire();
            }
        }

        self.inner.cascade_depth.fetch_sub(1, Ordering::AcqRel);
    }
}

impl<S: Clone + Send + Sync + std::fmt::Debug + 'static> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get())
            .field("watchers", &self.watcher_count())
            .finish()
    }
}

/// Handle returned from `watch`; removes the watcher on `dispose()`.
///
/// Dropping the handle without calling `dispose` leaves the watcher
/// registered for the life of the store, which is the normal case for the
/// process-wide derivation graph.
pub struct WatchHandle<S> {
    store: Weak<StoreInner<S>>,
    id: u64,
}

impl<S> WatchHandle<S> {
    /// Unregister the watcher. No-op if the store is already gone.
    pub fn dispose(self) {
        if let Some(inner) = self.store.upgrade() {
            inner.watchers.write().retain(|(id, _)| *id != self.id);
        }
    }
}
