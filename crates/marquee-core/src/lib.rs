//! # Marquee Core
//!
//! Shared primitives for the Marquee application core:
//!
//! - [`reactive`]: the process-wide reactive store (`Store<S>`) with
//!   selector-based watchers and a synchronous, reentrant cascade
//! - [`locale`]: locale, direction, and country data
//! - [`error`]: the bridge error taxonomy
//!
//! This crate is pure: no runtime, no I/O, no platform dependencies.
//! Higher layers (marquee-app) wire domain state and side effects on top.

pub mod error;
pub mod locale;
pub mod reactive;

pub use error::BridgeError;
pub use locale::{Country, Direction, Locale};
pub use reactive::{Store, StoreConfig, WatchHandle};
