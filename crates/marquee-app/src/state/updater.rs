//! # Updater Slice
//!
//! Update-check lifecycle. Independent of the session lifecycle; the update
//! poller re-checks on its next interval after a full store reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of the most recent update check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateStatus {
    /// An update is available for download.
    Available,
    /// An update exists but must be installed manually.
    Manual,
    #[default]
    NoUpdate,
}

/// Progress of an in-flight update installation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateProgress {
    Downloading,
    Downloaded,
    Installing,
    Installed,
}

/// A concrete update offered by the update service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableUpdate {
    pub version: String,
    pub notes: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Update-check lifecycle state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdaterState {
    pub status: UpdateStatus,
    pub progress: Option<UpdateProgress>,
    pub available_update: Option<AvailableUpdate>,
    pub last_checked: Option<DateTime<Utc>>,
}
