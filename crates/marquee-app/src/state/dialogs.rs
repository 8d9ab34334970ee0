//! # Dialogs Slice

use serde::{Deserialize, Serialize};

/// Visibility of a plain modal dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogState {
    pub is_open: bool,
}

/// The media detail dialog, keyed by the slug it should load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDialogState {
    pub slug: Option<String>,
    pub is_open: bool,
}

/// Visibility of the application's modal dialogs.
///
/// `preferences` has a guarded close: it cannot be toggled shut while
/// preferences are initialized but both country and language are unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogsState {
    pub media: MediaDialogState,
    pub preferences: DialogState,
    pub watch_preferences: DialogState,
}
