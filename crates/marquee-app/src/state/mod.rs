//! # Global State Slices
//!
//! The process-wide aggregate and its nine slices. Slices hold plain data;
//! all mutation goes through the slice operations on
//! [`GlobalStore`](crate::GlobalStore), and all cross-slice consequences run
//! through the derivation graph.
//!
//! Every slice has a purposeful `Default` — together they form the initial
//! aggregate, which is also the state the session reset protocol restores.

mod app;
mod browse;
mod dialogs;
mod i18n;
mod session;
mod updater;

pub use app::AppState;
pub use browse::{
    BrowseState, MediaKind, Provider, ProvidersState, SearchArguments, SortKey,
};
pub use dialogs::{DialogState, DialogsState, MediaDialogState};
pub use i18n::I18nState;
pub use session::{PreferencesState, SessionState, SettingsState};
pub use updater::{AvailableUpdate, UpdateProgress, UpdaterState, UpdateStatus};

use serde::{Deserialize, Serialize};

/// The full application aggregate.
///
/// One instance lives in the process-wide store; everything else is a
/// snapshot clone. `Default` is the cold-boot state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalState {
    pub i18n: I18nState,
    pub session: SessionState,
    pub preferences: PreferencesState,
    pub settings: SettingsState,
    pub app: AppState,
    pub updater: UpdaterState,
    pub providers: ProvidersState,
    pub browse: BrowseState,
    pub dialogs: DialogsState,
}
