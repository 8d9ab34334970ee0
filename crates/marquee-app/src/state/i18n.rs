//! # I18n Slice

use marquee_core::{Direction, Locale};
use serde::{Deserialize, Serialize};

/// Active locale and text direction.
///
/// `direction` is derived from `locale` by the locale cascade; it is stored
/// (not recomputed on read) so snapshots are self-contained for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nState {
    pub locale: Locale,
    pub direction: Direction,
}
