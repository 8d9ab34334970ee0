//! # Providers and Browse Slices

use serde::{Deserialize, Serialize};

// ============================================================================
// Providers
// ============================================================================

/// A content provider available in the active country's catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable provider key, e.g. "netflix".
    pub key: String,
    pub name: String,
    pub icon: Option<String>,
}

impl Provider {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: None,
        }
    }
}

/// Provider catalog plus the user's favorites subset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersState {
    pub initialized: bool,
    pub is_loading: bool,
    pub providers: Vec<Provider>,
    pub favorites: Vec<Provider>,
}

// ============================================================================
// Browse
// ============================================================================

/// Media kind filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaKind {
    Movie,
    TvShow,
}

/// Sort order for browse results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    #[default]
    Position,
    CreatedAt,
    UpdatedAt,
    ReleasedAt,
    Id,
}

/// Structured search filters.
///
/// `providers` carries a meaningful `Some(vec![])`: filter to nothing, as
/// opposed to `None`, no provider filter at all. The favorites synchronizer
/// owns this field whenever the favorites preference is on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchArguments {
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub kind: Option<MediaKind>,
    pub with_poster: Option<bool>,
    pub providers: Option<Vec<String>>,
}

/// Current content query parameters, mutated directly by the browse UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseState {
    pub query: Option<String>,
    pub cursor: Option<String>,
    pub args: Option<SearchArguments>,
    pub sort_key: SortKey,
    /// Whether to restrict browsing to favorite providers' content.
    pub prefer_favorites: bool,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            query: None,
            cursor: None,
            args: None,
            sort_key: SortKey::default(),
            prefer_favorites: true,
        }
    }
}
