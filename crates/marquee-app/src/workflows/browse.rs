//! Browse workflows: assembling and running catalog searches.

use marquee_core::BridgeError;

use crate::bridge::{RuntimeBridge, SearchPage, SearchRequest};
use crate::state::GlobalState;
use crate::GlobalStore;

/// Assemble a search request from the browse and preferences slices.
///
/// Returns `None` until preferences have resolved a country — there is no
/// catalog to search without one.
pub fn search_request(state: &GlobalState) -> Option<SearchRequest> {
    let country = state.preferences.country?;
    Some(SearchRequest {
        country,
        language: state.preferences.language,
        query: state.browse.query.clone(),
        args: state.browse.args.clone(),
        cursor: state.browse.cursor.clone(),
        sort_key: state.browse.sort_key,
    })
}

/// Run a catalog search against the current browse parameters.
///
/// `Ok(None)` means preferences have not resolved a country yet. The page
/// goes to the caller (the browse UI); the core commits nothing.
pub async fn run_search(
    store: &GlobalStore,
    bridge: &dyn RuntimeBridge,
) -> Result<Option<SearchPage>, BridgeError> {
    let Some(request) = search_request(&store.state()) else {
        return Ok(None);
    };
    let page = bridge.search(request).await?;
    Ok(Some(page))
}
