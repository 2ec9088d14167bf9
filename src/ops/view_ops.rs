use tracing::debug;

use crate::model::item::Item;
use crate::model::list::TodoList;
use crate::model::view::{FilterKnob, SortOption, StatusFilter};
use crate::ops::search::TermMatcher;
use crate::ops::sort::sort_items;

// ---------------------------------------------------------------------------
// View knobs
// ---------------------------------------------------------------------------

/// Store a new search term (trimmed).
pub fn set_search_term(list: &mut TodoList, term: &str) {
    list.view.search_term = term.trim().to_string();
    list.view.last_filter = FilterKnob::Search;
    if !list.sticky_sort {
        list.view.sort_applied = false;
    }
    debug!(term = %list.view.search_term, "search term set");
}

/// Switch the status tab.
pub fn set_status_filter(list: &mut TodoList, filter: StatusFilter) {
    list.view.status_filter = filter;
    list.view.last_filter = FilterKnob::Status;
    if !list.sticky_sort {
        list.view.sort_applied = false;
    }
    debug!(%filter, "status filter set");
}

/// Choose a sort option; it orders the view from now on.
pub fn set_sort_option(list: &mut TodoList, option: SortOption) {
    list.view.sort_option = option;
    list.view.sort_applied = true;
    debug!(%option, "sort option set");
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// The visible view: the base collection filtered by the knobs in effect,
/// then ordered by the applied sort (insertion order if none).
pub fn visible(list: &TodoList) -> Vec<&Item> {
    let status = list.view.effective_status(list.composition);
    let matcher = active_matcher(list);

    let mut view: Vec<&Item> = list
        .items
        .iter()
        .filter(|item| status.admits(item))
        .filter(|item| matcher.as_ref().is_none_or(|m| m.matches_item(item)))
        .collect();

    if let Some(option) = list.view.effective_sort() {
        sort_items(&mut view, option);
    }
    view
}

/// The matcher the presentation layer should highlight with, if any
pub fn active_matcher(list: &TodoList) -> Option<TermMatcher> {
    if list.view.search_applied(list.composition) {
        TermMatcher::new(&list.view.search_term)
    } else {
        None
    }
}
