use serde::Serialize;

use crate::model::item::Item;
use crate::model::list::{Counts, TodoList};
use crate::model::view::{SortOption, StatusFilter};
use crate::ops::view_ops::visible;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ViewJson {
    pub search_term: String,
    pub search_applied: bool,
    pub status_filter: StatusFilter,
    pub status_applied: bool,
    pub sort_option: SortOption,
    pub sort_applied: bool,
    pub counts: Counts,
    pub items: Vec<ItemJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn item_to_json(item: &Item) -> ItemJson {
    ItemJson {
        id: item.id.0,
        text: item.text.clone(),
        completed: item.completed,
    }
}

pub fn view_to_json(list: &TodoList) -> ViewJson {
    ViewJson {
        search_term: list.view.search_term.clone(),
        search_applied: list.view.search_applied(list.composition),
        status_filter: list.view.status_filter,
        status_applied: list.view.status_applied(list.composition),
        sort_option: list.view.sort_option,
        sort_applied: list.view.sort_applied,
        counts: list.counts(),
        items: visible(list).into_iter().map(item_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single item as `[x] text`
pub fn format_item_line(item: &Item) -> String {
    format!("[{}] {}", item.checkbox_char(), item.text)
}

/// One line per visible item, or a placeholder when nothing is shown
pub fn format_view(list: &TodoList) -> Vec<String> {
    let items = visible(list);
    if items.is_empty() {
        return vec!["(nothing to show)".to_string()];
    }
    items.into_iter().map(format_item_line).collect()
}
