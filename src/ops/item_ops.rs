use tracing::{debug, trace};

use crate::model::item::{Item, ItemId};
use crate::model::list::TodoList;

// ---------------------------------------------------------------------------
// Single-item operations
// ---------------------------------------------------------------------------

/// Append a new open item. Returns its id, or `None` if `text` is blank.
pub fn add(list: &mut TodoList, text: &str) -> Option<ItemId> {
    let text = text.trim();
    if text.is_empty() {
        trace!("add ignored: blank text");
        return None;
    }
    let id = list.next_id();
    list.items.push(Item::new(id, text.to_string()));
    debug!(%id, text, "item added");
    Some(id)
}

/// Flip an item's completed flag. Returns false if the id is unknown.
pub fn toggle(list: &mut TodoList, id: ItemId) -> bool {
    match list.find_mut(id) {
        Some(item) => {
            item.completed = !item.completed;
            debug!(%id, completed = item.completed, "item toggled");
            true
        }
        None => {
            trace!(%id, "toggle ignored: no such item");
            false
        }
    }
}

/// Replace an item's text. `None` is a cancelled edit; so is text that trims
/// to nothing. Returns whether the item changed.
pub fn edit(list: &mut TodoList, id: ItemId, new_text: Option<&str>) -> bool {
    let Some(text) = new_text.map(str::trim) else {
        trace!(%id, "edit cancelled");
        return false;
    };
    if text.is_empty() {
        trace!(%id, "edit ignored: blank text");
        return false;
    }
    match list.find_mut(id) {
        Some(item) if item.text == text => false,
        Some(item) => {
            item.text = text.to_string();
            debug!(%id, text, "item edited");
            true
        }
        None => {
            trace!(%id, "edit ignored: no such item");
            false
        }
    }
}

/// Remove an item. Returns false if the id is unknown.
pub fn delete(list: &mut TodoList, id: ItemId) -> bool {
    let before = list.items.len();
    list.items.retain(|item| item.id != id);
    let removed = list.items.len() != before;
    if removed {
        debug!(%id, "item deleted");
    } else {
        trace!(%id, "delete ignored: no such item");
    }
    removed
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

/// Mark every item completed. Returns how many changed.
pub fn select_all(list: &mut TodoList) -> usize {
    set_all_completed(list, true)
}

/// Mark every item open. Returns how many changed.
pub fn deselect_all(list: &mut TodoList) -> usize {
    set_all_completed(list, false)
}

fn set_all_completed(list: &mut TodoList, completed: bool) -> usize {
    let mut changed = 0;
    for item in list.items.iter_mut().filter(|i| i.completed != completed) {
        item.completed = completed;
        changed += 1;
    }
    debug!(completed, changed, "bulk completion set");
    changed
}

/// Remove every completed item. Returns how many were removed.
pub fn delete_selected(list: &mut TodoList) -> usize {
    let before = list.items.len();
    list.items.retain(|item| !item.completed);
    let removed = before - list.items.len();
    debug!(removed, "completed items deleted");
    removed
}
