use serde::Serialize;

use super::config::ViewConfig;
use super::item::{IdAllocator, Item, ItemId};
use super::view::{Composition, ViewState};

/// The engine state: the base collection plus the view knobs.
///
/// Mutate it through `ops::item_ops` and `ops::view_ops`; read the visible
/// list with `ops::view_ops::visible`.
#[derive(Debug, Clone)]
pub struct TodoList {
    /// Base collection in insertion order
    pub items: Vec<Item>,
    pub view: ViewState,
    pub composition: Composition,
    pub sticky_sort: bool,
    ids: IdAllocator,
}

/// Item counts per status tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl Default for TodoList {
    fn default() -> Self {
        TodoList::new()
    }
}

impl TodoList {
    /// An empty list with default view settings
    pub fn new() -> Self {
        TodoList::with_config(&ViewConfig::default())
    }

    pub fn with_config(config: &ViewConfig) -> Self {
        TodoList {
            items: Vec::new(),
            view: ViewState::with_sort_option(config.default_sort),
            composition: config.composition,
            sticky_sort: config.sticky_sort,
            ids: IdAllocator::default(),
        }
    }

    pub fn next_id(&mut self) -> ItemId {
        self.ids.next()
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Id of the item at a 1-based position in the base collection
    pub fn id_at(&self, position: usize) -> Option<ItemId> {
        position
            .checked_sub(1)
            .and_then(|idx| self.items.get(idx))
            .map(|item| item.id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn counts(&self) -> Counts {
        let completed = self.items.iter().filter(|item| item.completed).count();
        Counts {
            all: self.items.len(),
            active: self.items.len() - completed,
            completed,
        }
    }
}
