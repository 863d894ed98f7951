//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. `todo_items`
//! mirrors the `TodoStore` list after every dispatch; `filter_tags` is the
//! filter selection and lives only here.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{known_tags, visible_items, FilterTags, Item};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, in store order
    pub todo_items: Vec<Item>,
    /// Active tag filter
    pub filter_tags: FilterTags,
}

impl AppState {
    pub fn new(todo_items: Vec<Item>) -> Self {
        Self {
            todo_items,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the mirrored item list
pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    *store.todo_items().write() = items;
}

pub fn store_filter_tags(store: &AppStore) -> Vec<String> {
    store.filter_tags().read().as_slice().to_vec()
}

pub fn store_add_filter_tag(store: &AppStore, tag: &str) {
    store.filter_tags().write().add(tag);
}

pub fn store_remove_filter_tag(store: &AppStore, tag: &str) {
    store.filter_tags().write().remove(tag);
}

/// The filtered, done-last list to render
pub fn store_visible_items(store: &AppStore) -> Vec<Item> {
    let items = store.todo_items().read();
    let filter = store.filter_tags().read();
    visible_items(&items, filter.as_slice()).into_iter().cloned().collect()
}

/// Tags offered as suggestions in chip inputs
pub fn store_known_tags(store: &AppStore) -> Vec<String> {
    known_tags(&store.todo_items().read())
}
