//! Application Context
//!
//! The todo store provided via Leptos Context API. Components reach it through
//! [`use_todo_items`], which fails with a descriptive error outside the provider.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Action, Storage as SnapshotStorage, TodoError, TodoResult, TodoStore, UlidGenerator};

use crate::config::AppConfig;
use crate::storage::BrowserStorage;
use crate::store::{store_set_items, AppState, AppStore};

type SharedTodoStore = TodoStore<Box<dyn SnapshotStorage + Send + Sync>, UlidGenerator>;

/// Handle to the todo store and its reactive mirror
#[derive(Clone, Copy)]
pub struct TodoItemsContext {
    /// Authoritative state; persists itself on every dispatch
    todos: StoredValue<SharedTodoStore>,
    /// Reactive copy read by components
    pub app: AppStore,
}

impl TodoItemsContext {
    /// Open the store against localStorage, restoring the saved snapshot
    pub fn open(config: &AppConfig) -> Self {
        let storage: Box<dyn SnapshotStorage + Send + Sync> = Box::new(BrowserStorage);
        Self::new(TodoStore::open(storage, UlidGenerator::new(), config.storage_key.clone()))
    }

    /// Wrap an already opened store
    pub fn new(todos: SharedTodoStore) -> Self {
        let app = Store::new(AppState::new(todos.items().to_vec()));
        Self {
            todos: StoredValue::new(todos),
            app,
        }
    }

    /// Apply an action and refresh the mirror
    pub fn dispatch(&self, action: Action) {
        self.todos.update_value(|todos| todos.dispatch(action));
        let items = self.todos.with_value(|todos| todos.items().to_vec());
        store_set_items(&self.app, items);
    }
}

/// Provides [`TodoItemsContext`] to its children
#[component]
pub fn TodoItemsProvider(config: AppConfig, children: Children) -> impl IntoView {
    provide_context(TodoItemsContext::open(&config));
    children()
}

/// Get the todo store from context
pub fn use_todo_items() -> TodoResult<TodoItemsContext> {
    use_context::<TodoItemsContext>()
        .ok_or(TodoError::MissingContext("use_todo_items", "TodoItemsProvider"))
}

/// Rendered in place of a component that was mounted outside the provider
pub fn context_error_view(err: TodoError) -> AnyView {
    log::error!("{err}");
    view! { <p class="context-error">{err.to_string()}</p> }.into_any()
}
