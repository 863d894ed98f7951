//! Tagged Todos App
//!
//! Main application component: create form, tag filter and item list.

use leptos::prelude::*;

use crate::components::{TodoItemForm, TodoItemsFilters, TodoItemsList};
use crate::config::AppConfig;
use crate::context::TodoItemsProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    view! {
        <TodoItemsProvider config=config>
            <main class="app-layout">
                <h1>"Tagged Todos"</h1>
                <TodoItemForm />
                <TodoItemsFilters />
                <TodoItemsList />
            </main>
        </TodoItemsProvider>
    }
}
