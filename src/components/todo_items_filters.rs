//! Tag Filter Component

use leptos::prelude::*;

use crate::components::ChipInput;
use crate::context::{context_error_view, use_todo_items};
use crate::store::{store_add_filter_tag, store_filter_tags, store_known_tags, store_remove_filter_tag};

/// Chip input bound to the filter selection; the list follows it reactively
#[component]
pub fn TodoItemsFilters() -> impl IntoView {
    let app = match use_todo_items() {
        Ok(todos) => todos.app,
        Err(err) => return context_error_view(err),
    };

    view! {
        <section class="todo-items-filters">
            <ChipInput
                label="Filter by tags"
                chips=Signal::derive(move || store_filter_tags(&app))
                suggestions_from=Signal::derive(move || store_known_tags(&app))
                on_add=move |tag: String| store_add_filter_tag(&app, &tag)
                on_remove=move |tag: String| store_remove_filter_tag(&app, &tag)
            />
        </section>
    }
    .into_any()
}
