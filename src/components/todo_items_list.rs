//! Todo Items List Component
//!
//! Renders the filtered, done-last projection of the store.

use leptos::prelude::*;

use crate::components::TodoItemCard;
use crate::context::{context_error_view, use_todo_items};
use crate::store::store_visible_items;

#[component]
pub fn TodoItemsList() -> impl IntoView {
    let app = match use_todo_items() {
        Ok(todos) => todos.app,
        Err(err) => return context_error_view(err),
    };

    let visible = Memo::new(move |_| store_visible_items(&app));

    view! {
        <ul class="todo-items-list">
            <For
                each=move || visible.get()
                key=|item| {
                    // Every displayed field, so an edited item gets a fresh card
                    (
                        item.id.clone(),
                        item.title.clone(),
                        item.details.clone(),
                        item.done,
                        item.tags.clone(),
                    )
                }
                children=move |item| view! {
                    <li>
                        <TodoItemCard item=item />
                    </li>
                }
            />
        </ul>
        <p class="item-count">
            {move || format!("{} shown", visible.get().len())}
        </p>
    }
    .into_any()
}
