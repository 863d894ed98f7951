//! Todo Item Form Component
//!
//! Form for creating new items: title, details and tags.

use leptos::prelude::*;
use todo_core::{Action, NewItem};

use crate::components::ChipInput;
use crate::context::{context_error_view, use_todo_items};
use crate::store::store_known_tags;

/// Form for creating new items; Add stays disabled until a title is typed
#[component]
pub fn TodoItemForm() -> impl IntoView {
    let todos = match use_todo_items() {
        Ok(todos) => todos,
        Err(err) => return context_error_view(err),
    };
    let app = todos.app;

    let (title, set_title) = signal(String::new());
    let (details, set_details) = signal(String::new());
    let (tags, set_tags) = signal(Vec::<String>::new());

    let title_missing = move || title.get().trim().is_empty();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if title_missing() {
            return;
        }
        let new_item = NewItem::new(title.get().trim())
            .with_details(details.get())
            .with_tags(tags.get());
        todos.dispatch(Action::add(new_item));

        set_title.set(String::new());
        set_details.set(String::new());
        set_tags.set(Vec::new());
    };

    view! {
        <form class="todo-item-form" on:submit=create_item>
            <label class="field">
                <span>"TODO"</span>
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Details"</span>
                <textarea
                    rows="2"
                    prop:value=move || details.get()
                    on:input=move |ev| set_details.set(event_target_value(&ev))
                />
            </label>
            <ChipInput
                label="Tags"
                chips=tags
                suggestions_from=Signal::derive(move || store_known_tags(&app))
                on_add=move |tag: String| set_tags.update(|tags| tags.push(tag))
                on_remove=move |tag: String| set_tags.update(|tags| tags.retain(|t| *t != tag))
            />
            <button type="submit" class="primary" disabled=title_missing>
                "Add"
            </button>
        </form>
    }
    .into_any()
}
