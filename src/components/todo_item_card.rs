//! Todo Item Card Component
//!
//! One item: done checkbox, title, details and tag chips, with an inline edit mode.

use leptos::prelude::*;
use todo_core::{Action, Item, ItemPatch};

use crate::components::ChipInput;
use crate::context::{context_error_view, use_todo_items};
use crate::store::store_known_tags;

/// A single item card
///
/// Delete is hidden while editing; done items cannot be edited.
#[component]
pub fn TodoItemCard(item: Item) -> impl IntoView {
    let todos = match use_todo_items() {
        Ok(todos) => todos,
        Err(err) => return context_error_view(err),
    };
    let app = todos.app;

    let Item { id, title, details, done, tags } = item;

    let (is_edit, set_is_edit) = signal(false);
    let (edit_title, set_edit_title) = signal(title.clone());
    let (edit_details, set_edit_details) = signal(details.clone().unwrap_or_default());
    let (edit_tags, set_edit_tags) = signal(tags.clone());

    let delete_id = id.clone();
    let on_delete = move |_: web_sys::MouseEvent| todos.dispatch(Action::delete(delete_id.clone()));

    let toggle_id = id.clone();
    let on_toggle = move |_: web_sys::Event| todos.dispatch(Action::toggle_done(toggle_id.clone()));

    let edit_id = id.clone();
    let (title_snapshot, details_snapshot, tags_snapshot) = (title.clone(), details.clone(), tags.clone());
    let on_edit = move |_: web_sys::MouseEvent| {
        if is_edit.get_untracked() {
            let mut patch = ItemPatch::default()
                .details(edit_details.get_untracked().trim())
                .tags(edit_tags.get_untracked());
            // A blank title keeps the old one
            let new_title = edit_title.get_untracked();
            if !new_title.trim().is_empty() {
                patch = patch.title(new_title.trim());
            }
            todos.dispatch(Action::edit(edit_id.clone(), patch));
        } else {
            set_edit_title.set(title_snapshot.clone());
            set_edit_details.set(details_snapshot.clone().unwrap_or_default());
            set_edit_tags.set(tags_snapshot.clone());
        }
        set_is_edit.update(|editing| *editing = !*editing);
    };

    let has_details = details.is_some();
    let has_tags = !tags.is_empty();

    view! {
        <article class=if done { "todo-card done" } else { "todo-card" }>
            <header class="todo-card-header">
                <Show
                    when=move || is_edit.get()
                    fallback={
                        let title = title.clone();
                        move || view! {
                            <label class="todo-title">
                                <input type="checkbox" checked=done on:change=on_toggle.clone() />
                                <span>{title.clone()}</span>
                            </label>
                        }
                    }
                >
                    <input
                        type="text"
                        class="todo-title-edit"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                    />
                </Show>

                <div class="todo-card-actions">
                    <Show when=move || !is_edit.get()>
                        <button class="todo-button" aria-label="delete" on:click=on_delete.clone()>
                            "Delete"
                        </button>
                    </Show>
                    {(!done).then(|| view! {
                        <button class="todo-button" aria-label="edit" on:click=on_edit.clone()>
                            {move || if is_edit.get() { "Save" } else { "Edit" }}
                        </button>
                        <Show when=move || is_edit.get()>
                            <button class="todo-button" aria-label="cancel" on:click=move |_| set_is_edit.set(false)>
                                "Cancel"
                            </button>
                        </Show>
                    })}
                </div>
            </header>

            <Show when=move || has_details || is_edit.get()>
                <div class="todo-card-content">
                    <Show
                        when=move || is_edit.get()
                        fallback={
                            let details = details.clone().unwrap_or_default();
                            move || view! { <p class="todo-details">{details.clone()}</p> }
                        }
                    >
                        <textarea
                            rows="2"
                            prop:value=move || edit_details.get()
                            on:input=move |ev| set_edit_details.set(event_target_value(&ev))
                        />
                    </Show>
                </div>
            </Show>

            <Show when=move || has_tags || is_edit.get()>
                <div class="todo-card-chips">
                    <Show
                        when=move || is_edit.get()
                        fallback={
                            let tags = tags.clone();
                            move || tags.iter().map(|tag| view! { <span class="chip">{tag.clone()}</span> }).collect_view()
                        }
                    >
                        <ChipInput
                            label="Tags"
                            chips=edit_tags
                            suggestions_from=Signal::derive(move || store_known_tags(&app))
                            on_add=move |tag: String| set_edit_tags.update(|tags| tags.push(tag))
                            on_remove=move |tag: String| set_edit_tags.update(|tags| tags.retain(|t| *t != tag))
                        />
                    </Show>
                </div>
            </Show>
        </article>
    }
    .into_any()
}
