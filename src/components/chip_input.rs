//! Chip Input Component
//!
//! Tag input rendered as removable chips, with fuzzy autocomplete over known
//! tags. Enter commits the typed text; `;` or `,` separates several tags.

use leptos::prelude::*;
use todo_core::{parse_tag_input, suggest_tags};

const MAX_SUGGESTIONS: usize = 5;

/// Chip list plus text box
///
/// Props:
/// - chips: current tags, in order
/// - suggestions_from: tags offered by autocomplete
/// - on_add / on_remove: called once per tag
#[component]
pub fn ChipInput(
    #[prop(into)] label: String,
    #[prop(into)] chips: Signal<Vec<String>>,
    #[prop(into)] suggestions_from: Signal<Vec<String>>,
    #[prop(into)] on_add: Callback<String>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);

    // Suggestions for the segment after the last separator
    let suggestions = move || {
        let input = input_value.get();
        let segment = input.rsplit([';', ',']).next().unwrap_or("");
        let known = suggestions_from.get();
        let chosen = chips.get();
        let suggested: Vec<String> = suggest_tags(&known, segment, &chosen, MAX_SUGGESTIONS)
            .into_iter()
            .map(str::to_string)
            .collect();
        suggested
    };

    let commit = move |text: String| {
        for tag in parse_tag_input(&text) {
            if !chips.get_untracked().contains(&tag) {
                on_add.run(tag);
            }
        }
        set_input_value.set(String::new());
        set_selected_idx.set(0);
    };

    let accept_suggestion = move |name: String| {
        let input = input_value.get_untracked();
        let kept = match input.rfind([';', ',']) {
            Some(pos) => format!("{}; ", &input[..pos]),
            None => String::new(),
        };
        commit(kept + &name);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "Enter" => {
                // Keep the enclosing form from submitting
                ev.prevent_default();
                commit(input_value.get_untracked());
            }
            "Tab" if !sugg.is_empty() => {
                ev.prevent_default();
                if let Some(name) = sugg.get(selected_idx.get_untracked()) {
                    accept_suggestion(name.clone());
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get_untracked();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected_idx.update(|sel| *sel = sel.saturating_sub(1));
            }
            "Backspace" if input_value.get_untracked().is_empty() => {
                if let Some(last) = chips.get_untracked().last() {
                    on_remove.run(last.clone());
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="chip-input">
            <label class="chip-input-label">{label}</label>
            <div class="chip-row">
                <For
                    each=move || chips.get()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let tag_for_remove = tag.clone();
                        view! {
                            <span class="chip">
                                {tag}
                                <button
                                    type="button"
                                    class="chip-remove"
                                    on:click=move |_| on_remove.run(tag_for_remove.clone())
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
                <input
                    type="text"
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                    }
                    on:keydown=on_keydown
                />
            </div>

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    return view! { <div></div> }.into_any();
                }
                let selected = selected_idx.get();
                view! {
                    <div class="autocomplete-list">
                        {sugg.into_iter().enumerate().map(|(i, name)| {
                            let name_for_click = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if i == selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        accept_suggestion(name_for_click.clone());
                                    }
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
