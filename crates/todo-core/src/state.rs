//! Item List State
//!
//! The reducer: every action turns one `TodoItemsState` into the next.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ItemEdit};
use crate::id::IdGenerator;
use crate::model::{Item, ItemId};

/// Fresh ids drawn for one `add` before giving up on it
const MAX_ID_DRAWS: usize = 8;

/// The whole item list, also the persisted snapshot shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemsState {
    pub todo_items: Vec<Item>,
}

impl TodoItemsState {
    pub fn new(todo_items: Vec<Item>) -> Self {
        Self { todo_items }
    }

    pub fn items(&self) -> &[Item] {
        &self.todo_items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.todo_items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.todo_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todo_items.is_empty()
    }

    /// Compute the state after `action`.
    ///
    /// Actions naming an id that is not in the list leave the state unchanged.
    pub fn apply(mut self, action: Action, ids: &mut impl IdGenerator) -> Self {
        match action {
            Action::LoadState(items) => Self::new(dedup_by_id(items)),
            Action::Add(new_item) => {
                let fresh = std::iter::repeat_with(|| ids.next_id())
                    .take(MAX_ID_DRAWS)
                    .find(|id| !self.contains(id));
                match fresh {
                    Some(id) => self.todo_items.insert(0, Item::from_new(id, new_item)),
                    None => log::error!("add: no unused id after {MAX_ID_DRAWS} draws, item dropped"),
                }
                self
            }
            Action::Delete { id } => {
                self.todo_items.retain(|item| item.id != id);
                self
            }
            Action::Edit(ItemEdit { id, patch }) => {
                match self.item_mut(&id) {
                    Some(item) => item.apply_patch(patch),
                    None => log::debug!("edit: no item {id}"),
                }
                self
            }
            Action::ToggleDone { id } => {
                match self.item_mut(&id) {
                    Some(item) => item.done = !item.done,
                    None => log::debug!("toggleDone: no item {id}"),
                }
                self
            }
        }
    }

    fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.todo_items.iter_mut().find(|item| &item.id == id)
    }
}

/// Keep the first item for each id
fn dedup_by_id(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let before = items.len();
    let items: Vec<Item> = items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect();
    if items.len() != before {
        log::warn!("loadState dropped {} item(s) with duplicate ids", before - items.len());
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemPatch, NewItem};

    struct Counter(u32);

    impl IdGenerator for Counter {
        fn next_id(&mut self) -> ItemId {
            self.0 += 1;
            ItemId::new(format!("id-{}", self.0))
        }
    }

    fn seeded() -> (TodoItemsState, Counter) {
        let mut ids = Counter(0);
        let state = TodoItemsState::default()
            .apply(Action::add(NewItem::new("first")), &mut ids)
            .apply(Action::add(NewItem::new("second")), &mut ids)
            .apply(Action::add(NewItem::new("third")), &mut ids);
        (state, ids)
    }

    fn titles(state: &TodoItemsState) -> Vec<&str> {
        state.items().iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_add_prepends() {
        let (state, _) = seeded();
        assert_eq!(titles(&state), ["third", "second", "first"]);
        assert!(state.items().iter().all(|i| !i.done));
    }

    #[test]
    fn test_add_skips_colliding_id() {
        let mut ids = Counter(0);
        let existing = Item::from_new(ItemId::new("id-1"), NewItem::new("loaded"));
        let state = TodoItemsState::default()
            .apply(Action::LoadState(vec![existing]), &mut ids)
            .apply(Action::add(NewItem::new("new")), &mut ids);
        assert_eq!(state.items()[0].id.as_str(), "id-2");
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_add_gives_up_on_a_stuck_generator() {
        struct Stuck;

        impl IdGenerator for Stuck {
            fn next_id(&mut self) -> ItemId {
                ItemId::new("same")
            }
        }

        let mut ids = Stuck;
        let state = TodoItemsState::default().apply(Action::add(NewItem::new("first")), &mut ids);
        let after = state.clone().apply(Action::add(NewItem::new("second")), &mut ids);
        assert_eq!(after, state);
        assert_eq!(titles(&after), ["first"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (state, mut ids) = seeded();
        let target = ItemId::new("id-2");
        let once = state.apply(Action::delete(target.clone()), &mut ids);
        assert_eq!(titles(&once), ["third", "first"]);
        let twice = once.clone().apply(Action::delete(target), &mut ids);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle_done_twice_restores() {
        let (state, mut ids) = seeded();
        let target = ItemId::new("id-2");
        let toggled = state.clone().apply(Action::toggle_done(target.clone()), &mut ids);
        assert!(toggled.get(&target).unwrap().done);
        assert_eq!(titles(&toggled), titles(&state));
        let back = toggled.apply(Action::toggle_done(target), &mut ids);
        assert_eq!(back, state);
    }

    #[test]
    fn test_edit_merges_named_fields() {
        let mut ids = Counter(0);
        let state = TodoItemsState::default().apply(
            Action::add(NewItem::new("Write").with_details("draft").with_tags(["work"])),
            &mut ids,
        );
        let id = ItemId::new("id-1");
        let edited = state.apply(
            Action::edit(id.clone(), ItemPatch::default().title("Write report")),
            &mut ids,
        );
        let item = edited.get(&id).unwrap();
        assert_eq!(item.title, "Write report");
        assert_eq!(item.details.as_deref(), Some("draft"));
        assert_eq!(item.tags, ["work"]);
        assert!(!item.done);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let (state, mut ids) = seeded();
        let ghost = ItemId::new("ghost");
        let after = state
            .clone()
            .apply(Action::delete(ghost.clone()), &mut ids)
            .apply(Action::toggle_done(ghost.clone()), &mut ids)
            .apply(Action::edit(ghost, ItemPatch::default().title("x")), &mut ids);
        assert_eq!(after, state);
    }

    #[test]
    fn test_load_state_replaces_and_dedups() {
        let (state, mut ids) = seeded();
        let a = Item::from_new(ItemId::new("a"), NewItem::new("A"));
        let a_again = Item::from_new(ItemId::new("a"), NewItem::new("A copy"));
        let b = Item::from_new(ItemId::new("b"), NewItem::new("B"));
        let loaded = state.apply(Action::LoadState(vec![a, a_again, b]), &mut ids);
        assert_eq!(titles(&loaded), ["A", "B"]);
    }

    #[test]
    fn test_snapshot_field_name() {
        let json = serde_json::to_string(&TodoItemsState::default()).unwrap();
        assert_eq!(json, r#"{"todoItems":[]}"#);
    }
}
