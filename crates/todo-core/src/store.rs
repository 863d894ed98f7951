//! Todo Store
//!
//! Owns the item list, its storage and its id source. Every dispatched action
//! is reduced and the resulting state is written back to storage.

use serde_json::Value;

use crate::action::Action;
use crate::error::TodoResult;
use crate::id::IdGenerator;
use crate::model::Item;
use crate::persistence::{load_snapshot, save_snapshot, Storage};
use crate::state::TodoItemsState;

pub struct TodoStore<S, G> {
    state: TodoItemsState,
    storage: S,
    ids: G,
    key: String,
}

impl<S: Storage, G: IdGenerator> TodoStore<S, G> {
    /// Open the store, restoring the snapshot saved under `key` if it is readable
    pub fn open(storage: S, ids: G, key: impl Into<String>) -> Self {
        let mut store = Self {
            state: TodoItemsState::default(),
            storage,
            ids,
            key: key.into(),
        };
        match load_snapshot(&store.storage, &store.key) {
            Some(saved) => store.dispatch(Action::LoadState(saved.todo_items)),
            None => store.persist(),
        }
        store
    }

    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {}", action.kind());
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action, &mut self.ids);
        self.persist();
    }

    /// Decode and dispatch a serialized action; on error the state is untouched
    pub fn dispatch_raw(&mut self, value: Value) -> TodoResult<()> {
        let action = Action::decode(value).inspect_err(|err| log::error!("rejected action: {err}"))?;
        self.dispatch(action);
        Ok(())
    }

    pub fn state(&self) -> &TodoItemsState {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        self.state.items()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write failures keep the in-memory state; the next change retries the write
    fn persist(&mut self) {
        if let Err(err) = save_snapshot(&mut self.storage, &self.key, &self.state) {
            log::error!("saving snapshot {:?} failed: {err}", self.key);
        }
    }
}
