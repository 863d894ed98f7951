//! Store Actions
//!
//! The typed requests that move the item list from one state to the next.
//! On the wire an action is `{ "type": <kind>, "data": <payload> }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TodoError, TodoResult};
use crate::model::{Item, ItemId, ItemPatch, NewItem};

/// Every action kind understood by [`crate::TodoItemsState::apply`]
pub const ACTION_KINDS: [&str; 5] = ["loadState", "add", "delete", "edit", "toggleDone"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Action {
    /// Replace the whole list, used once at startup
    LoadState(Vec<Item>),
    /// Prepend a new item
    Add(NewItem),
    Delete { id: ItemId },
    Edit(ItemEdit),
    ToggleDone { id: ItemId },
}

/// Payload of [`Action::Edit`]: the target id plus the fields to merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEdit {
    pub id: ItemId,
    #[serde(flatten)]
    pub patch: ItemPatch,
}

impl Action {
    pub fn add(new_item: NewItem) -> Self {
        Action::Add(new_item)
    }

    pub fn delete(id: ItemId) -> Self {
        Action::Delete { id }
    }

    pub fn edit(id: ItemId, patch: ItemPatch) -> Self {
        Action::Edit(ItemEdit { id, patch })
    }

    pub fn toggle_done(id: ItemId) -> Self {
        Action::ToggleDone { id }
    }

    /// Wire name of this action
    pub fn kind(&self) -> &'static str {
        match self {
            Action::LoadState(_) => "loadState",
            Action::Add(_) => "add",
            Action::Delete { .. } => "delete",
            Action::Edit(_) => "edit",
            Action::ToggleDone { .. } => "toggleDone",
        }
    }

    /// Decode a serialized action.
    ///
    /// An unknown `type` is reported as [`TodoError::UnknownAction`] so callers
    /// can tell a programming error apart from a damaged payload.
    pub fn decode(value: Value) -> TodoResult<Action> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| TodoError::MalformedAction("missing \"type\" tag".to_string()))?;
        if !ACTION_KINDS.contains(&kind) {
            return Err(TodoError::UnknownAction(kind.to_string()));
        }
        serde_json::from_value(value).map_err(|e| TodoError::MalformedAction(e.to_string()))
    }
}
