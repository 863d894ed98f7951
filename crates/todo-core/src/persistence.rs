//! Persistence Bridge
//!
//! Reads and writes the whole item list as one JSON snapshot under a single
//! storage key. There is no versioning: a value that does not parse is treated
//! as "nothing saved".

use std::collections::HashMap;

use crate::error::{TodoError, TodoResult};
use crate::state::TodoItemsState;

/// Storage key used when none is configured
pub const SNAPSHOT_KEY: &str = "todoListState";

/// String key-value storage, e.g. `window.localStorage`
pub trait Storage {
    fn read(&self, key: &str) -> TodoResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> TodoResult<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> TodoResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> TodoResult<()> {
        (**self).write(key, value)
    }
}

/// In-process storage for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with one raw value
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> TodoResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the saved snapshot, if there is a readable one.
///
/// Failures are logged and reported as `None`; nothing escapes to the caller.
pub fn load_snapshot(storage: &impl Storage, key: &str) -> Option<TodoItemsState> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("no saved snapshot under {key:?}, starting empty");
            return None;
        }
        Err(err) => {
            log::warn!("reading snapshot {key:?} failed: {err}");
            return None;
        }
    };
    match decode_snapshot(&raw) {
        Ok(state) => {
            log::info!("loaded {} item(s) from {key:?}", state.len());
            Some(state)
        }
        Err(err) => {
            log::warn!("ignoring malformed snapshot under {key:?}: {err}");
            None
        }
    }
}

/// Serialize the full state and overwrite whatever is stored under `key`
pub fn save_snapshot(storage: &mut impl Storage, key: &str, state: &TodoItemsState) -> TodoResult<()> {
    let raw = encode_snapshot(state)?;
    storage.write(key, &raw)
}

pub fn encode_snapshot(state: &TodoItemsState) -> TodoResult<String> {
    serde_json::to_string(state).map_err(TodoError::from)
}

pub fn decode_snapshot(raw: &str) -> TodoResult<TodoItemsState> {
    serde_json::from_str(raw).map_err(TodoError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, ItemId, NewItem};

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read(&self, _key: &str) -> TodoResult<Option<String>> {
            Err(TodoError::Storage("access denied".to_string()))
        }

        fn write(&mut self, _key: &str, _value: &str) -> TodoResult<()> {
            Err(TodoError::Storage("quota exceeded".to_string()))
        }
    }

    fn sample_state() -> TodoItemsState {
        let mut done = Item::from_new(ItemId::new("b"), NewItem::new("Second").with_tags(["x", "y"]));
        done.done = true;
        TodoItemsState::new(vec![
            Item::from_new(ItemId::new("a"), NewItem::new("First").with_details("notes")),
            done,
        ])
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let state = sample_state();
        save_snapshot(&mut storage, SNAPSHOT_KEY, &state).unwrap();
        assert_eq!(load_snapshot(&storage, SNAPSHOT_KEY), Some(state));
    }

    #[test]
    fn test_absent_snapshot() {
        assert_eq!(load_snapshot(&MemoryStorage::new(), SNAPSHOT_KEY), None);
    }

    #[test]
    fn test_malformed_snapshots_load_as_none() {
        for raw in ["{not json", "[]", r#"{"todoItems": 3}"#, r#"{"todoItems":[{"title":"no id"}]}"#] {
            let storage = MemoryStorage::with_entry(SNAPSHOT_KEY, raw);
            assert_eq!(load_snapshot(&storage, SNAPSHOT_KEY), None, "raw: {raw}");
        }
    }

    #[test]
    fn test_unreadable_storage_loads_as_none() {
        assert_eq!(load_snapshot(&BrokenStorage, SNAPSHOT_KEY), None);
    }

    #[test]
    fn test_write_error_is_returned() {
        let err = save_snapshot(&mut BrokenStorage, SNAPSHOT_KEY, &sample_state()).unwrap_err();
        assert!(matches!(err, TodoError::Storage(_)));
    }

    #[test]
    fn test_reads_snapshot_without_optional_fields() {
        let raw = r#"{"todoItems":[{"id":"k","title":"T","done":true}]}"#;
        let state = decode_snapshot(raw).unwrap();
        assert_eq!(state.items()[0].tags, Vec::<String>::new());
        assert!(state.items()[0].done);
    }

    #[test]
    fn test_null_tags_keep_the_snapshot() {
        let raw = r#"{"todoItems":[{"id":"k","title":"T","done":false,"tags":null},{"id":"j","title":"U"}]}"#;
        let storage = MemoryStorage::with_entry(SNAPSHOT_KEY, raw);
        let state = load_snapshot(&storage, SNAPSHOT_KEY).unwrap();
        assert_eq!(state.len(), 2);
        assert!(state.items()[0].tags.is_empty());
    }
}
