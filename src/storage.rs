//! Browser Storage
//!
//! `todo_core::Storage` over `window.localStorage`.

use todo_core::{Storage, TodoError, TodoResult};
use wasm_bindgen::JsValue;

/// Looks up `localStorage` on every call, so it holds no JS handles
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> TodoResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| TodoError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| TodoError::Storage("localStorage is unavailable".to_string()))
    }
}

impl Storage for BrowserStorage {
    fn read(&self, key: &str) -> TodoResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn write(&mut self, key: &str, value: &str) -> TodoResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> TodoError {
    TodoError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use todo_core::{Action, NewItem, TodoStore, UlidGenerator};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear(key: &str) {
        if let Ok(storage) = BrowserStorage::local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    #[wasm_bindgen_test]
    fn test_read_write() {
        let key = "test_read_write";
        clear(key);
        let mut storage = BrowserStorage;
        assert_eq!(storage.read(key).unwrap(), None);
        storage.write(key, "value").unwrap();
        assert_eq!(storage.read(key).unwrap().as_deref(), Some("value"));
        clear(key);
    }

    #[wasm_bindgen_test]
    fn test_store_survives_reopen() {
        let key = "test_store_survives_reopen";
        clear(key);
        let mut store = TodoStore::open(BrowserStorage, UlidGenerator::new(), key);
        store.dispatch(Action::add(NewItem::new("persisted").with_tags(["web"])));

        let reopened = TodoStore::open(BrowserStorage, UlidGenerator::new(), key);
        assert_eq!(reopened.items(), store.items());
        clear(key);
    }

    #[wasm_bindgen_test]
    fn test_malformed_value_starts_empty() {
        let key = "test_malformed_value_starts_empty";
        let mut storage = BrowserStorage;
        storage.write(key, "{broken").unwrap();
        let store = TodoStore::open(storage, UlidGenerator::new(), key);
        assert!(store.items().is_empty());
        clear(key);
    }
}
