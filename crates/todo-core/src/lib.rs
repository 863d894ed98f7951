//! Tagged Todos Core
//!
//! The item store, its persistence bridge and the derived view, independent of
//! any UI toolkit or browser API.

mod action;
mod error;
mod filter;
mod id;
mod model;
mod persistence;
mod state;
mod store;
mod tag_input;
mod view;

pub use action::{Action, ItemEdit, ACTION_KINDS};
pub use error::{TodoError, TodoResult};
pub use filter::FilterTags;
pub use id::{IdGenerator, UlidGenerator};
pub use model::{Item, ItemId, ItemPatch, NewItem};
pub use persistence::{
    decode_snapshot, encode_snapshot, load_snapshot, save_snapshot, MemoryStorage, Storage, SNAPSHOT_KEY,
};
pub use state::TodoItemsState;
pub use store::TodoStore;
pub use tag_input::{fuzzy_match, parse_tag_input, suggest_tags};
pub use view::{known_tags, matches_filter, visible_items};
