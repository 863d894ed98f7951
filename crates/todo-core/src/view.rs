//! View Projection
//!
//! Derives the list shown to the user from the raw items and the active
//! filter tags. Stateless; recomputed on every render.

use std::collections::HashSet;

use crate::model::Item;

/// Items carrying every filter tag, open items first.
///
/// Within the open and done groups the input order is kept.
pub fn visible_items<'a>(items: &'a [Item], filter_tags: &[String]) -> Vec<&'a Item> {
    let (open, done): (Vec<&Item>, Vec<&Item>) = items
        .iter()
        .filter(|item| matches_filter(item, filter_tags))
        .partition(|item| !item.done);
    open.into_iter().chain(done).collect()
}

/// AND semantics: an empty filter matches everything
pub fn matches_filter(item: &Item, filter_tags: &[String]) -> bool {
    filter_tags.iter().all(|tag| item.has_tag(tag))
}

/// Every distinct tag in first-seen order
pub fn known_tags(items: &[Item]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|item| item.tags.iter())
        .filter(|tag| seen.insert(*tag))
        .cloned()
        .collect()
}
