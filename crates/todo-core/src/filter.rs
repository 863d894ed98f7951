//! Filter Selection
//!
//! The tags currently restricting the visible list. Never persisted.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTags {
    tags: Vec<String>,
}

impl FilterTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag; blank and already-selected tags are ignored.
    /// Returns whether the selection changed.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Drop every occurrence of `tag`
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilterTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut filter = Self::new();
        for tag in iter {
            filter.add(tag.as_ref());
        }
        filter
    }
}
