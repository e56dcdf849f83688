//! In-memory bookmark store.
//!
//! Holds the current bookmark set as a map from manga identifier to
//! [`BookmarkEntry`]. The store is the single source of truth for "what the
//! user has bookmarked"; it is replaced wholesale on each successful
//! synchronization and may also be updated one row at a time from pages that
//! already contain bookmark markup.

use std::collections::HashMap;

use crate::types::bookmark::{BookmarkEntry, BookmarkRow};

/// Trait defining the bookmark store interface.
pub trait BookmarkStoreTrait {
    /// Replaces the entire store contents with entries built from `rows`.
    fn replace_all(&mut self, rows: &[BookmarkRow]);
    /// Inserts or overwrites the entry for `row`, returning its manga id.
    fn upsert(&mut self, row: &BookmarkRow) -> String;
    /// Finds the first entry whose link matches, together with its manga id.
    fn lookup_by_link(&self, link: &str) -> Option<(&str, &BookmarkEntry)>;
    fn is_empty(&self) -> bool;
    fn count(&self) -> usize;
    /// All entries keyed by manga id. The returned map is a live reference;
    /// callers must treat it as read-only.
    fn all(&self) -> &HashMap<String, BookmarkEntry>;
    /// Toggles whether subsequent upserts populate `name`/`is_completed`.
    /// Not retroactive: existing entries keep the shape they were built with.
    fn set_extended(&mut self, extended: bool);
    fn is_extended(&self) -> bool;
}

/// In-memory bookmark map.
pub struct BookmarkStore {
    entries: HashMap<String, BookmarkEntry>,
    extended: bool,
}

impl BookmarkStore {
    /// Creates an empty store in baseline (non-extended) mode.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            extended: false,
        }
    }

    /// Builds an entry from a parsed row per the current extended flag.
    fn build_entry(&self, row: &BookmarkRow) -> BookmarkEntry {
        BookmarkEntry {
            link: row.link.clone(),
            bookmark_id: row.bookmark_id.clone(),
            is_read: row.is_read,
            name: self.extended.then(|| row.name.clone()),
            is_completed: self.extended.then_some(row.is_completed),
        }
    }

    /// Strips one leading `/` so both `/Manga/Foo` and `Manga/Foo` hit the
    /// stored form.
    fn normalize_link(link: &str) -> &str {
        link.strip_prefix('/').unwrap_or(link)
    }
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    /// Replaces all entries. The new map is built in full before being
    /// swapped in, so a reader never observes a partially-cleared store.
    fn replace_all(&mut self, rows: &[BookmarkRow]) {
        let mut next = HashMap::with_capacity(rows.len());
        for row in rows {
            next.insert(row.id.clone(), self.build_entry(row));
        }
        self.entries = next;
    }

    fn upsert(&mut self, row: &BookmarkRow) -> String {
        let entry = self.build_entry(row);
        self.entries.insert(row.id.clone(), entry);
        row.id.clone()
    }

    /// Linear scan over all entries.
    ///
    /// Links are not required to be unique; when two entries share a link the
    /// first match in map iteration order wins.
    fn lookup_by_link(&self, link: &str) -> Option<(&str, &BookmarkEntry)> {
        let link = Self::normalize_link(link);
        self.entries
            .iter()
            .find(|(_, entry)| entry.link == link)
            .map(|(id, entry)| (id.as_str(), entry))
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn all(&self) -> &HashMap<String, BookmarkEntry> {
        &self.entries
    }

    fn set_extended(&mut self, extended: bool) {
        self.extended = extended;
    }

    fn is_extended(&self) -> bool {
        self.extended
    }
}
