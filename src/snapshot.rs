//! Snapshot - an immutable point-in-time copy of the sign-up sheet
//!
//! A snapshot never changes after it is fetched; observing later writes
//! means fetching a new one. Snapshots also carry the degraded marker for
//! reads that failed open, so the caller can render an empty list and
//! still tell the user the sheet could not be reached.

use crate::entry::{dish_key, Category, Entry};
use std::collections::HashMap;

/// Ordered entries as read from the table at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<Entry>,
    degraded: Option<String>,
}

impl Snapshot {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            degraded: None,
        }
    }

    /// An empty snapshot produced because the store could not be read.
    /// The reason is surfaced through [`Snapshot::degraded`].
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            degraded: Some(reason.into()),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Why the read failed, when it did. `None` for a healthy snapshot.
    pub fn degraded_reason(&self) -> Option<&str> {
        self.degraded.as_deref()
    }

    /// Whether a dish with this name (trim- and case-insensitive) is
    /// already on the list
    pub fn contains_dish(&self, dish: &str) -> bool {
        let key = dish_key(dish);
        self.entries.iter().any(|e| e.dish_key() == key)
    }

    /// The stored entry matching this dish name, if any
    pub fn find_dish(&self, dish: &str) -> Option<&Entry> {
        let key = dish_key(dish);
        self.entries.iter().find(|e| e.dish_key() == key)
    }

    /// Entries grouped by known category, preserving sheet order within
    /// each group. Entries with labels outside the fixed set are skipped.
    pub fn by_category(&self) -> HashMap<Category, Vec<&Entry>> {
        let mut groups: HashMap<Category, Vec<&Entry>> = HashMap::new();
        for entry in &self.entries {
            if let Some(category) = entry.known_category() {
                groups.entry(category).or_default().push(entry);
            }
        }
        groups
    }

    /// Entry count per category, zero-filled for empty categories
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let groups = self.by_category();
        Category::all()
            .iter()
            .map(|c| (*c, groups.get(c).map(Vec::len).unwrap_or(0)))
            .collect()
    }
}

impl IntoIterator for Snapshot {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
