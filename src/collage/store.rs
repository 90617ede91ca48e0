// SPDX-License-Identifier: MPL-2.0
//! The ordered, append-only collection of collage entries.
//!
//! The store is a passive data object: it never triggers layout itself.
//! Callers mutate it and then re-invoke the layout engine.

use super::entry::{Entry, EntryId};

/// Holds all collage entries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the end of the collection and returns its ID.
    ///
    /// Append is the only structural mutation: entries are never removed
    /// or reordered afterwards.
    pub fn append(&mut self, entry: Entry) -> EntryId {
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    /// Transitions one entry to `Loaded` with its natural dimensions.
    ///
    /// Returns `false` if no entry with the given ID exists.
    pub fn mark_loaded(&mut self, id: EntryId, width: u32, height: u32) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.mark_loaded(width, height);
                true
            }
            None => false,
        }
    }

    /// Transitions one entry to `Failed`.
    ///
    /// Returns `false` if no entry with the given ID exists.
    pub fn mark_failed(&mut self, id: EntryId) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.mark_failed();
                true
            }
            None => false,
        }
    }

    /// Returns all entries in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks up an entry by ID.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the collage has no entries yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
