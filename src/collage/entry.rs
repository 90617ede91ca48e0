// SPDX-License-Identifier: MPL-2.0
//! Collage entry data structures.
//!
//! An entry is one dropped image: a stable identity, the source file name,
//! and a load state that starts `Pending` and is resolved exactly once by
//! the asynchronous decode step.

/// Unique identifier for a collage entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

impl EntryId {
    /// Creates a new unique entry ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode progress of an entry's image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Natural dimensions are not known yet; the entry renders as a square
    /// placeholder.
    Pending,
    /// Decode succeeded; natural dimensions are known.
    Loaded { width: u32, height: u32 },
    /// Decode failed; the entry keeps its placeholder slot in the grid.
    Failed,
}

/// One collage image.
///
/// Entries are append-only: once inserted their position in the collection
/// never changes, and there is no removal or reorder operation.
#[derive(Debug, Clone)]
pub struct Entry {
    id: EntryId,
    source_name: String,
    load_state: LoadState,
}

impl Entry {
    /// Creates a new entry in the `Pending` state.
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            source_name: source_name.into(),
            load_state: LoadState::Pending,
        }
    }

    /// Returns the entry's unique ID.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the original file name of the dropped image.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the current load state.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Returns whether the entry's dimensions are known.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.load_state, LoadState::Loaded { .. })
    }

    /// Records the natural dimensions resolved by the decode step.
    pub fn mark_loaded(&mut self, width: u32, height: u32) {
        self.load_state = LoadState::Loaded { width, height };
    }

    /// Records a decode failure.
    pub fn mark_failed(&mut self) {
        self.load_state = LoadState::Failed;
    }

    /// Returns the natural aspect ratio (width / height).
    ///
    /// Entries without known dimensions report exactly `1.0`, so their
    /// placeholder occupies a square cell.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // image dimensions fit f32 exactly up to 16M
    pub fn aspect_ratio(&self) -> f32 {
        match self.load_state {
            LoadState::Loaded { width, height } if height > 0 => width as f32 / height as f32,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn entry_ids_are_unique() {
        let a = Entry::new("a.jpg");
        let b = Entry::new("b.jpg");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_entry_is_pending_with_square_ratio() {
        let entry = Entry::new("photo.png");
        assert_eq!(entry.load_state(), LoadState::Pending);
        assert!(!entry.is_loaded());
        assert_abs_diff_eq!(entry.aspect_ratio(), 1.0);
    }

    #[test]
    fn mark_loaded_sets_dimensions_and_ratio() {
        let mut entry = Entry::new("a.jpg");
        entry.mark_loaded(800, 600);

        assert_eq!(
            entry.load_state(),
            LoadState::Loaded {
                width: 800,
                height: 600
            }
        );
        assert_abs_diff_eq!(entry.aspect_ratio(), 800.0 / 600.0);
    }

    #[test]
    fn mark_failed_keeps_square_ratio() {
        let mut entry = Entry::new("broken.gif");
        entry.mark_failed();

        assert_eq!(entry.load_state(), LoadState::Failed);
        assert_abs_diff_eq!(entry.aspect_ratio(), 1.0);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let mut entry = Entry::new("degenerate.png");
        entry.mark_loaded(10, 0);
        assert_abs_diff_eq!(entry.aspect_ratio(), 1.0);
    }
}
