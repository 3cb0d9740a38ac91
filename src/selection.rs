//! Selection manager: the set of currently selected notes.
//!
//! Membership is keyed by [`NoteId`], never by render identity. Insertion
//! order is preserved so clipboard captures are stable. The session prunes
//! entries whenever their note leaves the store, so callers never observe a
//! dangling id.

use crate::types::NoteId;

#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    // Insertion-ordered, no duplicates. Selections are small enough that a
    // linear membership scan beats maintaining a parallel set.
    ids: Vec<NoteId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the selection and select only `id`.
    pub fn select_exclusive(&mut self, id: NoteId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Add `id` to the selection if not already present.
    pub fn add(&mut self, id: NoteId) {
        if !self.contains(id) {
            self.ids.push(id);
        }
    }

    /// Additive toggle: remove `id` if selected, add it otherwise.
    pub fn toggle(&mut self, id: NoteId) {
        if self.contains(id) {
            self.remove(id);
        } else {
            self.ids.push(id);
        }
    }

    /// Remove `id` from the selection; a no-op when absent.
    pub fn remove(&mut self, id: NoteId) {
        self.ids.retain(|&existing| existing != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.ids.contains(&id)
    }

    /// Replace the whole selection with `ids`, dropping duplicates while
    /// keeping first-seen order.
    pub fn replace_with(&mut self, ids: impl IntoIterator<Item = NoteId>) {
        self.ids.clear();
        for id in ids {
            self.add(id);
        }
    }

    /// Selected ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = NoteId> + '_ {
        self.ids.iter().copied()
    }

    pub fn ids(&self) -> Vec<NoteId> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
