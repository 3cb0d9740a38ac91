//! R-tree spatial index over note bounding boxes.
//!
//! Backs point hit-testing (pointer-down disambiguation) and rectangle
//! queries (marquee selection) in O(log n) instead of a linear scan over the
//! note set.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

use crate::types::{NoteId, Point, Rect};

/// Bounding box of one note, as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: NoteId,
    pub bounds: Rect,
}

impl SpatialEntry {
    fn new(id: NoteId, bounds: Rect) -> Self {
        Self { id, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index over the live note set. Kept in sync by the note store on
/// every create/remove/move/resize.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NoteId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the entry for a note.
    pub fn upsert(&mut self, id: NoteId, bounds: Rect) {
        if let Some(old) = self.entries.remove(&id) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(id, bounds);
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: NoteId) -> bool {
        if let Some(entry) = self.entries.remove(&id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All notes whose bounds contain the given point.
    pub fn query_point(&self, p: Point) -> Vec<NoteId> {
        let envelope = AABB::from_point([p.x, p.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|e| e.bounds.contains(p))
            .map(|e| e.id)
            .collect()
    }

    /// All notes whose bounds intersect the given rectangle.
    pub fn query_rect(&self, rect: Rect) -> Vec<NoteId> {
        let envelope = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|e| e.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
