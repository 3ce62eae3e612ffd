//! Spatial Index Module
//!
//! R-tree over element rectangles (page coordinates), used by
//! [`crate::scene::Scene`] to answer point hit tests in O(log n).

use crate::types::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one element, keyed by its raw id.
#[derive(Debug, Clone, Copy)]
struct SpatialEntry {
    key: u64,
    min: [f32; 2],
    max: [f32; 2],
}

impl SpatialEntry {
    fn new(key: u64, rect: &Rect) -> Self {
        Self {
            key,
            min: [rect.min_x(), rect.min_y()],
            max: [rect.max_x(), rect.max_y()],
        }
    }

    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.x >= self.min[0] && p.x <= self.max[0] && p.y >= self.min[1] && p.y <= self.max[1]
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rectangle for `key`.
    pub fn insert(&mut self, key: u64, rect: &Rect) {
        if let Some(old) = self.entries.remove(&key) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(key, rect);
        self.tree.insert(entry);
        self.entries.insert(key, entry);
    }

    pub fn remove(&mut self, key: u64) -> bool {
        match self.entries.remove(&key) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Keys whose rectangle contains `p` (edges included), in no particular order.
    pub fn query_point(&self, p: Point) -> Vec<u64> {
        let envelope = AABB::from_point([p.x, p.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains(p))
            .map(|entry| entry.key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
