//! # Depth Sorting
//!
//! Painter's algorithm for isometric sprites: whatever reaches further down
//! the screen is in front. Sorting permutes an index array so the caller's
//! objects are never moved or copied.

use isoworld_shared::{depth_key, Sprite};

use crate::assets::SpriteStore;
use crate::object::GameObject;

/// Fills `order` with `0..keys.len()` sorted by ascending key. Equal keys
/// keep their original relative order.
pub fn sort_by_depth(keys: &[f32], order: &mut Vec<usize>) {
    order.clear();
    order.extend(0..keys.len());
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
}

/// Reusable sorter. Buffers grow to the largest object count seen and are
/// reused afterwards.
#[derive(Clone, Debug, Default)]
pub struct DepthSorter {
    keys: Vec<f32>,
    order: Vec<usize>,
}

impl DepthSorter {
    /// Creates an empty sorter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts `objects` back to front. Objects with unknown handles sort by
    /// their position alone.
    pub fn sort(&mut self, objects: &[GameObject], sprites: &SpriteStore) -> &[usize] {
        self.keys.clear();
        self.keys.extend(objects.iter().map(|o| {
            let height = sprites.get(o.sprite).map_or(0, Sprite::height);
            depth_key(o.position, height)
        }));
        sort_by_depth(&self.keys, &mut self.order);
        &self.order
    }
}
