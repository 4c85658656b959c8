//! # Static Scenery
//!
//! Scatters trees, bushes and rocks over a map. A candidate spot is kept
//! only if the whole sprite fits inside the map image and the map pixel
//! under the sprite's bottom-center is opaque, i.e. the object stands on a
//! tile rather than in the void around the diamond.

use isoworld_procedural::DiamondBounds;
use isoworld_rendering::{GameObject, Map, SpriteHandle, SpriteStore};
use isoworld_shared::color::alpha;
use isoworld_shared::Vec2;
use rand::Rng;

/// Candidate spots tried per requested object before giving up.
pub const ATTEMPTS_PER_OBJECT: usize = 50;

/// Places up to `count` objects, each using a random sprite from `kinds`.
///
/// Absent sprites in `kinds` are never chosen. Returns fewer than `count`
/// objects when the map is too crowded or too small to find spots.
pub fn scatter_static_objects<R: Rng + ?Sized>(
    map: &Map,
    sprites: &SpriteStore,
    kinds: &[SpriteHandle],
    count: usize,
    margin: f32,
    rng: &mut R,
) -> Vec<GameObject> {
    let usable: Vec<SpriteHandle> = kinds
        .iter()
        .copied()
        .filter(|&h| sprites.get(h).is_some_and(|s| !s.is_absent()))
        .collect();

    let mut objects = Vec::with_capacity(count);
    if usable.is_empty() || count == 0 {
        return objects;
    }

    let bounds = DiamondBounds::new(map.grid(), margin);
    let map_size = map.size();
    let max_attempts = count.saturating_mul(ATTEMPTS_PER_OBJECT);

    let mut attempts = 0;
    while objects.len() < count && attempts < max_attempts {
        attempts += 1;

        let handle = usable[rng.gen_range(0..usable.len())];
        let Some(sprite) = sprites.get(handle) else {
            continue;
        };

        let spot = bounds.random_point(rng);
        if spot.x < 0.0 || spot.y < 0.0 {
            continue;
        }
        let (x, y) = (spot.x as u32, spot.y as u32);

        // Whole sprite inside the map image
        if x + sprite.width() >= map_size.x || y + sprite.height() >= map_size.y {
            continue;
        }

        // Feet on an opaque map pixel
        let foot = map.pixel(x + sprite.width() / 2, y + sprite.height());
        if foot.map_or(true, |p| alpha(p) == 0) {
            continue;
        }

        objects.push(GameObject::new(Vec2::new(x as f32, y as f32), handle));
    }

    if objects.len() < count {
        tracing::warn!(
            placed = objects.len(),
            requested = count,
            attempts,
            "could not place every static object"
        );
    } else {
        tracing::debug!(placed = objects.len(), attempts, "static objects scattered");
    }
    objects
}
