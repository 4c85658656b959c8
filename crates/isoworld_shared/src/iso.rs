//! # Isometric Projection
//!
//! Tile ⇄ world mapping for a 2:1 diamond grid.
//!
//! ```text
//!            (0,0)
//!           /     \
//!      (0,1)       (1,0)
//!           \     /
//!            (1,1)
//! ```
//!
//! Tile `x` runs down-right, tile `y` runs down-left. World space is pixel
//! space of the pre-rendered map: origin at the top-left of its bounding box.
//!
//! None of these functions bounds-check. Out-of-grid input extrapolates.

use crate::constants::{HALF_TILE_HEIGHT, HALF_TILE_WIDTH, TILE_HEIGHT, TILE_WIDTH};
use crate::math::{UVec2, Vec2};

/// Maps a tile coordinate to the top-left of its sprite in unshifted world
/// space (tile (0,0) at world x = 0).
#[inline]
#[must_use]
pub fn tile_to_world(tx: f32, ty: f32) -> Vec2 {
    Vec2::new((tx - ty) * HALF_TILE_WIDTH, (tx + ty) * HALF_TILE_HEIGHT)
}

/// Inverse of [`tile_to_world`]. Callers floor or round the result to get a
/// tile index.
#[inline]
#[must_use]
pub fn world_to_tile(world: Vec2) -> Vec2 {
    let u = world.x / HALF_TILE_WIDTH;
    let v = world.y / HALF_TILE_HEIGHT;
    Vec2::new((u + v) * 0.5, (v - u) * 0.5)
}

/// Painter's algorithm key: the bottom edge of the sprite in world space.
/// Larger keys are drawn later, i.e. in front.
#[inline]
#[must_use]
pub fn depth_key(world_pos: Vec2, sprite_height: u32) -> f32 {
    world_pos.y + sprite_height as f32
}

/// A `cols x rows` diamond grid whose world space is shifted so that every
/// tile has a non-negative world x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IsoGrid {
    /// Tiles along the x axis.
    pub cols: u32,
    /// Tiles along the y axis.
    pub rows: u32,
}

impl IsoGrid {
    /// Creates a grid description.
    #[must_use]
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// World x offset applied so that tile `(0, rows-1)` starts at x = 0.
    #[inline]
    #[must_use]
    pub fn origin_x(&self) -> f32 {
        self.rows.saturating_sub(1) as f32 * HALF_TILE_WIDTH
    }

    /// Top-left world position of a tile's sprite.
    #[inline]
    #[must_use]
    pub fn tile_to_world(&self, tx: f32, ty: f32) -> Vec2 {
        let w = tile_to_world(tx, ty);
        Vec2::new(w.x + self.origin_x(), w.y)
    }

    /// Inverse of [`IsoGrid::tile_to_world`].
    #[inline]
    #[must_use]
    pub fn world_to_tile(&self, world: Vec2) -> Vec2 {
        world_to_tile(Vec2::new(world.x - self.origin_x(), world.y))
    }

    /// Size of the bounding box covering every tile, in pixels.
    #[must_use]
    pub const fn pixel_size(&self) -> UVec2 {
        let span = self.cols + self.rows;
        UVec2::new(span * (TILE_WIDTH / 2), span * (TILE_HEIGHT / 2))
    }

    /// Number of tiles.
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Row-major index of an in-bounds tile.
    #[inline]
    #[must_use]
    pub fn index(&self, tx: u32, ty: u32) -> Option<usize> {
        (tx < self.cols && ty < self.rows).then(|| ty as usize * self.cols as usize + tx as usize)
    }

    /// The four outer corners of the diamond in world space:
    /// `[top, right, bottom, left]`.
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        let (c, r) = (self.cols as f32, self.rows as f32);
        // Corner points sit at the top vertex of the tile they name.
        let apex = Vec2::new(HALF_TILE_WIDTH, 0.0);
        [
            self.tile_to_world(0.0, 0.0) + apex,
            self.tile_to_world(c, 0.0) + apex,
            self.tile_to_world(c, r) + apex,
            self.tile_to_world(0.0, r) + apex,
        ]
    }
}
