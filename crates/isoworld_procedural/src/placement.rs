//! # Diamond Placement
//!
//! Containment tests and seeded random points inside the map's diamond
//! footprint, shrunk by a margin so objects do not hang over the edge.

use isoworld_shared::{IsoGrid, Vec2};
use rand::Rng;

/// Attempts made by [`DiamondBounds::random_point`] before falling back to
/// the center.
pub const PLACEMENT_ATTEMPTS: u32 = 100;

/// The map diamond in world space, inset by a margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiamondBounds {
    top: Vec2,
    right: Vec2,
    bottom: Vec2,
    left: Vec2,
    center: Vec2,
}

impl DiamondBounds {
    /// Diamond of `grid`, with each vertex pulled `margin` pixels inwards
    /// along its own axis.
    #[must_use]
    pub fn new(grid: &IsoGrid, margin: f32) -> Self {
        let [mut top, mut right, mut bottom, mut left] = grid.corners();
        top.y += margin;
        bottom.y -= margin;
        left.x += margin;
        right.x -= margin;

        let half = Vec2::new((grid.cols / 2) as f32, (grid.rows / 2) as f32);
        Self {
            top,
            right,
            bottom,
            left,
            center: grid.tile_to_world(half.x, half.y),
        }
    }

    /// Vertices in winding order `[top, right, bottom, left]`.
    #[must_use]
    pub const fn vertices(&self) -> [Vec2; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// World position of the central tile, used as the placement fallback.
    #[must_use]
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// True if `p` lies inside or on the (inset) diamond.
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        let verts = self.vertices();
        let mut sign = 0.0f32;
        for i in 0..4 {
            let a = verts[i];
            let b = verts[(i + 1) % 4];
            let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
            if cross.abs() <= f32::EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Whether the margin left any area at all.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.right.x <= self.left.x || self.bottom.y <= self.top.y
    }

    /// Rejection-samples a point inside the diamond.
    ///
    /// Falls back to [`DiamondBounds::center`] when the margin swallowed the
    /// whole diamond or no sample landed inside after
    /// [`PLACEMENT_ATTEMPTS`] tries.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        if self.is_degenerate() {
            return self.center;
        }

        for _ in 0..PLACEMENT_ATTEMPTS {
            let p = Vec2::new(
                rng.gen_range(self.left.x..self.right.x).floor(),
                rng.gen_range(self.top.y..self.bottom.y).floor(),
            );
            if self.contains(p) {
                return p;
            }
        }

        tracing::debug!("placement fell back to map center");
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::WorldSeed;

    #[test]
    fn test_contains_center_and_rejects_corners() {
        let grid = IsoGrid::new(10, 10);
        let bounds = DiamondBounds::new(&grid, 0.0);
        let size = grid.pixel_size().as_vec2();

        assert!(bounds.contains(Vec2::new(size.x / 2.0, size.y / 2.0)));
        assert!(!bounds.contains(Vec2::new(1.0, 1.0)));
        assert!(!bounds.contains(Vec2::new(size.x - 1.0, 1.0)));
        assert!(!bounds.contains(Vec2::new(1.0, size.y - 1.0)));
        assert!(!bounds.contains(Vec2::new(size.x - 1.0, size.y - 1.0)));
    }

    #[test]
    fn test_margin_shrinks_area() {
        let grid = IsoGrid::new(10, 10);
        let outer = DiamondBounds::new(&grid, 0.0);
        let inner = DiamondBounds::new(&grid, 40.0);
        let near_top = outer.vertices()[0] + Vec2::new(0.0, 10.0);
        assert!(outer.contains(near_top));
        assert!(!inner.contains(near_top));
    }

    #[test]
    fn test_random_points_inside() {
        let grid = IsoGrid::new(25, 25);
        let bounds = DiamondBounds::new(&grid, 80.0);
        let mut rng = WorldSeed::new(99).rng();
        for _ in 0..500 {
            let p = bounds.random_point(&mut rng);
            assert!(bounds.contains(p) || p == bounds.center());
        }
    }

    #[test]
    fn test_random_points_reproducible() {
        let grid = IsoGrid::new(20, 20);
        let bounds = DiamondBounds::new(&grid, 10.0);
        let mut a = WorldSeed::new(5).rng();
        let mut b = WorldSeed::new(5).rng();
        for _ in 0..50 {
            assert_eq!(bounds.random_point(&mut a), bounds.random_point(&mut b));
        }
    }

    #[test]
    fn test_degenerate_margin_falls_back() {
        let grid = IsoGrid::new(2, 2);
        let bounds = DiamondBounds::new(&grid, 10_000.0);
        assert!(bounds.is_degenerate());
        let mut rng = WorldSeed::default().rng();
        assert_eq!(bounds.random_point(&mut rng), bounds.center());
    }
}
