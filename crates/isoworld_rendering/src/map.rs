//! # Map Compositor
//!
//! A static tile grid and its pre-rendered image. The image is built once,
//! at construction, by blending every tile sprite into a transparent buffer
//! covering the whole diamond. Frames only copy windows out of it.
//!
//! Pixels outside the diamond stay fully transparent, which is what
//! placement code uses to tell "on the map" from "off the map".

use isoworld_procedural::{TilePalette, TileType};
use isoworld_shared::{IsoGrid, UVec2};

use crate::error::{RenderError, RenderResult};
use crate::framebuffer::FrameBuffer;

/// Immutable tile grid plus its composited image.
#[derive(Clone, Debug)]
pub struct Map {
    grid: IsoGrid,
    tiles: Vec<TileType>,
    image: FrameBuffer,
}

impl Map {
    /// A `cols x rows` map covered in grass.
    ///
    /// # Errors
    ///
    /// See [`Map::from_tiles`].
    pub fn new(cols: u32, rows: u32, palette: &TilePalette) -> RenderResult<Self> {
        let grid = IsoGrid::new(cols, rows);
        Self::from_tiles(grid, vec![TileType::Grass; grid.tile_count()], palette)
    }

    /// Builds a map from an explicit row-major tile grid.
    ///
    /// # Errors
    ///
    /// - [`RenderError::InvalidDimensions`] if either grid dimension is 0
    /// - [`RenderError::TileCountMismatch`] if `tiles.len() != cols * rows`
    /// - [`RenderError::Allocation`] if the image cannot be allocated
    pub fn from_tiles(
        grid: IsoGrid,
        tiles: Vec<TileType>,
        palette: &TilePalette,
    ) -> RenderResult<Self> {
        if grid.cols == 0 || grid.rows == 0 {
            return Err(RenderError::InvalidDimensions {
                width: grid.cols,
                height: grid.rows,
            });
        }
        if tiles.len() != grid.tile_count() {
            return Err(RenderError::TileCountMismatch {
                expected: grid.tile_count(),
                actual: tiles.len(),
            });
        }

        let size = grid.pixel_size();
        let mut image = FrameBuffer::new(size.x, size.y)?;
        let drawn = composite(&grid, &tiles, palette, &mut image);

        tracing::debug!(
            cols = grid.cols,
            rows = grid.rows,
            width = size.x,
            height = size.y,
            tiles_drawn = drawn,
            "map composited"
        );

        Ok(Self { grid, tiles, image })
    }

    /// The grid geometry.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &IsoGrid {
        &self.grid
    }

    /// Tile at `(tx, ty)`, `None` outside the grid.
    #[must_use]
    pub fn tile(&self, tx: u32, ty: u32) -> Option<TileType> {
        self.grid.index(tx, ty).map(|i| self.tiles[i])
    }

    /// Row-major tiles.
    #[must_use]
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    /// Image size in pixels.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> UVec2 {
        self.image.size()
    }

    /// Image pixel at `(x, y)`, `None` outside the image.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let (x, y) = (i32::try_from(x).ok()?, i32::try_from(y).ok()?);
        self.image.pixel(x, y)
    }

    /// The pre-rendered image.
    #[inline]
    #[must_use]
    pub const fn image(&self) -> &FrameBuffer {
        &self.image
    }
}

/// Blends every visible tile into `image` in row-major order. Returns the
/// number of tiles drawn.
fn composite(
    grid: &IsoGrid,
    tiles: &[TileType],
    palette: &TilePalette,
    image: &mut FrameBuffer,
) -> usize {
    let mut drawn = 0;
    for ty in 0..grid.rows {
        for tx in 0..grid.cols {
            let tile = tiles[ty as usize * grid.cols as usize + tx as usize];
            if !tile.is_visible() {
                continue;
            }
            let sprite = palette.sprite(tile);
            if sprite.is_absent() {
                continue;
            }
            let (x, y) = grid.tile_to_world(tx as f32, ty as f32).floor_i32();
            if image.blit_sprite(sprite, x, y, false) > 0 {
                drawn += 1;
            }
        }
    }
    drawn
}
