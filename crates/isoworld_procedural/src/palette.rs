//! Tile sprite palette.
//!
//! Every tile type's sprite is generated once at level load and shared by
//! all cells of that type. Index 0 (`Empty`) is always the absent sprite.

use isoworld_shared::Sprite;

use crate::tile::{generate_tile, TileType, TILE_TYPE_COUNT};

/// One generated sprite per tile type.
#[derive(Clone, Debug)]
pub struct TilePalette {
    sprites: [Sprite; TILE_TYPE_COUNT],
}

impl TilePalette {
    /// Generates the full palette from each type's base color.
    #[must_use]
    pub fn generate() -> Self {
        let sprites = TileType::ALL.map(|tile_type| {
            if tile_type.is_visible() {
                generate_tile(tile_type.base_color(), tile_type)
            } else {
                Sprite::empty()
            }
        });

        let generated = sprites.iter().filter(|s| !s.is_absent()).count();
        tracing::debug!(generated, "tile palette generated");

        Self { sprites }
    }

    /// Sprite for a tile type. Absent for `Empty` or failed generation.
    #[inline]
    #[must_use]
    pub fn sprite(&self, tile_type: TileType) -> &Sprite {
        &self.sprites[tile_type.index()]
    }

    /// Replaces a slot, e.g. with artist-drawn tile art.
    pub fn set_sprite(&mut self, tile_type: TileType, sprite: Sprite) {
        if tile_type.is_visible() {
            self.sprites[tile_type.index()] = sprite;
        }
    }
}

impl Default for TilePalette {
    fn default() -> Self {
        Self::generate()
    }
}
