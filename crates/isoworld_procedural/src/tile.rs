//! # Isometric Tile Generator
//!
//! Builds one `TILE_WIDTH x TILE_HEIGHT` diamond sprite per tile type.
//!
//! ## Pipeline (per pixel)
//!
//! 1. Diamond mask: rows shrink linearly towards the top and bottom vertex
//! 2. Hash noise from the pixel coordinate
//! 3. Type modulation (grass flecks, water waves, sand speckle, ...)
//! 4. Edge darkening towards the diamond outline
//! 5. Clamp and pack to ARGB32

use isoworld_shared::color::{pack_argb_f32, TRANSPARENT};
use isoworld_shared::{Color, Sprite, TILE_HEIGHT, TILE_WIDTH};

use crate::hash::{hash_u32, rand01};

/// Number of tile types, including `Empty`.
pub const TILE_TYPE_COUNT: usize = 7;

/// Tile types of the static world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TileType {
    /// No tile. Never rendered.
    #[default]
    Empty = 0,
    /// Bare earth.
    Ground = 1,
    /// Translucent black overlay.
    Shadow = 2,
    /// Water with a gradient and waves.
    Water = 3,
    /// Speckled sand.
    Sand = 4,
    /// Rough rock.
    Rock = 5,
    /// Shaded grass with occasional bright flecks.
    Grass = 6,
}

impl TileType {
    /// Every tile type, in discriminant order.
    pub const ALL: [Self; TILE_TYPE_COUNT] = [
        Self::Empty,
        Self::Ground,
        Self::Shadow,
        Self::Water,
        Self::Sand,
        Self::Rock,
        Self::Grass,
    ];

    /// Palette index of this type.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts from u8. Unknown values map to `Empty`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Ground,
            2 => Self::Shadow,
            3 => Self::Water,
            4 => Self::Sand,
            5 => Self::Rock,
            6 => Self::Grass,
            _ => Self::Empty,
        }
    }

    /// Base color the generator modulates.
    #[must_use]
    pub const fn base_color(self) -> Color {
        match self {
            Self::Ground => Color::rgb(139, 90, 60),
            Self::Shadow => Color::new(120, 0, 0, 0),
            Self::Water => Color::rgb(30, 120, 200),
            Self::Sand => Color::rgb(235, 210, 160),
            Self::Rock => Color::rgb(140, 140, 150),
            Self::Grass => Color::rgb(90, 155, 85),
            Self::Empty => Color::rgb(128, 128, 128),
        }
    }

    /// Returns whether this type produces pixels.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Generates the diamond sprite for `tile_type`, tinted from `base`.
///
/// Returns the absent sprite if the pixel buffer cannot be allocated.
#[must_use]
pub fn generate_tile(base: Color, tile_type: TileType) -> Sprite {
    let w = TILE_WIDTH;
    let h = TILE_HEIGHT;
    let mut sprite = Sprite::transparent(w, h);
    if sprite.is_absent() {
        return sprite;
    }

    let half_w = w as f32 * 0.5;
    let half_h = h as f32 * 0.5;
    let pixels = sprite.pixels_mut();

    for y in 0..h as i32 {
        let t = (y as f32 - half_h).abs() / half_h;
        let extent = (1.0 - t) * half_w;
        // Inclusive on both rounded ends, so neighbouring tiles overlap by
        // one column and no seam shows between them.
        let x_min = (half_w - extent).floor() as i32;
        let x_max = (half_w + extent).ceil() as i32;

        for x in 0..w as i32 {
            let idx = y as usize * w as usize + x as usize;
            if x < x_min || x > x_max {
                pixels[idx] = TRANSPARENT;
                continue;
            }

            let [r, g, b] = modulate(base, tile_type, x, y);

            // Bevel: darken towards the outline
            let edge = ((x as f32 - half_w).abs() / extent.max(1.0)).min(t);
            let shade = 1.0 - 0.15 * (edge * 1.5).min(1.0);

            pixels[idx] = pack_argb_f32(
                f32::from(base.a),
                r * shade,
                g * shade,
                b * shade,
            );
        }
    }

    sprite
}

/// Type-specific color for one pixel inside the diamond, before edge shading.
fn modulate(base: Color, tile_type: TileType, x: i32, y: i32) -> [f32; 3] {
    let (mut r, mut g, mut b) = (f32::from(base.r), f32::from(base.g), f32::from(base.b));

    match tile_type {
        TileType::Grass => {
            let shade = 0.92 + rand01(x * 3, y * 5) * 0.16;
            r *= shade;
            g *= shade + 0.05;
            b *= shade - 0.02;
            if hash_u32(x, y) % 97 == 0 {
                g = (g + 25.0).min(255.0);
            }
        }
        TileType::Water => {
            let gy = y as f32 / TILE_HEIGHT as f32;
            let wave = 1.0 + 0.04 * ((x as f32 + y as f32 * 0.5) * 0.2).sin();
            r = (20.0 + 10.0 * gy) * wave;
            g = (100.0 + 40.0 * gy) * wave;
            b = (180.0 + 50.0 * gy) * wave;
        }
        TileType::Sand => {
            let speck = rand01(x * 7, y * 11) * 0.25 - 0.125;
            r *= 1.0 + speck;
            g *= 1.0 + speck * 0.5;
            b *= 1.0 - speck * 0.3;
        }
        TileType::Rock => {
            let rough = rand01(x * 5, y * 5) * 0.3 - 0.15;
            r *= 1.0 + rough;
            g *= 1.0 + rough;
            b *= 1.0 + rough;
        }
        TileType::Shadow => {
            r = 0.0;
            g = 0.0;
            b = 0.0;
        }
        TileType::Ground | TileType::Empty => {
            let n = rand01(x, y) * 0.15 - 0.075;
            r *= 1.0 + n;
            g *= 1.0 + n;
            b *= 1.0 + n;
        }
    }

    [r, g, b]
}
