//! Packed ARGB32 colors.
//!
//! Every pixel buffer in ISOWORLD stores `u32` values laid out as
//! `0xAARRGGBB` with straight (non-premultiplied) alpha.

use serde::{Deserialize, Serialize};

/// Fully transparent pixel.
pub const TRANSPARENT: u32 = 0x0000_0000;

/// An unpacked straight-alpha color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Alpha channel (0 = transparent, 255 = opaque).
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Creates a color from all four channels.
    #[must_use]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Packs into `0xAARRGGBB`.
    #[inline]
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        pack_argb(self.a, self.r, self.g, self.b)
    }

    /// Unpacks from `0xAARRGGBB`.
    #[inline]
    #[must_use]
    pub const fn from_argb(pixel: u32) -> Self {
        Self {
            a: (pixel >> 24) as u8,
            r: (pixel >> 16) as u8,
            g: (pixel >> 8) as u8,
            b: pixel as u8,
        }
    }

    /// Converts a straight-alpha RGBA byte quad (as decoders emit it).
    #[inline]
    #[must_use]
    pub const fn from_rgba_bytes(rgba: [u8; 4]) -> Self {
        Self::new(rgba[3], rgba[0], rgba[1], rgba[2])
    }
}

/// Packs four channels into `0xAARRGGBB`.
#[inline]
#[must_use]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Packs float channels, clamping each to `[0, 255]` first.
#[inline]
#[must_use]
pub fn pack_argb_f32(a: f32, r: f32, g: f32, b: f32) -> u32 {
    pack_argb(clamp_channel(a), clamp_channel(r), clamp_channel(g), clamp_channel(b))
}

/// Alpha channel of a packed pixel.
#[inline]
#[must_use]
pub const fn alpha(pixel: u32) -> u8 {
    (pixel >> 24) as u8
}

#[inline]
fn clamp_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        assert_eq!(pack_argb(0x11, 0x22, 0x33, 0x44), 0x1122_3344);
        assert_eq!(Color::from_argb(0x1122_3344), Color::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(alpha(0x80FF_FFFF), 0x80);
    }

    #[test]
    fn test_pack_f32_clamps() {
        assert_eq!(pack_argb_f32(300.0, -5.0, 127.9, 255.0), 0xFF00_7FFF);
    }

    #[test]
    fn test_rgba_bytes_reorder() {
        let c = Color::from_rgba_bytes([10, 20, 30, 40]);
        assert_eq!(c.to_argb(), 0x280A_141E);
    }
}
