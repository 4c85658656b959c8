//! Owned ARGB32 bitmaps.

use crate::color::TRANSPARENT;
use crate::math::UVec2;

/// A packed ARGB32 bitmap.
///
/// A sprite is either *absent* (zero-sized, no pixels) or holds exactly
/// `width * height` pixels in row-major order. Absent sprites are the value
/// every failed load or allocation produces; renderers skip them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Sprite {
    /// The absent sprite.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Allocates a transparent sprite, or returns the absent sprite when the
    /// allocation cannot be satisfied.
    #[must_use]
    pub fn transparent(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        if len == 0 {
            return Self::empty();
        }
        let mut pixels = Vec::new();
        if pixels.try_reserve_exact(len).is_err() {
            return Self::empty();
        }
        pixels.resize(len, TRANSPARENT);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wraps an existing pixel buffer.
    ///
    /// Returns the absent sprite if the buffer length does not match.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize {
            return Self::empty();
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Fills a sprite with one color.
    #[must_use]
    pub fn solid(width: u32, height: u32, argb: u32) -> Self {
        let mut sprite = Self::transparent(width, height);
        sprite.pixels.fill(argb);
        sprite
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// True when there is nothing to draw.
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major pixel data.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable row-major pixel data.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the sprite.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_invariants() {
        let s = Sprite::empty();
        assert!(s.is_absent());
        assert_eq!(s.size(), UVec2::new(0, 0));
        assert_eq!(s.pixel(0, 0), None);
    }

    #[test]
    fn test_mismatched_buffer_is_absent() {
        let s = Sprite::from_pixels(4, 4, vec![0; 15]);
        assert!(s.is_absent());
        assert_eq!(s.width(), 0);
    }

    #[test]
    fn test_solid_pixels() {
        let s = Sprite::solid(3, 2, 0xFF12_3456);
        assert_eq!(s.pixels().len(), 6);
        assert_eq!(s.pixel(2, 1), Some(0xFF12_3456));
        assert_eq!(s.pixel(3, 1), None);
    }
}
