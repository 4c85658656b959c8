//! # Frame Buffer
//!
//! An owned, row-major ARGB32 pixel target. Used for the per-frame output
//! and for the pre-rendered map image.
//!
//! Every draw operation clips against the buffer; nothing here panics on
//! out-of-range coordinates.

use isoworld_shared::{Sprite, UVec2};

use crate::blend::{blend, blend_row};
use crate::error::{RenderError, RenderResult};

/// Axis-aligned pixel rectangle, `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge (inclusive).
    pub x0: i32,
    /// Top edge (inclusive).
    pub y0: i32,
    /// Right edge (exclusive).
    pub x1: i32,
    /// Bottom edge (exclusive).
    pub y1: i32,
}

impl PixelRect {
    /// Rectangle from a top-left corner and a size.
    #[must_use]
    pub const fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x.saturating_add(width as i32),
            y1: y.saturating_add(height as i32),
        }
    }

    /// True if the rectangle covers no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// True if `(x, y)` lies inside.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Overlapping part of two rectangles (possibly empty).
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

/// Owned ARGB32 render target.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Allocates a transparent buffer.
    ///
    /// # Errors
    ///
    /// [`RenderError::InvalidDimensions`] for a zero-sized request and
    /// [`RenderError::Allocation`] when the allocator refuses.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        if pixels.try_reserve_exact(len).is_err() {
            tracing::warn!(width, height, "pixel buffer allocation failed");
            return Err(RenderError::Allocation { width, height });
        }
        pixels.resize(len, 0);

        Ok(Self {
            width,
            height,
            pixels,
        })
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

    /// The whole buffer as a rectangle at the origin.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> PixelRect {
        PixelRect::from_origin_size(0, 0, self.width, self.height)
    }

    /// Row-major pixels.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable row-major pixels.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Pixels as raw bytes, for handing to a display surface.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`, `None` outside the buffer.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.bounds()
            .contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Fills every pixel with `argb`.
    pub fn clear(&mut self, argb: u32) {
        self.pixels.fill(argb);
    }

    /// Blends one pixel. Returns `false` if `(x, y)` was clipped.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, src: u32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = blend(src, self.pixels[i]);
                true
            }
            None => false,
        }
    }

    /// Blends `sprite` with its top-left at `(x, y)`, mirrored horizontally
    /// when `flip` is set. Returns the number of pixels inside the buffer.
    pub fn blit_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, flip: bool) -> usize {
        if sprite.is_absent() {
            return 0;
        }

        let dest = PixelRect::from_origin_size(x, y, sprite.width(), sprite.height());
        let clip = dest.intersect(&self.bounds());
        if clip.is_empty() {
            return 0;
        }

        let sw = sprite.width() as usize;
        let src = sprite.pixels();
        let fb_w = self.width as usize;

        for py in clip.y0..clip.y1 {
            let sy = (py - y) as usize;
            let src_row = &src[sy * sw..(sy + 1) * sw];
            let dst_start = py as usize * fb_w;
            let dst_row = &mut self.pixels[dst_start..dst_start + fb_w];

            if flip {
                for px in clip.x0..clip.x1 {
                    let sx = sw - 1 - (px - x) as usize;
                    let d = &mut dst_row[px as usize];
                    *d = blend(src_row[sx], *d);
                }
            } else {
                let sx0 = (clip.x0 - x) as usize;
                let sx1 = (clip.x1 - x) as usize;
                blend_row(
                    &src_row[sx0..sx1],
                    &mut dst_row[clip.x0 as usize..clip.x1 as usize],
                );
            }
        }

        ((clip.x1 - clip.x0) * (clip.y1 - clip.y0)) as usize
    }

    /// Blends the window of `source` starting at `(src_x, src_y)` over this
    /// whole buffer. Source coordinates outside `source` are skipped.
    pub fn blit_window(&mut self, source: &Self, src_x: i32, src_y: i32) {
        // Window of `source` that lands on this buffer, in source space
        let window = PixelRect::from_origin_size(src_x, src_y, self.width, self.height)
            .intersect(&source.bounds());
        if window.is_empty() {
            return;
        }

        let src_w = source.width as usize;
        let dst_w = self.width as usize;
        let cols = (window.x1 - window.x0) as usize;

        for sy in window.y0..window.y1 {
            let s_start = sy as usize * src_w + window.x0 as usize;
            let dy = (sy - src_y) as usize;
            let d_start = dy * dst_w + (window.x0 - src_x) as usize;
            blend_row(
                &source.pixels[s_start..s_start + cols],
                &mut self.pixels[d_start..d_start + cols],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(
            FrameBuffer::new(0, 10).unwrap_err(),
            RenderError::InvalidDimensions {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn test_new_is_transparent() {
        let fb = FrameBuffer::new(8, 4).unwrap();
        assert_eq!(fb.pixels().len(), 32);
        assert!(fb.pixels().iter().all(|&p| p == 0));
        assert_eq!(fb.as_bytes().len(), 128);
    }

    #[test]
    fn test_blend_pixel_clips() {
        let mut fb = FrameBuffer::new(4, 4).unwrap();
        assert!(fb.blend_pixel(3, 3, 0xFF11_1111));
        assert!(!fb.blend_pixel(4, 0, 0xFF11_1111));
        assert!(!fb.blend_pixel(-1, 0, 0xFF11_1111));
        assert_eq!(fb.pixel(3, 3), Some(0xFF11_1111));
        assert_eq!(fb.pixel(4, 3), None);
    }

    #[test]
    fn test_blit_sprite_clipped_at_corner() {
        let mut fb = FrameBuffer::new(10, 10).unwrap();
        fb.clear(0xFF00_0000);
        let sprite = Sprite::solid(4, 4, 0xFFFF_FFFF);

        let drawn = fb.blit_sprite(&sprite, -2, 8, false);
        assert_eq!(drawn, 4);
        assert_eq!(fb.pixel(0, 8), Some(0xFFFF_FFFF));
        assert_eq!(fb.pixel(1, 9), Some(0xFFFF_FFFF));
        assert_eq!(fb.pixel(2, 9), Some(0xFF00_0000));
        assert_eq!(fb.pixel(0, 7), Some(0xFF00_0000));
    }

    #[test]
    fn test_blit_sprite_offscreen_draws_nothing() {
        let mut fb = FrameBuffer::new(10, 10).unwrap();
        let sprite = Sprite::solid(4, 4, 0xFFFF_FFFF);
        assert_eq!(fb.blit_sprite(&sprite, 10, 0, false), 0);
        assert_eq!(fb.blit_sprite(&sprite, -4, -4, false), 0);
        assert_eq!(fb.blit_sprite(&Sprite::empty(), 0, 0, false), 0);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_blit_sprite_flipped() {
        let mut fb = FrameBuffer::new(3, 1).unwrap();
        let sprite = Sprite::from_pixels(3, 1, vec![0xFF00_0001, 0xFF00_0002, 0xFF00_0003]);

        fb.blit_sprite(&sprite, 0, 0, true);
        assert_eq!(fb.pixels(), &[0xFF00_0003, 0xFF00_0002, 0xFF00_0001]);

        // Flipped and clipped on the left: the visible column is the mirror
        // of the sprite's first column.
        let mut fb = FrameBuffer::new(3, 1).unwrap();
        fb.blit_sprite(&sprite, -2, 0, true);
        assert_eq!(fb.pixel(0, 0), Some(0xFF00_0001));
    }

    #[test]
    fn test_blit_window_offsets_and_skips_outside() {
        let mut source = FrameBuffer::new(4, 4).unwrap();
        for (i, p) in source.pixels_mut().iter_mut().enumerate() {
            *p = 0xFF00_0000 | i as u32;
        }

        let mut fb = FrameBuffer::new(3, 3).unwrap();
        fb.clear(0xFFFF_FFFF);
        fb.blit_window(&source, 2, -1);

        // Row above the source stays background
        assert_eq!(fb.pixel(0, 0), Some(0xFFFF_FFFF));
        // fb (0,1) shows source (2,0)
        assert_eq!(fb.pixel(0, 1), Some(0xFF00_0002));
        assert_eq!(fb.pixel(1, 2), Some(0xFF00_0000 | 7));
        // Column right of the source stays background
        assert_eq!(fb.pixel(2, 1), Some(0xFFFF_FFFF));
    }

    #[test]
    fn test_rect_intersection() {
        let a = PixelRect::from_origin_size(0, 0, 10, 10);
        let b = PixelRect::from_origin_size(5, -5, 10, 10);
        let c = a.intersect(&b);
        assert_eq!(c, PixelRect { x0: 5, y0: 0, x1: 10, y1: 5 });
        assert!(PixelRect::from_origin_size(20, 0, 5, 5).intersect(&a).is_empty());
    }
}
