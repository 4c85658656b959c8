//! # Drop Shadows
//!
//! Soft elliptical shadows drawn under every object before its sprite.
//!
//! ```text
//!   rx = sprite.width / 4          ry = rx * flatten
//!   center = (x + w/2 + offset.x * rx,  y + h - ry + offset.y * ry)
//!   alpha  = max_alpha * (1 - d²)^exponent,   d² = (dx/rx)² + (dy/ry)²
//! ```
//!
//! The ellipse hugs the sprite's bottom edge and leans down-right.

use isoworld_shared::Vec2;

use crate::framebuffer::{FrameBuffer, PixelRect};

/// Default peak shadow opacity.
pub const DEFAULT_SHADOW_ALPHA: u8 = 120;

/// Shadow shape and strength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowConfig {
    /// Draw shadows at all.
    pub enabled: bool,
    /// Opacity at the ellipse center.
    pub max_alpha: u8,
    /// Center offset in units of the ellipse radii. Positive is down-right.
    pub offset: Vec2,
    /// Vertical radius as a fraction of the horizontal one.
    pub flatten: f32,
    /// Falloff exponent applied to `1 - d²`.
    pub exponent: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_alpha: DEFAULT_SHADOW_ALPHA,
            offset: Vec2::new(0.35, 0.35),
            flatten: 0.5,
            exponent: 1.5,
        }
    }
}

/// Resolved ellipse in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Ellipse {
    center: Vec2,
    rx: f32,
    ry: f32,
}

impl ShadowConfig {
    fn ellipse(&self, x: i32, y: i32, width: u32, height: u32) -> Option<Ellipse> {
        if !self.enabled || self.max_alpha == 0 {
            return None;
        }
        let rx = width as f32 * 0.25;
        let ry = rx * self.flatten;
        if rx < 1.0 || ry <= 0.0 {
            return None;
        }
        let center = Vec2::new(
            x as f32 + width as f32 * 0.5 + self.offset.x * rx,
            y as f32 + height as f32 - ry + self.offset.y * ry,
        );
        Some(Ellipse { center, rx, ry })
    }

    /// Screen rectangle a shadow for a `width x height` sprite at `(x, y)`
    /// may touch. Empty when no shadow would be drawn.
    #[must_use]
    pub fn shadow_bounds(&self, x: i32, y: i32, width: u32, height: u32) -> PixelRect {
        self.ellipse(x, y, width, height)
            .map_or_else(PixelRect::default, |e| PixelRect {
                x0: (e.center.x - e.rx).floor() as i32,
                y0: (e.center.y - e.ry).floor() as i32,
                x1: (e.center.x + e.rx).ceil() as i32 + 1,
                y1: (e.center.y + e.ry).ceil() as i32 + 1,
            })
    }

    /// Opacity at a normalized squared distance `d2` from the center.
    #[inline]
    #[must_use]
    pub fn falloff(&self, d2: f32) -> u8 {
        if d2 >= 1.0 {
            return 0;
        }
        let a = f32::from(self.max_alpha) * (1.0 - d2.max(0.0)).powf(self.exponent);
        a.round().clamp(0.0, 255.0) as u8
    }

    /// Blends the shadow for a sprite at `(x, y)` into `target`. Returns
    /// the number of pixels touched.
    pub fn draw(&self, target: &mut FrameBuffer, x: i32, y: i32, width: u32, height: u32) -> usize {
        let Some(e) = self.ellipse(x, y, width, height) else {
            return 0;
        };
        let area = self
            .shadow_bounds(x, y, width, height)
            .intersect(&target.bounds());
        if area.is_empty() {
            return 0;
        }

        let (inv_rx, inv_ry) = (1.0 / e.rx, 1.0 / e.ry);
        let mut touched = 0;
        for py in area.y0..area.y1 {
            let dy = (py as f32 + 0.5 - e.center.y) * inv_ry;
            let dy2 = dy * dy;
            if dy2 >= 1.0 {
                continue;
            }
            for px in area.x0..area.x1 {
                let dx = (px as f32 + 0.5 - e.center.x) * inv_rx;
                let a = self.falloff(dx * dx + dy2);
                if a == 0 {
                    continue;
                }
                if target.blend_pixel(px, py, u32::from(a) << 24) {
                    touched += 1;
                }
            }
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isoworld_shared::color::alpha;

    fn white(w: u32, h: u32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(w, h).unwrap();
        fb.clear(0xFFFF_FFFF);
        fb
    }

    #[test]
    fn test_falloff_profile() {
        let shadow = ShadowConfig::default();
        assert_eq!(shadow.falloff(0.0), DEFAULT_SHADOW_ALPHA);
        assert_eq!(shadow.falloff(1.0), 0);
        assert_eq!(shadow.falloff(4.0), 0);
        assert!(shadow.falloff(0.25) > shadow.falloff(0.5));
        assert!(shadow.falloff(0.5) > shadow.falloff(0.9));
    }

    #[test]
    fn test_shadow_stays_in_bounds() {
        let shadow = ShadowConfig::default();
        let mut fb = white(64, 64);
        let touched = shadow.draw(&mut fb, 10, 10, 32, 32);
        assert!(touched > 0);

        let bounds = shadow.shadow_bounds(10, 10, 32, 32);
        for y in 0..64 {
            for x in 0..64 {
                let p = fb.pixel(x, y).unwrap();
                if p != 0xFFFF_FFFF {
                    assert!(bounds.contains(x, y), "shadow leaked to ({x},{y})");
                    // Black over white: every channel equal, darker than white
                    assert_eq!(alpha(p), 255);
                    assert_eq!((p >> 16) & 0xFF, p & 0xFF);
                }
            }
        }
    }

    #[test]
    fn test_shadow_is_darkest_near_center() {
        let shadow = ShadowConfig::default();
        let mut fb = white(64, 64);
        shadow.draw(&mut fb, 0, 0, 40, 40);
        // rx = 10, ry = 5, center = (20 + 3.5, 40 - 5 + 1.75)
        let center = fb.pixel(23, 36).unwrap() & 0xFF;
        let rim = fb.pixel(31, 36).unwrap() & 0xFF;
        assert!(center < rim, "center {center} should be darker than rim {rim}");
    }

    #[test]
    fn test_disabled_or_tiny_sprites_cast_nothing() {
        let mut fb = white(16, 16);
        let off = ShadowConfig {
            enabled: false,
            ..ShadowConfig::default()
        };
        assert_eq!(off.draw(&mut fb, 0, 0, 16, 16), 0);
        assert!(off.shadow_bounds(0, 0, 16, 16).is_empty());

        let on = ShadowConfig::default();
        assert_eq!(on.draw(&mut fb, 0, 0, 3, 3), 0);
        assert!(fb.pixels().iter().all(|&p| p == 0xFFFF_FFFF));
    }

    #[test]
    fn test_shadow_clipped_offscreen() {
        let shadow = ShadowConfig::default();
        let mut fb = white(8, 8);
        assert_eq!(shadow.draw(&mut fb, 100, 100, 32, 32), 0);
        assert_eq!(shadow.draw(&mut fb, -100, -100, 32, 32), 0);
    }
}
