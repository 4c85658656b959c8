//! # Camera
//!
//! A viewport onto world space. `position` is the world point shown at the
//! center of the screen.
//!
//! ```text
//! screen = world - position + size / 2
//! ```
//!
//! While following, the camera closes a fixed fraction of the distance to
//! its target each update, so it converges exponentially and never
//! overshoots.

use isoworld_shared::Vec2;

use crate::framebuffer::PixelRect;

/// Default convergence rate, in "fractions of the remaining distance" per
/// second.
pub const DEFAULT_FOLLOW_SPEED: f32 = 15.0;

/// Viewport with smooth target following.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    size: Vec2,
    position: Vec2,
    target: Vec2,
    follow_speed: f32,
    following: bool,
}

impl Camera {
    /// Creates a camera looking at the world origin, following enabled.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Vec2::new(width as f32, height as f32),
            position: Vec2::ZERO,
            target: Vec2::ZERO,
            follow_speed: DEFAULT_FOLLOW_SPEED,
            following: true,
        }
    }

    /// Viewport size in pixels.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// World point at the screen center.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current follow target.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> Vec2 {
        self.target
    }

    /// Current follow speed.
    #[inline]
    #[must_use]
    pub const fn follow_speed(&self) -> f32 {
        self.follow_speed
    }

    /// Whether [`Camera::update`] moves the camera.
    #[inline]
    #[must_use]
    pub const fn is_following(&self) -> bool {
        self.following
    }

    /// Jumps to `position` immediately.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Sets the point to converge on.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Enables or disables following.
    pub fn set_following(&mut self, following: bool) {
        self.following = following;
    }

    /// Sets the convergence rate. Negative values are treated as zero.
    pub fn set_follow_speed(&mut self, speed: f32) {
        self.follow_speed = speed.max(0.0);
    }

    /// Advances following by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.following {
            return;
        }
        let t = (self.follow_speed * dt).clamp(0.0, 1.0);
        self.position = self.position.lerp(self.target, t);
    }

    /// World position of the screen's top-left pixel.
    #[inline]
    #[must_use]
    pub fn top_left(&self) -> Vec2 {
        self.position - self.size * 0.5
    }

    /// Maps a world point to screen space.
    #[inline]
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.top_left()
    }

    /// Maps a screen point to world space.
    #[inline]
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.top_left()
    }

    /// True if a screen-space point lies in `[0, w) x [0, h)`.
    #[must_use]
    pub fn is_visible(&self, screen: Vec2) -> bool {
        screen.x >= 0.0 && screen.x < self.size.x && screen.y >= 0.0 && screen.y < self.size.y
    }

    /// True if a screen-space rectangle overlaps the viewport at all.
    #[must_use]
    pub fn is_rect_visible(&self, rect: &PixelRect) -> bool {
        !rect.is_empty()
            && rect.x1 > 0
            && rect.y1 > 0
            && (rect.x0 as f32) < self.size.x
            && (rect.y0 as f32) < self.size.y
    }
}
