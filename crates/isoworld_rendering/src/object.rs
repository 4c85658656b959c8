//! Drawable world objects.

use isoworld_shared::{Sprite, Vec2};

use crate::assets::SpriteHandle;
use crate::framebuffer::{FrameBuffer, PixelRect};
use crate::shadow::ShadowConfig;

/// Anything drawn on top of the map: players, NPCs, trees.
///
/// `position` is the top-left of the sprite in world space. `velocity` is
/// never read by the renderer; it belongs to game logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameObject {
    /// Sprite top-left in world space.
    pub position: Vec2,
    /// Current sprite.
    pub sprite: SpriteHandle,
    /// Mirror the sprite horizontally.
    pub flip_horizontal: bool,
    /// Movement per logic step, owned by game logic.
    pub velocity: Vec2,
}

impl GameObject {
    /// An unflipped, stationary object.
    #[must_use]
    pub const fn new(position: Vec2, sprite: SpriteHandle) -> Self {
        Self {
            position,
            sprite,
            flip_horizontal: false,
            velocity: Vec2::ZERO,
        }
    }
}

/// Outcome of drawing one object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Sprite and shadow were drawn.
    Drawn,
    /// The sprite rectangle missed the viewport.
    Culled,
    /// No sprite to draw.
    Skipped,
}

/// Draws the shadow, then the sprite, with the sprite's top-left at screen
/// pixel `(x, y)`.
pub fn draw_object(
    target: &mut FrameBuffer,
    sprite: &Sprite,
    x: i32,
    y: i32,
    flip: bool,
    shadow: &ShadowConfig,
) -> DrawOutcome {
    if sprite.is_absent() {
        return DrawOutcome::Skipped;
    }

    let rect = PixelRect::from_origin_size(x, y, sprite.width(), sprite.height());
    if rect.intersect(&target.bounds()).is_empty() {
        return DrawOutcome::Culled;
    }

    shadow.draw(target, x, y, sprite.width(), sprite.height());
    target.blit_sprite(sprite, x, y, flip);
    DrawOutcome::Drawn
}
