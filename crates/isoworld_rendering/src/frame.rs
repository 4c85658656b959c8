//! # Frame Assembly
//!
//! ```text
//! clear(background) → blit visible map window → depth sort → for each object:
//!                                                   cull? → shadow → sprite
//! ```
//!
//! The output buffer, the depth keys and the index order are allocated once
//! and reused every frame. The stable depth sort may still take scratch
//! space for larger object counts.

use isoworld_shared::Vec2;

use crate::assets::SpriteStore;
use crate::camera::Camera;
use crate::depth::DepthSorter;
use crate::error::RenderResult;
use crate::framebuffer::FrameBuffer;
use crate::map::Map;
use crate::object::{draw_object, DrawOutcome, GameObject};
use crate::shadow::ShadowConfig;
use crate::stats::RenderStats;

/// Default clear color, opaque black.
pub const DEFAULT_BACKGROUND: u32 = 0xFF00_0000;

/// Owns the output buffer and renders whole frames into it.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    buffer: FrameBuffer,
    background: u32,
    shadow: ShadowConfig,
    sorter: DepthSorter,
    stats: RenderStats,
}

impl FrameRenderer {
    /// Allocates a `width x height` output buffer.
    ///
    /// # Errors
    ///
    /// Propagates [`FrameBuffer::new`] failures.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        Ok(Self {
            buffer: FrameBuffer::new(width, height)?,
            background: DEFAULT_BACKGROUND,
            shadow: ShadowConfig::default(),
            sorter: DepthSorter::new(),
            stats: RenderStats::default(),
        })
    }

    /// Sets the clear color.
    #[must_use]
    pub fn with_background(mut self, argb: u32) -> Self {
        self.background = argb;
        self
    }

    /// Sets the shadow model.
    #[must_use]
    pub fn with_shadow(mut self, shadow: ShadowConfig) -> Self {
        self.shadow = shadow;
        self
    }

    /// Current shadow model.
    #[must_use]
    pub const fn shadow(&self) -> &ShadowConfig {
        &self.shadow
    }

    /// Counters from the last frame.
    #[must_use]
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// The last rendered frame.
    #[must_use]
    pub const fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Renders one frame and returns it.
    ///
    /// A missing map or an empty object list simply draws less. Objects
    /// whose handle is unknown to `sprites` are skipped.
    pub fn render_frame(
        &mut self,
        map: Option<&Map>,
        objects: &[GameObject],
        sprites: &SpriteStore,
        camera: &Camera,
    ) -> &FrameBuffer {
        let mut stats = RenderStats {
            objects: objects.len() as u32,
            ..RenderStats::default()
        };

        self.buffer.clear(self.background);

        // Every screen position is derived from this one integer origin so
        // the map and the objects never drift apart by a pixel.
        let (ox, oy) = camera.screen_to_world(Vec2::ZERO).floor_i32();

        if let Some(map) = map {
            self.buffer.blit_window(map.image(), ox, oy);
            stats.map_drawn = true;
        }

        for &i in self.sorter.sort(objects, sprites) {
            let object = &objects[i];
            let Some(sprite) = sprites.get(object.sprite) else {
                stats.objects_skipped += 1;
                continue;
            };
            // Far-away objects saturate to an off-screen spot and get culled.
            let (wx, wy) = object.position.floor_i32();
            let outcome = draw_object(
                &mut self.buffer,
                sprite,
                wx.saturating_sub(ox),
                wy.saturating_sub(oy),
                object.flip_horizontal,
                &self.shadow,
            );
            match outcome {
                DrawOutcome::Drawn => stats.objects_drawn += 1,
                DrawOutcome::Culled => stats.objects_culled += 1,
                DrawOutcome::Skipped => stats.objects_skipped += 1,
            }
        }

        tracing::trace!(
            drawn = stats.objects_drawn,
            culled = stats.objects_culled,
            skipped = stats.objects_skipped,
            "frame rendered"
        );
        self.stats = stats;
        &self.buffer
    }
}
