//! Rendering statistics.

/// Counters from one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Objects submitted.
    pub objects: u32,
    /// Objects drawn (sprite and shadow).
    pub objects_drawn: u32,
    /// Objects whose sprite rectangle missed the viewport.
    pub objects_culled: u32,
    /// Objects without a usable sprite.
    pub objects_skipped: u32,
    /// Whether a map was blitted.
    pub map_drawn: bool,
}

impl RenderStats {
    /// Share of submitted objects that were culled, in `[0, 1]`.
    #[must_use]
    pub fn cull_ratio(&self) -> f32 {
        if self.objects > 0 {
            self.objects_culled as f32 / self.objects as f32
        } else {
            0.0
        }
    }
}
