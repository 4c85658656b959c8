//! # Engine
//!
//! ```text
//! while engine.begin_frame(&mut game) {   // input, N fixed logic steps, camera
//!     engine.render(game.objects());       // one software frame
//!     engine.end_frame();                  // present, fps, stats
//! }
//! ```
//!
//! All loop state (clock, fps, running flag) lives on the [`Engine`] value.
//! Several engines can coexist, e.g. one per test.

use isoworld_procedural::TilePalette;
use isoworld_rendering::{Camera, FrameBuffer, FrameRenderer, GameObject, Map, SpriteStore};
use isoworld_shared::Vec2;

use crate::config::EngineConfig;
use crate::display::Display;
use crate::error::EngineResult;
use crate::input::{InputSource, InputState};
use crate::timing::{FixedTimestep, FrameStats, FrameStatsAccumulator};

/// User game code driven by the engine.
pub trait GameLogic {
    /// Advances the simulation by one fixed step of `dt` seconds.
    fn update(&mut self, input: &InputState, dt: f32);

    /// Objects to draw this frame, in any order.
    fn objects(&self) -> &[GameObject];

    /// World point the camera should follow, if any.
    fn camera_focus(&self) -> Option<Vec2> {
        None
    }
}

/// The engine context: display, input, renderer, camera and level.
pub struct Engine<D: Display, I: InputSource> {
    config: EngineConfig,
    display: D,
    input: I,
    renderer: FrameRenderer,
    camera: Camera,
    palette: TilePalette,
    sprites: SpriteStore,
    map: Option<Map>,
    timestep: FixedTimestep,
    input_state: InputState,
    running: bool,
    last_ticks: u64,
    frame_begin_ticks: u64,
    last_present_ticks: Option<u64>,
    delta_time: f32,
    fps: f32,
    frame_count: u64,
    current: FrameStats,
    stats: FrameStatsAccumulator,
}

impl<D: Display, I: InputSource> Engine<D, I> {
    /// Validates `config`, generates the tile palette and allocates the
    /// frame buffer.
    ///
    /// # Errors
    ///
    /// Invalid configuration or a failed frame buffer allocation.
    pub fn new(config: EngineConfig, display: D, input: I) -> EngineResult<Self> {
        config.validate()?;

        let (width, height) = (config.display.width, config.display.height);
        let renderer = FrameRenderer::new(width, height)?
            .with_background(config.display.background)
            .with_shadow(config.shadow.to_shadow_config());

        let mut camera = Camera::new(width, height);
        camera.set_follow_speed(config.camera.follow_speed);
        camera.set_following(config.camera.following);

        let timestep = FixedTimestep::new(config.timing.logic_step, config.timing.max_frame_delta);
        let stats = FrameStatsAccumulator::for_fps(config.display.target_fps);
        let last_ticks = display.ticks_ms();

        tracing::info!(width, height, "engine started");

        Ok(Self {
            config,
            display,
            input,
            renderer,
            camera,
            palette: TilePalette::generate(),
            sprites: SpriteStore::new(),
            map: None,
            timestep,
            input_state: InputState::default(),
            running: true,
            last_ticks,
            frame_begin_ticks: last_ticks,
            last_present_ticks: None,
            delta_time: 0.0,
            fps: 0.0,
            frame_count: 0,
            current: FrameStats::default(),
            stats,
        })
    }

    /// Builds a grass map of the configured size and makes it current.
    ///
    /// # Errors
    ///
    /// Map allocation failure; the previous map is kept.
    pub fn load_map(&mut self) -> EngineResult<&Map> {
        let map = Map::new(self.config.map.cols, self.config.map.rows, &self.palette)?;
        Ok(self.set_map(map))
    }

    /// Makes `map` current and centers the camera on it.
    pub fn set_map(&mut self, map: Map) -> &Map {
        let size = map.size().as_vec2();
        let center = Vec2::new(size.x * 0.5, size.y * 0.5);
        self.camera.set_position(center);
        self.camera.set_target(center);
        self.map.insert(map)
    }

    /// The current map.
    #[must_use]
    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    /// Tile sprites used to build maps.
    #[must_use]
    pub fn palette(&self) -> &TilePalette {
        &self.palette
    }

    /// Sprites objects refer to.
    #[must_use]
    pub fn sprites(&self) -> &SpriteStore {
        &self.sprites
    }

    /// Mutable sprite store, for loading assets.
    pub fn sprites_mut(&mut self) -> &mut SpriteStore {
        &mut self.sprites
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The presentation target.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Input sampled at the start of the current frame.
    #[must_use]
    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    /// False once quit was requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the loop after the current frame.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Frames per second, from the last presentation interval.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Seconds measured between the last two `begin_frame` calls.
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Frames completed.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Aggregated frame statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }

    /// Starts a frame: samples input, runs the due logic steps and moves
    /// the camera. Returns `false` once the engine should stop.
    pub fn begin_frame<L: GameLogic + ?Sized>(&mut self, logic: &mut L) -> bool {
        if !self.running {
            return false;
        }

        let now = self.display.ticks_ms();
        self.frame_begin_ticks = now;
        self.delta_time = now.saturating_sub(self.last_ticks) as f32 / 1000.0;
        self.last_ticks = now;

        self.input_state = self.input.poll();
        if self.input_state.quit {
            tracing::info!(frames = self.frame_count, "quit requested");
            self.running = false;
            return false;
        }

        let steps = self.timestep.advance(self.delta_time);
        let dt = self.timestep.step();
        for _ in 0..steps {
            logic.update(&self.input_state, dt);
            if let Some(focus) = logic.camera_focus() {
                self.camera.set_target(focus);
            }
            self.camera.update(dt);
        }

        self.current = FrameStats {
            frame: self.frame_count,
            logic_steps: steps,
            ..FrameStats::default()
        };
        true
    }

    /// Renders the current map and `objects` from the camera's view.
    pub fn render(&mut self, objects: &[GameObject]) -> &FrameBuffer {
        self.renderer
            .render_frame(self.map.as_ref(), objects, &self.sprites, &self.camera);
        self.current.objects_drawn = self.renderer.stats().objects_drawn;
        self.renderer.buffer()
    }

    /// Presents the frame and records timing.
    pub fn end_frame(&mut self) {
        self.display.present(self.renderer.buffer());

        let now = self.display.ticks_ms();
        if let Some(prev) = self.last_present_ticks {
            let interval = now.saturating_sub(prev);
            if interval > 0 {
                self.fps = 1000.0 / interval as f32;
            }
        }
        self.last_present_ticks = Some(now);

        self.current.total_us = now.saturating_sub(self.frame_begin_ticks) * 1000;
        self.stats.record(self.current);
        self.frame_count += 1;

        tracing::trace!(
            frame = self.current.frame,
            steps = self.current.logic_steps,
            drawn = self.current.objects_drawn,
            "frame presented"
        );
    }

    /// One full `begin_frame` / `render` / `end_frame` cycle.
    pub fn run_frame<L: GameLogic + ?Sized>(&mut self, logic: &mut L) -> bool {
        if !self.begin_frame(logic) {
            return false;
        }
        self.render(logic.objects());
        self.end_frame();
        true
    }

    /// Runs until quit, or until `max_frames` frames when given. Returns
    /// the number of frames run.
    pub fn run<L: GameLogic + ?Sized>(&mut self, logic: &mut L, max_frames: Option<u64>) -> u64 {
        let mut frames = 0;
        while max_frames.map_or(true, |max| frames < max) && self.run_frame(logic) {
            frames += 1;
        }
        frames
    }
}

impl<D: Display, I: InputSource> Drop for Engine<D, I> {
    fn drop(&mut self) {
        tracing::info!(frames = self.frame_count, "engine stopped");
    }
}
