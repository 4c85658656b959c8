//! # Engine Configuration
//!
//! All tunables live in one TOML file, loaded once at startup. Every field
//! has a default, so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! [display]
//! width = 800
//! height = 600
//!
//! [map]
//! cols = 25
//! rows = 25
//! seed = 42
//! ```

use std::path::Path;

use isoworld_rendering::{ShadowConfig, DEFAULT_BACKGROUND, DEFAULT_FOLLOW_SPEED, DEFAULT_SHADOW_ALPHA};
use isoworld_shared::constants::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, MAX_FRAME_DELTA, TICK_RATE};
use isoworld_shared::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Window / output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Clear color, packed ARGB.
    pub background: u32,
    /// Presentation rate the display is paced to.
    pub target_fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
            background: DEFAULT_BACKGROUND,
            target_fps: 60,
        }
    }
}

/// Level layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Tiles along x.
    pub cols: u32,
    /// Tiles along y.
    pub rows: u32,
    /// Seed for object placement.
    pub seed: u64,
    /// Static objects (trees, bushes) to scatter.
    pub static_objects: usize,
    /// Distance in pixels kept between scattered objects and the map edge.
    pub margin: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            cols: 25,
            rows: 25,
            seed: 42,
            static_objects: 200,
            margin: 80.0,
        }
    }
}

/// Camera behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Convergence rate towards the focus point, per second.
    pub follow_speed: f32,
    /// Follow the game logic's focus point.
    pub following: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_speed: DEFAULT_FOLLOW_SPEED,
            following: true,
        }
    }
}

/// Drop shadow look. See [`ShadowConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSection {
    /// Draw shadows.
    pub enabled: bool,
    /// Peak opacity.
    pub max_alpha: u8,
    /// Horizontal center offset in radii.
    pub offset_x: f32,
    /// Vertical center offset in radii.
    pub offset_y: f32,
    /// Vertical radius relative to the horizontal one.
    pub flatten: f32,
    /// Falloff exponent.
    pub exponent: f32,
}

impl Default for ShadowSection {
    fn default() -> Self {
        let shadow = ShadowConfig::default();
        Self {
            enabled: shadow.enabled,
            max_alpha: DEFAULT_SHADOW_ALPHA,
            offset_x: shadow.offset.x,
            offset_y: shadow.offset.y,
            flatten: shadow.flatten,
            exponent: shadow.exponent,
        }
    }
}

impl ShadowSection {
    /// Converts to the renderer's shadow model.
    #[must_use]
    pub fn to_shadow_config(&self) -> ShadowConfig {
        ShadowConfig {
            enabled: self.enabled,
            max_alpha: self.max_alpha,
            offset: Vec2::new(self.offset_x, self.offset_y),
            flatten: self.flatten,
            exponent: self.exponent,
        }
    }
}

/// Loop timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed logic step in seconds.
    pub logic_step: f32,
    /// Cap on the measured frame delta, in seconds.
    pub max_frame_delta: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            logic_step: 1.0 / TICK_RATE as f32,
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Output settings.
    pub display: DisplayConfig,
    /// Level layout.
    pub map: MapConfig,
    /// Camera behavior.
    pub camera: CameraConfig,
    /// Drop shadows.
    pub shadow: ShadowSection,
    /// Loop timing.
    pub timing: TimingConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML, [`ConfigError::Invalid`]
    /// for values that fail [`EngineConfig::validate`].
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`EngineConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.display.width == 0 || self.display.height == 0 {
            return invalid("display.width and display.height must be non-zero");
        }
        if self.map.cols == 0 || self.map.rows == 0 {
            return invalid("map.cols and map.rows must be non-zero");
        }
        if !(self.map.margin.is_finite() && self.map.margin >= 0.0) {
            return invalid("map.margin must be a non-negative number");
        }
        if !(self.timing.logic_step.is_finite() && self.timing.logic_step > 0.0) {
            return invalid("timing.logic_step must be positive");
        }
        if !(self.timing.max_frame_delta.is_finite() && self.timing.max_frame_delta > 0.0) {
            return invalid("timing.max_frame_delta must be positive");
        }
        if !(self.camera.follow_speed.is_finite() && self.camera.follow_speed >= 0.0) {
            return invalid("camera.follow_speed must be a non-negative number");
        }
        if !(self.shadow.flatten > 0.0 && self.shadow.exponent > 0.0) {
            return invalid("shadow.flatten and shadow.exponent must be positive");
        }
        Ok(())
    }
}
