//! # ISOWORLD
//!
//! Isometric world engine: configuration, the fixed-timestep loop, and the
//! glue between game logic and the software renderer.
//!
//! ## Crates
//!
//! - `isoworld_shared`: vectors, colors, sprites, isometric projection
//! - `isoworld_procedural`: tile art and seeded placement
//! - `isoworld_rendering`: map compositing, camera, objects, frames
//! - `isoworld` (this crate): engine loop, config, input, display, scenery
//!
//! ## Example
//!
//! ```rust
//! use isoworld::{Engine, EngineConfig, GameLogic, HeadlessDisplay, InputState, ScriptedInput};
//! use isoworld_rendering::GameObject;
//!
//! struct Idle;
//!
//! impl GameLogic for Idle {
//!     fn update(&mut self, _input: &InputState, _dt: f32) {}
//!     fn objects(&self) -> &[GameObject] {
//!         &[]
//!     }
//! }
//!
//! let mut config = EngineConfig::default();
//! config.map.cols = 4;
//! config.map.rows = 4;
//!
//! let input = ScriptedInput::hold(InputState::default(), 3);
//! let mut engine = Engine::new(config, HeadlessDisplay::simulated(16), input).unwrap();
//! engine.load_map().unwrap();
//! assert_eq!(engine.run(&mut Idle, None), 3);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod scene;
pub mod timing;

pub use config::EngineConfig;
pub use display::{Display, HeadlessDisplay};
pub use engine::{Engine, GameLogic};
pub use error::{ConfigError, ConfigResult, EngineError, EngineResult};
pub use input::{InputSource, InputState, ScriptedInput};
pub use scene::scatter_static_objects;
pub use timing::{FixedTimestep, FrameStats, FrameStatsAccumulator};
