//! # ISOWORLD Rendering Engine
//!
//! Software compositor for an isometric tile world:
//! - One owned ARGB32 frame buffer, reused every frame
//! - The static map pre-rendered once into an offscreen image
//! - Objects sorted back to front and drawn with soft drop shadows
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       FRAME PIPELINE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  TilePalette → Map (pre-rendered, immutable)                  │
//! │                    ↓                                          │
//! │  Camera → visible map window → FrameBuffer                    │
//! │                                    ↑                          │
//! │  GameObjects → DepthSorter → shadow + sprite (clipped, blended)│
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - `render_frame` reuses its buffers; only the stable depth sort may take
//!   scratch space
//! - Absent sprites draw nothing, they never fail
//! - Drawing clips, transforms extrapolate

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod assets;
pub mod blend;
pub mod camera;
pub mod depth;
pub mod error;
pub mod frame;
pub mod framebuffer;
pub mod map;
pub mod object;
pub mod shadow;
pub mod stats;

pub use assets::{load_sprite, ImageSource, MemoryImageSource, RawImage, SpriteHandle, SpriteStore};
pub use blend::blend;
pub use camera::{Camera, DEFAULT_FOLLOW_SPEED};
pub use depth::{sort_by_depth, DepthSorter};
pub use error::{RenderError, RenderResult};
pub use frame::{FrameRenderer, DEFAULT_BACKGROUND};
pub use framebuffer::{FrameBuffer, PixelRect};
pub use map::Map;
pub use object::{draw_object, DrawOutcome, GameObject};
pub use shadow::{ShadowConfig, DEFAULT_SHADOW_ALPHA};
pub use stats::RenderStats;
