//! # ISOWORLD Shared
//!
//! Common types used by every ISOWORLD crate.
//!
//! ## CRITICAL RULE
//!
//! This crate holds data and pure functions only:
//! - `Vec2` / `UVec2` for world, screen and pixel positions
//! - `Color` and packed ARGB32 helpers
//! - `Sprite`, the owned pixel bitmap
//! - `IsoGrid`, the tile ⇄ world projection
//!
//! Anything that walks pixels belongs in `isoworld_rendering` or
//! `isoworld_procedural`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod constants;
pub mod iso;
pub mod math;
pub mod sprite;

pub use color::Color;
pub use constants::{HALF_TILE_HEIGHT, HALF_TILE_WIDTH, TILE_HEIGHT, TILE_WIDTH};
pub use iso::{depth_key, tile_to_world, world_to_tile, IsoGrid};
pub use math::{UVec2, Vec2};
pub use sprite::Sprite;
