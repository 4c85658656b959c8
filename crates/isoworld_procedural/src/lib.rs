//! # ISOWORLD Procedural Generation
//!
//! Deterministic tile art and object placement.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: tile pixels are a pure function of `(x, y)` and type
//! 2. **Stateless**: no shared generator, tiles can be built in any order
//! 3. **Seeded placement**: scattering uses an explicit `WorldSeed`
//!
//! ## Core Components
//!
//! - `hash_u32` / `rand01`: coordinate hash noise
//! - `generate_tile`: one diamond sprite for a tile type
//! - `TilePalette`: every tile type's sprite, generated once
//! - `DiamondBounds`: containment and random points inside the map diamond
//!
//! ## Example
//!
//! ```rust
//! use isoworld_procedural::{TilePalette, TileType};
//!
//! let palette = TilePalette::generate();
//! let grass = palette.sprite(TileType::Grass);
//! assert_eq!(grass.width(), 64);
//! assert!(palette.sprite(TileType::Empty).is_absent());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod hash;
pub mod palette;
pub mod placement;
pub mod tile;

pub use hash::{hash_u32, rand01, WorldSeed};
pub use palette::TilePalette;
pub use placement::DiamondBounds;
pub use tile::{generate_tile, TileType, TILE_TYPE_COUNT};
