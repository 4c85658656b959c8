//! # Projection & Timing Constants
//!
//! **CRITICAL:** Tile footprint is baked into every generated sprite and
//! every pre-rendered map. Changing it invalidates all tile art.

// =============================================================================
// TILE FOOTPRINT
// =============================================================================

/// Tile footprint width in pixels (2:1 isometric diamond).
pub const TILE_WIDTH: u32 = 64;

/// Tile footprint height in pixels.
pub const TILE_HEIGHT: u32 = 32;

/// Half the tile width, the world x step per tile column.
pub const HALF_TILE_WIDTH: f32 = TILE_WIDTH as f32 / 2.0;

/// Half the tile height, the world y step per tile row.
pub const HALF_TILE_HEIGHT: f32 = TILE_HEIGHT as f32 / 2.0;

// =============================================================================
// DEFAULT DISPLAY / LOOP CONFIGURATION
// =============================================================================

/// Default viewport width in pixels.
pub const DEFAULT_SCREEN_WIDTH: u32 = 800;

/// Default viewport height in pixels.
pub const DEFAULT_SCREEN_HEIGHT: u32 = 600;

/// Logic ticks per second.
pub const TICK_RATE: u32 = 60;

/// Largest frame delta fed into the logic accumulator (seconds).
pub const MAX_FRAME_DELTA: f32 = 0.25;
