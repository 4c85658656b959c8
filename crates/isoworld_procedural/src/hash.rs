//! # Coordinate Hash Noise
//!
//! Stateless, deterministic per-pixel noise.
//!
//! ## Determinism Guarantee
//!
//! `hash_u32(x, y)` depends on nothing but its two arguments. Tiles can be
//! generated in any order, on any thread, any number of times, and always
//! produce identical pixels.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// World seed for seeded (stateful) generation such as object scattering.
///
/// Tile art never uses this; it only depends on pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose (e.g., bush placement).
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// A fresh deterministic generator for this seed.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(0x1505_0B1D_C0FF_EE00)
    }
}

/// Well-mixed 32-bit hash of an integer coordinate pair.
#[inline]
#[must_use]
pub const fn hash_u32(x: i32, y: i32) -> u32 {
    let mut h = (x as u32)
        .wrapping_mul(374_761_393)
        .wrapping_add((y as u32).wrapping_mul(668_265_263));
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^ (h >> 16)
}

/// Pseudo-random value in `[0, 1)` for a coordinate pair.
#[inline]
#[must_use]
pub fn rand01(x: i32, y: i32) -> f32 {
    (hash_u32(x, y) & 0xFFFF) as f32 / 65536.0
}
