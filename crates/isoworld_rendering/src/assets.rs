//! # Sprite Assets
//!
//! Decoded images become [`Sprite`]s here. File formats are not this
//! crate's business: an [`ImageSource`] hands over straight RGBA bytes and
//! the loader converts, rescales and stores them.
//!
//! ## Usage
//!
//! ```rust
//! use isoworld_rendering::assets::{load_sprite, MemoryImageSource, RawImage, SpriteStore};
//!
//! let mut images = MemoryImageSource::new();
//! images.insert("tree.png", RawImage::new(2, 2, vec![255; 16]));
//!
//! let mut store = SpriteStore::new();
//! let tree = store.insert(load_sprite(&images, "tree.png", 2.0));
//! assert_eq!(store.get(tree).map(|s| s.width()), Some(4));
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use isoworld_shared::color::pack_argb;
use isoworld_shared::Sprite;

/// A decoded image: straight-alpha RGBA, 4 bytes per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl RawImage {
    /// Wraps decoded RGBA bytes.
    #[must_use]
    pub const fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// True if the byte count matches the dimensions and the image is not
    /// empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.rgba.len() == self.width as usize * self.height as usize * 4
    }

    #[inline]
    fn argb_at(&self, x: u32, y: u32) -> u32 {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba[i..i + 4];
        pack_argb(px[3], px[0], px[1], px[2])
    }
}

/// Something that can decode an image file.
pub trait ImageSource {
    /// Decodes `path`. `None` if it does not exist or cannot be decoded.
    fn decode(&self, path: &Path) -> Option<RawImage>;
}

/// In-memory images keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemoryImageSource {
    images: HashMap<PathBuf, RawImage>,
}

impl MemoryImageSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an image under `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, image: RawImage) {
        self.images.insert(path.into(), image);
    }
}

impl ImageSource for MemoryImageSource {
    fn decode(&self, path: &Path) -> Option<RawImage> {
        self.images.get(path).cloned()
    }
}

/// Loads and rescales an image into a sprite.
///
/// The result is `round(size * scale)` pixels in each dimension (at least
/// one), nearest-neighbor resampled. A non-positive or non-finite scale
/// means 1.0. Missing or malformed images yield the absent sprite.
pub fn load_sprite<S, P>(source: &S, path: P, scale: f32) -> Sprite
where
    S: ImageSource + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let Some(image) = source.decode(path) else {
        tracing::warn!(path = %path.display(), "image not found");
        return Sprite::empty();
    };
    if !image.is_valid() {
        tracing::warn!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            "image has inconsistent pixel data"
        );
        return Sprite::empty();
    }

    let sprite = resample(&image, scale);
    tracing::debug!(
        path = %path.display(),
        width = sprite.width(),
        height = sprite.height(),
        "sprite loaded"
    );
    sprite
}

/// Converts RGBA to ARGB32 and nearest-neighbor rescales.
#[must_use]
pub fn resample(image: &RawImage, scale: f32) -> Sprite {
    let scale = if scale > 0.0 && scale.is_finite() {
        scale
    } else {
        1.0
    };

    let width = (image.width as f32 * scale).round().max(1.0) as u32;
    let height = (image.height as f32 * scale).round().max(1.0) as u32;

    let mut sprite = Sprite::transparent(width, height);
    if sprite.is_absent() {
        tracing::warn!(width, height, "sprite allocation failed");
        return sprite;
    }

    let inv = 1.0 / scale;
    let row_len = width as usize;
    for (y, row) in sprite.pixels_mut().chunks_exact_mut(row_len).enumerate() {
        let src_y = ((y as f32 * inv) as u32).min(image.height - 1);
        for (x, px) in row.iter_mut().enumerate() {
            let src_x = ((x as f32 * inv) as u32).min(image.width - 1);
            *px = image.argb_at(src_x, src_y);
        }
    }
    sprite
}

/// Opaque reference to a sprite in a [`SpriteStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteHandle(u32);

impl SpriteHandle {
    /// Raw index, mostly for logging.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Owns every sprite objects refer to. Handles stay valid for the store's
/// lifetime; sprites are never removed, only replaced.
#[derive(Clone, Debug, Default)]
pub struct SpriteStore {
    sprites: Vec<Sprite>,
}

impl SpriteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a sprite (absent sprites included) and returns its handle.
    pub fn insert(&mut self, sprite: Sprite) -> SpriteHandle {
        let handle = SpriteHandle(self.sprites.len() as u32);
        self.sprites.push(sprite);
        handle
    }

    /// Sprite behind `handle`, `None` for handles from another store.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: SpriteHandle) -> Option<&Sprite> {
        self.sprites.get(handle.0 as usize)
    }

    /// Swaps in a new sprite. Returns `false` for an unknown handle.
    pub fn replace(&mut self, handle: SpriteHandle, sprite: Sprite) -> bool {
        match self.sprites.get_mut(handle.0 as usize) {
            Some(slot) => {
                *slot = sprite;
                true
            }
            None => false,
        }
    }

    /// Number of stored sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// True if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
