//! Straight-alpha "source over" blending of packed ARGB32 pixels.

/// Composites `src` over `dst`.
///
/// Fully transparent sources leave `dst` untouched and fully opaque sources
/// replace it. Anything in between mixes each channel as
/// `(s * a + d * (255 - a)) / 255` and yields an opaque pixel.
#[inline]
#[must_use]
pub const fn blend(src: u32, dst: u32) -> u32 {
    let a = src >> 24;
    if a == 0 {
        return dst;
    }
    if a == 255 {
        return src;
    }

    let r = mix((src >> 16) & 0xFF, (dst >> 16) & 0xFF, a);
    let g = mix((src >> 8) & 0xFF, (dst >> 8) & 0xFF, a);
    let b = mix(src & 0xFF, dst & 0xFF, a);
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

#[inline]
const fn mix(s: u32, d: u32, a: u32) -> u32 {
    (s * a + d * (255 - a)) / 255
}

/// Blends a row of source pixels onto a destination row of the same length.
#[inline]
pub fn blend_row(src: &[u32], dst: &mut [u32]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = blend(s, *d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_source_keeps_destination() {
        for dst in [0x0000_0000, 0xFF12_3456, 0x8000_00FF] {
            assert_eq!(blend(0x00FF_FFFF, dst), dst);
        }
    }

    #[test]
    fn test_opaque_source_replaces_destination() {
        for dst in [0x0000_0000, 0xFF12_3456, 0x8000_00FF] {
            assert_eq!(blend(0xFFAB_CDEF, dst), 0xFFAB_CDEF);
        }
    }

    #[test]
    fn test_partial_alpha_mixes_channels() {
        // Half-transparent white over black
        let out = blend(0x80FF_FFFF, 0xFF00_0000);
        assert_eq!(out >> 24, 0xFF);
        let r = (out >> 16) & 0xFF;
        assert_eq!(r, 255 * 128 / 255);
        assert_eq!(r, out & 0xFF);
    }

    #[test]
    fn test_black_shadow_darkens() {
        let dst = 0xFF64_C864;
        let out = blend(0x7800_0000, dst);
        assert_eq!((out >> 8) & 0xFF, 200 * (255 - 120) / 255);
        assert!(out & 0xFF < dst & 0xFF);
    }

    #[test]
    fn test_blend_is_order_sensitive() {
        let a = 0x80FF_0000;
        let b = 0x8000_00FF;
        let base = 0xFF00_0000;
        assert_ne!(blend(b, blend(a, base)), blend(a, blend(b, base)));
    }

    #[test]
    fn test_blend_row() {
        let src = [0x0000_0000, 0xFF11_2233, 0x8000_0000];
        let mut dst = [0xFFFF_FFFF; 3];
        blend_row(&src, &mut dst);
        assert_eq!(dst[0], 0xFFFF_FFFF);
        assert_eq!(dst[1], 0xFF11_2233);
        assert_eq!(dst[2], blend(0x8000_0000, 0xFFFF_FFFF));
    }
}
