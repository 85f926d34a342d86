//! Real-valued working color for 8-bit RGBA pixels.
//!
//! Channel math during filtering stays in `f32` so interpolation and
//! the alpha blend do not compound rounding error; quantization back to
//! bytes happens exactly once, in [`Rgba::to_bytes`].

use crate::ImageDims;

/// An RGBA color with real-valued channels in the `[0, 255]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Rgba {
    /// Creates a color from channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Widens a packed RGBA8 pixel. No rescaling is applied.
    #[inline]
    pub fn from_bytes(px: [u8; 4]) -> Self {
        Self::new(px[0] as f32, px[1] as f32, px[2] as f32, px[3] as f32)
    }

    /// Quantizes back to RGBA8: clamp to `[0, 255]`, truncate toward zero.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            self.r.clamp(0.0, 255.0) as u8,
            self.g.clamp(0.0, 255.0) as u8,
            self.b.clamp(0.0, 255.0) as u8,
            self.a.clamp(0.0, 255.0) as u8,
        ]
    }

    /// Fetches the pixel at `(x, y)` from a row-major RGBA8 buffer.
    ///
    /// Caller guarantees `x < width`, `y < height`, and that `src` has
    /// the byte length implied by `dims`.
    #[inline]
    pub fn at(src: &[u8], dims: ImageDims, x: u32, y: u32) -> Self {
        let idx = dims.index_of(x, y) * 4;
        Self::from_bytes([src[idx], src[idx + 1], src[idx + 2], src[idx + 3]])
    }
}
