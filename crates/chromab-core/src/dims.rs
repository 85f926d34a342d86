//! Validated image dimensions and row-major index math.
//!
//! All engine code addresses pixels through [`ImageDims`] so that the
//! `width * height * 4 == buffer length` invariant is checked once,
//! before any worker touches a buffer.

use glam::Vec2;

use crate::{Error, Result};

/// Dimensions of a row-major RGBA8 image.
///
/// Construction enforces that both dimensions are at least 1 and that
/// the byte length fits in `usize`.
///
/// # Example
///
/// ```rust
/// use chromab_core::ImageDims;
///
/// let dims = ImageDims::new(640, 480).unwrap();
/// assert_eq!(dims.pixel_count(), 640 * 480);
/// assert_eq!(dims.byte_len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDims {
    width: u32,
    height: u32,
}

impl ImageDims {
    /// Creates validated dimensions.
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero
    /// or if `width * height * 4` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be at least 1",
            ));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "byte length overflows"))?;
        Ok(Self { width, height })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Buffer length in bytes (4 bytes per pixel).
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Geometric center of the pixel grid: `((w-1)/2, (h-1)/2)`.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.width - 1) as f32 / 2.0,
            (self.height - 1) as f32 / 2.0,
        )
    }

    /// Checks a buffer length against these dimensions.
    pub fn validate_buffer(&self, len: usize) -> Result<()> {
        if len != self.byte_len() {
            return Err(Error::dimension_mismatch(self.byte_len(), len));
        }
        Ok(())
    }

    /// Row-major pixel index of `(x, y)`.
    ///
    /// Caller guarantees `x < width` and `y < height`.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel coordinates of a row-major index.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((index % w) as u32, (index / w) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimension() {
        assert!(ImageDims::new(0, 10).is_err());
        assert!(ImageDims::new(10, 0).is_err());
        assert!(ImageDims::new(1, 1).is_ok());
    }

    #[test]
    fn test_byte_len() {
        let dims = ImageDims::new(3, 2).unwrap();
        assert_eq!(dims.byte_len(), 24);
        assert!(dims.validate_buffer(24).is_ok());
        assert!(dims.validate_buffer(23).is_err());
    }

    #[test]
    fn test_center_is_half_extent() {
        let dims = ImageDims::new(5, 3).unwrap();
        assert_eq!(dims.center(), Vec2::new(2.0, 1.0));

        // Even dimensions land between pixels
        let dims = ImageDims::new(4, 4).unwrap();
        assert_eq!(dims.center(), Vec2::new(1.5, 1.5));
    }

    #[test]
    fn test_index_round_trip() {
        let dims = ImageDims::new(7, 5).unwrap();
        for y in 0..5 {
            for x in 0..7 {
                let idx = dims.index_of(x, y);
                assert_eq!(dims.coords_of(idx), (x, y));
            }
        }
    }
}
