//! Error types for core buffer and dimension handling.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by core dimension and buffer validation.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is zero, or the pixel count overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why the dimensions are invalid
        reason: String,
    },

    /// Buffer length disagrees with `width * height * 4`.
    #[error("dimension mismatch: expected {expected} bytes, got {got}")]
    DimensionMismatch {
        /// Byte length implied by the dimensions
        expected: usize,
        /// Actual buffer length
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(0, 40, "width must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("0x40"));
        assert!(msg.contains("at least 1"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = Error::dimension_mismatch(400, 399);
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("399"));
    }
}
