//! # chromab-core
//!
//! Core types for the chromab chromatic-aberration filter.
//!
//! This crate provides the foundational types shared by the engine and
//! its front ends:
//!
//! - [`ImageDims`] - Validated image dimensions with row-major index math
//! - [`Rgba`] - Real-valued working color, quantized to 8-bit at output
//! - [`Error`], [`Result`] - Error handling for buffer/dimension mismatches
//!
//! The filter operates on raw row-major RGBA8 byte buffers supplied by
//! the caller; nothing in this crate owns image storage.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dims;
pub mod error;
pub mod pixel;

pub use dims::ImageDims;
pub use error::{Error, Result};
pub use pixel::Rgba;
