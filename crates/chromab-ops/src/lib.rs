//! # chromab-ops
//!
//! The chromatic-aberration engine: per-pixel displacement, resampling,
//! and channel recombination over row-major RGBA8 buffers.
//!
//! # Modules
//!
//! - [`config`] - Validated filter parameters (radial or linear)
//! - [`sample`] - Clamp-to-edge nearest/bilinear sampling
//! - [`displace`] - The displacement laws
//! - [`process`] - Single-pixel channel recombination
//! - [`parallel`] - Range partitioning and the parallel entry point
//!
//! # Example
//!
//! ```rust
//! use chromab_core::ImageDims;
//! use chromab_ops::{apply_filter, FilterConfig};
//!
//! let dims = ImageDims::new(8, 8).unwrap();
//! let src = vec![128u8; dims.byte_len()];
//! let config = FilterConfig::radial(10, 5, true, false).unwrap();
//! let out = apply_filter(&src, dims, &config, 4).unwrap();
//! assert_eq!(out.len(), src.len());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod config;
pub mod displace;
pub mod parallel;
pub mod process;
pub mod sample;

pub use config::FilterConfig;
pub use error::{OpsError, OpsResult};
pub use parallel::{apply_filter, partition_ranges, DEFAULT_WORKERS};
