//! Range partitioning and the parallel filter entry point.
//!
//! The image is split into contiguous pixel-index ranges, one per
//! worker; each worker owns the matching disjoint slice of the output
//! buffer, so no synchronization is needed on the write side. The
//! input buffer is shared read-only. Output is deterministic:
//! byte-identical for any worker count.

use std::ops::Range;

use chromab_core::ImageDims;
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::process::process_pixel;
use crate::{FilterConfig, OpsError, OpsResult};

/// Default worker count when the caller has no preference.
pub const DEFAULT_WORKERS: usize = 4;

/// Splits `total` pixel indices into `workers` contiguous ranges.
///
/// Every range holds `total / workers` indices except the last, which
/// absorbs the remainder of the integer division. Every index in
/// `0..total` lands in exactly one range.
///
/// # Example
///
/// ```rust
/// use chromab_ops::partition_ranges;
///
/// let ranges = partition_ranges(10, 3);
/// assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
/// ```
pub fn partition_ranges(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let base = total / workers;
    (0..workers)
        .map(|i| {
            let start = i * base;
            let end = if i == workers - 1 { total } else { start + base };
            start..end
        })
        .collect()
}

/// Applies the chromatic-aberration filter over a row-major RGBA8
/// buffer, returning a new buffer of identical length.
///
/// Validates the config and the buffer length before any worker is
/// spawned. Workers run as scoped rayon tasks and the call blocks
/// until all of them finish. A worker panic propagates and fails the
/// whole call; no partial result is ever returned.
///
/// # Example
///
/// ```rust
/// use chromab_core::ImageDims;
/// use chromab_ops::{apply_filter, FilterConfig, DEFAULT_WORKERS};
///
/// let dims = ImageDims::new(16, 16).unwrap();
/// let src = vec![200u8; dims.byte_len()];
/// let config = FilterConfig::linear(3, 45, true).unwrap();
/// let out = apply_filter(&src, dims, &config, DEFAULT_WORKERS).unwrap();
/// assert_eq!(out.len(), src.len());
/// ```
pub fn apply_filter(
    src: &[u8],
    dims: ImageDims,
    config: &FilterConfig,
    workers: usize,
) -> OpsResult<Vec<u8>> {
    config.validate()?;
    dims.validate_buffer(src.len())?;
    if workers == 0 {
        return Err(OpsError::InvalidConfig(
            "worker count must be at least 1".into(),
        ));
    }

    debug!(
        width = dims.width(),
        height = dims.height(),
        workers,
        "Applying chromatic aberration"
    );

    let mut out = vec![0u8; src.len()];
    let ranges = partition_ranges(dims.pixel_count(), workers);

    // Carve the output into one disjoint byte slice per range. Ranges
    // are contiguous and cover every pixel, so a split_at_mut walk
    // lines up exactly with the partition.
    let mut tasks: Vec<(Range<usize>, &mut [u8])> = Vec::with_capacity(ranges.len());
    let mut rest = out.as_mut_slice();
    for range in ranges {
        let (chunk, tail) = rest.split_at_mut(range.len() * 4);
        rest = tail;
        tasks.push((range, chunk));
    }

    tasks.into_par_iter().for_each(|(range, chunk)| {
        trace!(start = range.start, end = range.end, "worker range");
        for (offset, idx) in range.enumerate() {
            let (x, y) = dims.coords_of(idx);
            let px = process_pixel(src, dims, x, y, config).to_bytes();
            chunk[offset * 4..offset * 4 + 4].copy_from_slice(&px);
        }
    });

    Ok(out)
}
