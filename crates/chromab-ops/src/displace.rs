//! Displacement laws: where the red/blue samples come from.

use chromab_core::ImageDims;
use glam::Vec2;

use crate::FilterConfig;

/// Radial displacements with a magnitude below this are suppressed;
/// they would shift by an imperceptible sub-hundredth of a pixel.
pub const MIN_DISPLACEMENT: f32 = 0.01;

/// Computes the displacement vector for the pixel at `(x, y)`.
///
/// - `Linear`: a uniform shift of `(-sin th, cos th) * max_displacement`
///   for the configured direction, identical for every pixel.
/// - `Radial`: the pixel's offset from the image center, normalized by
///   the center vector's length, rescaled to be zero at the deadzone
///   boundary, optionally squared for exponential falloff, and scaled
///   by `max_displacement`.
///
/// The radial normalization divides by the center vector's length, so
/// the normalized offset reaches 1 only at the corner pixels; edge
/// midpoints normalize well short of 1 and never see the full
/// displacement. That is the established behavior of this filter and
/// is kept as-is.
pub fn displacement_at(x: u32, y: u32, dims: ImageDims, config: &FilterConfig) -> Vec2 {
    match *config {
        FilterConfig::Linear {
            max_displacement,
            direction_degrees,
            ..
        } => {
            let theta = (direction_degrees as f32).to_radians();
            Vec2::new(-theta.sin(), theta.cos()) * max_displacement as f32
        }
        FilterConfig::Radial {
            max_displacement,
            deadzone_percent,
            exponential_falloff,
            ..
        } => {
            let center = dims.center();
            let center_len = center.length();
            if center_len == 0.0 {
                // 1x1 image: no direction to displace along
                return Vec2::ZERO;
            }

            let d = (Vec2::new(x as f32, y as f32) - center) / center_len;
            let len = d.length();
            let deadzone = deadzone_percent as f32 / 100.0;
            if len <= deadzone {
                return Vec2::ZERO;
            }

            // Rescale so displacement is zero at the deadzone boundary
            // and full at the normalized unit radius.
            let mut v = d * ((len - deadzone) / (1.0 - deadzone));
            if exponential_falloff {
                v *= v.length();
            }
            v *= max_displacement as f32;

            if v.length() < MIN_DISPLACEMENT {
                Vec2::ZERO
            } else {
                v
            }
        }
    }
}
