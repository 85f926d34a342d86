//! Clamp-to-edge pixel sampling at fractional coordinates.

use chromab_core::{ImageDims, Rgba};
use glam::Vec2;

/// Fractional offsets below this skip the blend along that axis.
///
/// This is the correctness mechanism for the image edges, not just an
/// optimization: a coordinate clamped exactly onto the last row or
/// column has a zero fractional part there, and skipping the axis
/// keeps the `+1` neighbor read in bounds.
const BLEND_EPSILON: f32 = 1e-5;

/// Samples the source buffer at a real-valued position.
///
/// The position is clamped componentwise to `[0, dim-1]` (clamp-to-edge
/// policy - displacement past the border repeats the edge pixel, it
/// never wraps). With `interpolate` false the position is floored and
/// that pixel returned exactly; with it true the four surrounding
/// pixels are blended by the fractional offsets.
///
/// # Example
///
/// ```rust
/// use chromab_core::ImageDims;
/// use chromab_ops::sample::sample_at;
/// use glam::Vec2;
///
/// let dims = ImageDims::new(2, 1).unwrap();
/// let src = [0u8, 0, 0, 255, 200, 0, 0, 255];
/// let mid = sample_at(&src, dims, Vec2::new(0.5, 0.0), true);
/// assert_eq!(mid.r, 100.0);
/// ```
pub fn sample_at(src: &[u8], dims: ImageDims, pos: Vec2, interpolate: bool) -> Rgba {
    let x = pos.x.clamp(0.0, (dims.width() - 1) as f32);
    let y = pos.y.clamp(0.0, (dims.height() - 1) as f32);

    let xi = x.floor() as u32;
    let yi = y.floor() as u32;

    if !interpolate {
        return Rgba::at(src, dims, xi, yi);
    }

    let rx = x - x.floor();
    let ry = y - y.floor();
    let blend_x = rx >= BLEND_EPSILON;
    let blend_y = ry >= BLEND_EPSILON;

    let c00 = Rgba::at(src, dims, xi, yi);
    match (blend_x, blend_y) {
        (false, false) => c00,
        (true, false) => lerp(c00, Rgba::at(src, dims, xi + 1, yi), rx),
        (false, true) => lerp(c00, Rgba::at(src, dims, xi, yi + 1), ry),
        (true, true) => {
            let top = lerp(c00, Rgba::at(src, dims, xi + 1, yi), rx);
            let bottom = lerp(
                Rgba::at(src, dims, xi, yi + 1),
                Rgba::at(src, dims, xi + 1, yi + 1),
                rx,
            );
            lerp(top, bottom, ry)
        }
    }
}

#[inline]
fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
    Rgba::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // 2x2: red, green / blue, white
    fn test_image() -> ([u8; 16], ImageDims) {
        let src = [
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 255, 255,
        ];
        (src, ImageDims::new(2, 2).unwrap())
    }

    #[test]
    fn test_nearest_floors() {
        let (src, dims) = test_image();
        let c = sample_at(&src, dims, Vec2::new(0.9, 0.9), false);
        assert_eq!(c, Rgba::new(255.0, 0.0, 0.0, 255.0));
    }

    #[test]
    fn test_clamps_to_edge() {
        let (src, dims) = test_image();
        // Far out of bounds repeats the corner pixel
        let c = sample_at(&src, dims, Vec2::new(52.0, -3.0), false);
        assert_eq!(c, sample_at(&src, dims, Vec2::new(1.0, 0.0), false));

        // Same under interpolation: the edge clamp zeroes the fractions
        let c = sample_at(&src, dims, Vec2::new(52.0, 52.0), true);
        assert_eq!(c, Rgba::new(255.0, 255.0, 255.0, 255.0));
    }

    #[test]
    fn test_bilinear_matches_nearest_at_integer_coords() {
        let (src, dims) = test_image();
        for y in 0..2 {
            for x in 0..2 {
                let pos = Vec2::new(x as f32, y as f32);
                assert_eq!(
                    sample_at(&src, dims, pos, true),
                    sample_at(&src, dims, pos, false)
                );
            }
        }
    }

    #[test]
    fn test_bilinear_blends_both_axes() {
        let (src, dims) = test_image();
        let c = sample_at(&src, dims, Vec2::new(0.5, 0.5), true);
        assert_relative_eq!(c.r, 127.5);
        assert_relative_eq!(c.g, 127.5);
        assert_relative_eq!(c.b, 127.5);
        assert_relative_eq!(c.a, 255.0);
    }

    #[test]
    fn test_bilinear_single_axis() {
        let (src, dims) = test_image();
        // On the last row: only x blends, y fraction is zero
        let c = sample_at(&src, dims, Vec2::new(0.25, 1.0), true);
        assert_relative_eq!(c.b, 0.25 * 255.0 + 0.75 * 255.0);
        assert_relative_eq!(c.r, 0.25 * 255.0);
    }
}
