//! Per-pixel channel recombination.
//!
//! This is the semantic heart of the effect: red and blue are read
//! from positions offset in opposite directions along the displacement
//! vector, while green and the base alpha contribution come from the
//! untouched source pixel. The opposing offsets produce the color
//! fringing of real lens dispersion.

use chromab_core::{ImageDims, Rgba};
use glam::Vec2;

use crate::displace::displacement_at;
use crate::sample::sample_at;
use crate::FilterConfig;

/// Computes the output color for the pixel at `(x, y)`.
///
/// Returns the source pixel unchanged when the displacement is zero
/// (deadzone or sub-threshold). Channel values stay real-valued here;
/// quantization happens when the caller writes the output buffer.
pub fn process_pixel(src: &[u8], dims: ImageDims, x: u32, y: u32, config: &FilterConfig) -> Rgba {
    let base = Rgba::at(src, dims, x, y);

    let disp = displacement_at(x, y, dims, config);
    if disp == Vec2::ZERO {
        return base;
    }

    let pos = Vec2::new(x as f32, y as f32);
    let interpolate = config.interpolate();
    let red = sample_at(src, dims, pos + disp, interpolate);
    let blue = sample_at(src, dims, pos - disp, interpolate);

    Rgba::new(
        red.r,
        base.g,
        blue.b,
        (red.a + blue.a + base.a) / 3.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(dims: ImageDims) -> Vec<u8> {
        let mut src = Vec::with_capacity(dims.byte_len());
        for y in 0..dims.height() {
            for x in 0..dims.width() {
                src.extend_from_slice(&[
                    (x * 20) as u8,
                    (y * 20) as u8,
                    (x * 10 + y * 10) as u8,
                    255,
                ]);
            }
        }
        src
    }

    #[test]
    fn test_green_taken_from_base() {
        let dims = ImageDims::new(9, 9).unwrap();
        let src = gradient_image(dims);
        let config = FilterConfig::radial(4, 0, false, true).unwrap();
        for y in 0..9 {
            for x in 0..9 {
                let out = process_pixel(&src, dims, x, y, &config);
                let base = Rgba::at(&src, dims, x, y);
                assert_eq!(out.g, base.g, "green displaced at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_zero_displacement_returns_base() {
        let dims = ImageDims::new(9, 9).unwrap();
        let src = gradient_image(dims);
        // 90% deadzone: the center pixel is certainly inside
        let config = FilterConfig::radial(10, 90, false, false).unwrap();
        let out = process_pixel(&src, dims, 4, 4, &config);
        assert_eq!(out, Rgba::at(&src, dims, 4, 4));
    }

    #[test]
    fn test_red_and_blue_pulled_from_opposite_sides() {
        let dims = ImageDims::new(5, 1).unwrap();
        // Red ramps up along x, blue ramps down
        let mut src = Vec::new();
        for x in 0..5u32 {
            src.extend_from_slice(&[(x * 50) as u8, 0, (200 - x * 50) as u8, 255]);
        }
        // Direction 270 degrees: (-sin, cos) = (1, 0), a shift right
        let config = FilterConfig::linear(1, 270, false).unwrap();
        let out = process_pixel(&src, dims, 2, 0, &config);
        // Red sampled one pixel right, blue one pixel left
        assert_eq!(out.r, 150.0);
        assert_eq!(out.b, 150.0);
    }

    #[test]
    fn test_alpha_is_three_way_average() {
        let dims = ImageDims::new(3, 1).unwrap();
        let src = [
            10, 10, 10, 90, //
            20, 20, 20, 120, //
            30, 30, 30, 240,
        ];
        // Shift right by one: red from x+1, blue from x-1
        let config = FilterConfig::linear(1, 270, false).unwrap();
        let out = process_pixel(&src, dims, 1, 0, &config);
        assert_eq!(out.a, (240.0 + 90.0 + 120.0) / 3.0);
    }
}
