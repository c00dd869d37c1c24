// src/pixel/grayscale.rs
//
// Luminosity-method grayscale conversion over a PixelBuffer.

use super::PixelBuffer;
use rayon::prelude::*;

/// Luminosity method, makes grayscale more accurate to humans:
/// green dominates, blue barely registers.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.21 * r as f32 + 0.72 * g as f32 + 0.07 * b as f32
}

/// Rewrite every pixel's color channels to its luminance and force the
/// pixel opaque. The `as u8` cast truncates toward zero, matching the
/// original output pixel for pixel. The weights sum to 1.0 so the result
/// never leaves the u8 range and no clamp is needed.
pub fn convert_in_place(buffer: &mut PixelBuffer) {
    buffer
        .bytes_mut()
        .par_chunks_exact_mut(4)
        .for_each(|pixel| {
            let gray = luminance(pixel[0], pixel[1], pixel[2]) as u8;
            pixel[0] = gray;
            pixel[1] = gray;
            pixel[2] = gray;
            pixel[3] = 255;
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_formula_exact() {
        // 0.21*200 + 0.72*100 + 0.07*50 = 42 + 72 + 3.5 = 117.5
        assert_eq!(luminance(200, 100, 50), 117.5);
    }

    #[test]
    fn test_conversion_truncates_not_rounds() {
        let mut buffer = PixelBuffer::new(1, 1);
        buffer.bytes_mut().copy_from_slice(&[200, 100, 50, 0]);
        convert_in_place(&mut buffer);
        // 117.5 truncates to 117
        assert_eq!(buffer.rgba_at(0, 0), [117, 117, 117, 255]);
    }

    #[test]
    fn test_luminance_range_bounds() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        // weights sum to 1.0, so white maps to 255 (within float noise)
        let white = luminance(255, 255, 255);
        assert!((white - 255.0).abs() < 1e-3);
        assert_eq!(white as u8, 255);
    }

    #[test]
    fn test_channels_equal_and_opaque_after_conversion() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.bytes_mut().copy_from_slice(&[
            10, 200, 30, 0, //
            255, 0, 0, 128, //
            0, 255, 0, 255, //
            0, 0, 255, 17,
        ]);
        convert_in_place(&mut buffer);

        for y in 0..2 {
            for x in 0..2 {
                let [r, g, b, a] = buffer.rgba_at(x, y);
                assert_eq!(r, g);
                assert_eq!(g, b);
                assert_eq!(a, 255);
            }
        }
    }

    #[test]
    fn test_conversion_discards_source_alpha() {
        let mut buffer = PixelBuffer::new(1, 1);
        buffer.bytes_mut().copy_from_slice(&[100, 100, 100, 0]);
        convert_in_place(&mut buffer);
        assert_eq!(buffer.rgba_at(0, 0)[3], 255);
    }
}
