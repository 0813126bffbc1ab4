//! Raw sensor frame reconstruction
//!
//! The device reports frame geometry (width, height, color class,
//! bits-per-pixel) in separate properties; the frame itself arrives as a
//! transport string. This module turns the decoded bytes plus geometry
//! into a [`SensorImage`] view.

use tracing::trace;

use oposwire_types::{PixelFormat, SensorImage};

use crate::{
    constants::ROW_ALIGNMENT,
    error::{Error, Result},
};

/// Bytes per pixel row, padded to the row alignment boundary
///
/// # Examples
///
/// ```
/// use oposwire_core::image::row_stride;
///
/// // 3 pixels at 1 bpp occupy one byte, padded to 4
/// assert_eq!(row_stride(3, 1), 4);
/// // 10 pixels at 24 bpp occupy 30 bytes, padded to 32
/// assert_eq!(row_stride(10, 24), 32);
/// ```
pub fn row_stride(width: u32, bpp: u32) -> usize {
    let row_bits = width as usize * bpp as usize;
    let row_bytes = row_bits.div_ceil(8);
    ((if row_bytes % ROW_ALIGNMENT == 0 { 0 } else { 1 }) + row_bytes / ROW_ALIGNMENT)
        * ROW_ALIGNMENT
}

/// Build an image view over a decoded frame buffer
///
/// Takes ownership of the buffer without copying, and does not check
/// that the buffer covers the full frame; callers compare against
/// [`SensorImage::expected_buffer_len`] before walking rows.
///
/// # Errors
///
/// Returns an error if the color class / bits-per-pixel pairing has no
/// defined pixel layout. Never guesses a default format.
pub fn decode_image(
    data: Vec<u8>,
    width: u32,
    height: u32,
    color: u32,
    bpp: u32,
) -> Result<SensorImage> {
    let format = PixelFormat::select(color, bpp)
        .ok_or(Error::UnsupportedImageFormat { color, bpp })?;
    let stride = row_stride(width, bpp);

    trace!(
        width = width,
        height = height,
        format = ?format,
        stride = stride,
        buffer_len = data.len(),
        "Decoded sensor frame"
    );

    Ok(SensorImage {
        width,
        height,
        bits_per_pixel: bpp,
        format,
        stride,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::sensor_colors;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stride_rounds_to_four_bytes() {
        // 3 bits -> 1 byte -> 4
        assert_eq!(row_stride(3, 1), 4);
        // 30 bytes -> 32
        assert_eq!(row_stride(10, 24), 32);
        // Exact multiple stays put
        assert_eq!(row_stride(8, 8), 8);
        assert_eq!(row_stride(4, 8), 4);
        // 1 bit -> 1 byte -> 4
        assert_eq!(row_stride(1, 1), 4);
        // Zero width collapses to zero
        assert_eq!(row_stride(0, 8), 0);
    }

    #[test]
    fn test_stride_wide_grayscale_row() {
        // 640 pixels at 8 bpp is already aligned
        assert_eq!(row_stride(640, 8), 640);
        // 641 pads up
        assert_eq!(row_stride(641, 8), 644);
    }

    #[test]
    fn test_decode_grayscale_frame() {
        let stride = row_stride(320, 8);
        let image = decode_image(
            vec![0x40; stride * 240],
            320,
            240,
            sensor_colors::COLOR_256,
            8,
        )
        .unwrap();

        assert_eq!(image.format, PixelFormat::Indexed8);
        assert_eq!(image.stride, 320);
        assert!(image.is_complete());
    }

    #[test]
    fn test_decode_full_color_variants() {
        for (bpp, format) in [
            (16, PixelFormat::Rgb555),
            (24, PixelFormat::Rgb24),
            (32, PixelFormat::Rgb32),
            (48, PixelFormat::Rgb48),
            (64, PixelFormat::Argb64),
        ] {
            let image =
                decode_image(Vec::new(), 4, 4, sensor_colors::FULL_COLOR, bpp).unwrap();
            assert_eq!(image.format, format);
        }
    }

    #[test]
    fn test_unsupported_color_class() {
        let result = decode_image(vec![0; 16], 4, 4, 3, 8);
        assert!(matches!(
            result,
            Err(Error::UnsupportedImageFormat { color: 3, bpp: 8 })
        ));
        assert!(result.unwrap_err().is_unsupported());
    }

    #[test]
    fn test_unsupported_color_depth() {
        let result = decode_image(vec![0; 16], 4, 4, sensor_colors::FULL_COLOR, 8);
        assert!(matches!(
            result,
            Err(Error::UnsupportedImageFormat { color: 16, bpp: 8 })
        ));
    }

    #[test]
    fn test_short_buffer_still_builds_view() {
        // Completeness is the caller's check, not the decoder's
        let image = decode_image(vec![0; 10], 320, 240, sensor_colors::MONO, 1).unwrap();
        assert!(!image.is_complete());
        assert_eq!(image.expected_buffer_len(), 40 * 240);
    }
}
