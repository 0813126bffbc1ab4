//! Decoded sensor image view and pixel format selection

use std::fmt;

/// Pixel format of a raw sensor frame
///
/// Selected from the device-reported color class and bits-per-pixel pair.
/// Indexed and grayscale classes ignore the reported depth; the
/// full-color class picks its channel layout from the depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 1 bit per pixel, palette indexed
    Indexed1,

    /// 16-bit grayscale
    GrayScale16,

    /// 4 bits per pixel, palette indexed
    Indexed4,

    /// 8 bits per pixel, palette indexed
    Indexed8,

    /// 16-bit color, 5 bits per channel
    Rgb555,

    /// 24-bit color, 8 bits per channel
    Rgb24,

    /// 32-bit color, 8 bits per channel plus padding
    Rgb32,

    /// 48-bit color, 16 bits per channel
    Rgb48,

    /// 64-bit color with alpha, 16 bits per channel
    Argb64,
}

impl PixelFormat {
    /// Select a format from the sensor color class and bits-per-pixel
    ///
    /// Returns `None` for any pairing with no defined layout; callers must
    /// surface that explicitly rather than fall back to a default.
    ///
    /// # Examples
    ///
    /// ```
    /// use oposwire_types::PixelFormat;
    ///
    /// assert_eq!(PixelFormat::select(8, 8), Some(PixelFormat::Indexed8));
    /// assert_eq!(PixelFormat::select(16, 24), Some(PixelFormat::Rgb24));
    /// assert_eq!(PixelFormat::select(3, 8), None);
    /// ```
    pub fn select(color: u32, bpp: u32) -> Option<Self> {
        match (color, bpp) {
            (1, _) => Some(Self::Indexed1),
            (2, _) => Some(Self::GrayScale16),
            (4, _) => Some(Self::Indexed4),
            (8, _) => Some(Self::Indexed8),
            (16, 16) => Some(Self::Rgb555),
            (16, 24) => Some(Self::Rgb24),
            (16, 32) => Some(Self::Rgb32),
            (16, 48) => Some(Self::Rgb48),
            (16, 64) => Some(Self::Argb64),
            _ => None,
        }
    }
}

/// Rectangular pixel buffer reconstructed from a raw sensor frame
///
/// The buffer is whatever the transport delivered; constructing the view
/// performs no copy and no completeness check. Callers that walk rows
/// should verify `is_complete` (or compare against `expected_buffer_len`)
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorImage {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Bits per pixel as reported by the sensor
    pub bits_per_pixel: u32,

    /// Channel layout
    pub format: PixelFormat,

    /// Bytes per row, padded to a 4-byte boundary
    pub stride: usize,

    /// Raw pixel data
    pub data: Vec<u8>,
}

impl SensorImage {
    /// Minimum buffer length for a full frame (stride x height)
    pub fn expected_buffer_len(&self) -> usize {
        self.stride * self.height as usize
    }

    /// Whether the buffer covers every row of the frame
    pub fn is_complete(&self) -> bool {
        self.data.len() >= self.expected_buffer_len()
    }
}

impl fmt::Display for SensorImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SensorImage[{}x{} {:?}, stride={}, {} bytes]",
            self.width,
            self.height,
            self.format,
            self.stride,
            self.data.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_indexed_classes() {
        assert_eq!(PixelFormat::select(1, 1), Some(PixelFormat::Indexed1));
        assert_eq!(PixelFormat::select(2, 16), Some(PixelFormat::GrayScale16));
        assert_eq!(PixelFormat::select(4, 4), Some(PixelFormat::Indexed4));
        assert_eq!(PixelFormat::select(8, 8), Some(PixelFormat::Indexed8));
    }

    #[test]
    fn test_select_color_variants() {
        assert_eq!(PixelFormat::select(16, 16), Some(PixelFormat::Rgb555));
        assert_eq!(PixelFormat::select(16, 24), Some(PixelFormat::Rgb24));
        assert_eq!(PixelFormat::select(16, 32), Some(PixelFormat::Rgb32));
        assert_eq!(PixelFormat::select(16, 48), Some(PixelFormat::Rgb48));
        assert_eq!(PixelFormat::select(16, 64), Some(PixelFormat::Argb64));
    }

    #[test]
    fn test_select_undefined_pairs() {
        assert_eq!(PixelFormat::select(3, 8), None);
        assert_eq!(PixelFormat::select(16, 8), None);
        assert_eq!(PixelFormat::select(0, 0), None);
        assert_eq!(PixelFormat::select(32, 32), None);
    }

    #[test]
    fn test_expected_buffer_len() {
        let image = SensorImage {
            width: 10,
            height: 5,
            bits_per_pixel: 8,
            format: PixelFormat::Indexed8,
            stride: 12,
            data: vec![0; 60],
        };

        assert_eq!(image.expected_buffer_len(), 60);
        assert!(image.is_complete());
    }

    #[test]
    fn test_incomplete_buffer() {
        let image = SensorImage {
            width: 10,
            height: 5,
            bits_per_pixel: 8,
            format: PixelFormat::Indexed8,
            stride: 12,
            data: vec![0; 59],
        };

        assert!(!image.is_complete());
    }
}
