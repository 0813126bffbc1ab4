//! Codec constants

/// BIR header size in bytes (fields plus reserved tail)
pub const BIR_HEADER_SIZE: usize = 45;

/// Largest record the 32-bit total-length header field can describe
pub const MAX_RECORD_SIZE: usize = i32::MAX as usize;

/// Pixel rows are padded to this boundary
pub const ROW_ALIGNMENT: usize = 4;

/// Sensor color class codes (from the device's SensorColor property)
pub mod sensor_colors {
    /// Monochrome, 1 bit per pixel
    pub const MONO: u32 = 1;

    /// 16-bit grayscale
    pub const GRAYSCALE: u32 = 2;

    /// 16-color palette
    pub const COLOR_16: u32 = 4;

    /// 256-color palette
    pub const COLOR_256: u32 = 8;

    /// Full color, channel layout selected by bits-per-pixel
    pub const FULL_COLOR: u32 = 16;
}
