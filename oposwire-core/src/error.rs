//! Error types for oposwire-core

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Codec errors
///
/// Two classes matter to callers mapping back to legacy result codes:
/// malformed input (the transport string or buffer is corrupt) and
/// unsupported (a mode or format the codec refuses to guess at). Absent
/// values are not errors anywhere in this crate; they decode to `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Binary conversion value not defined by the legacy interface
    #[error("Unknown binary conversion value: {0}")]
    UnknownConversion(i32),

    /// Nibble-mode string must hold two hex digits per byte
    #[error("Odd-length nibble string: {len} characters")]
    OddLengthNibbleString {
        len: usize,
    },

    /// Non-hex character in a nibble-mode string
    #[error("Invalid nibble digit {ch:?} at index {index}")]
    InvalidNibbleDigit {
        ch: char,
        index: usize,
    },

    /// Character above U+00FF in a byte-per-character string
    #[error("Character {ch:?} at index {index} is outside the byte range")]
    WideCharacter {
        ch: char,
        index: usize,
    },

    /// Record header declares more payload than the buffer holds
    #[error("Truncated data block: header declares {declared} bytes, buffer holds {available}")]
    TruncatedDataBlock {
        declared: usize,
        available: usize,
    },

    /// Record length does not fit the 32-bit header field
    #[error("Record too large: {size} bytes (max: {max} bytes)")]
    RecordTooLarge {
        size: usize,
        max: usize,
    },

    /// Unknown BIR data type tag
    #[error("Unknown BIR data type tag: {0}")]
    UnknownDataType(u8),

    /// Unknown BIR purpose tag
    #[error("Unknown BIR purpose tag: {0}")]
    UnknownPurpose(u8),

    /// Color class / depth pairing with no defined pixel layout
    #[error("Unsupported image format: color class {color}, {bpp} bpp")]
    UnsupportedImageFormat {
        color: u32,
        bpp: u32,
    },

    /// Cash count token that is not `nominal:count`
    #[error("Invalid cash count token: {token:?}")]
    InvalidCashCount {
        token: String,
    },
}

impl Error {
    /// Check if the input itself was corrupt (vs a mode/format we refuse)
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::OddLengthNibbleString { .. }
                | Self::InvalidNibbleDigit { .. }
                | Self::WideCharacter { .. }
                | Self::TruncatedDataBlock { .. }
                | Self::UnknownDataType(_)
                | Self::UnknownPurpose(_)
                | Self::InvalidCashCount { .. }
        )
    }

    /// Check if the codec refused a mode or format rather than the data
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnknownConversion(_)
                | Self::UnsupportedImageFormat { .. }
                | Self::RecordTooLarge { .. }
        )
    }
}
