//! Byte/string transport conversion
//!
//! Legacy control objects carry binary payloads in string-typed
//! properties and arguments. The session's binary-conversion setting
//! selects how bytes map onto characters:
//!
//! ```text
//! None (0)    one character per byte, char code = byte value
//! Nibble (1)  two hex digits per byte, high nibble first
//! Decimal (2) vendor mode for long buffers, carried through unchanged
//! ```
//!
//! Round-trip is exact for any byte sequence under a fixed mode.

use tracing::trace;

use crate::error::{Error, Result};

/// Byte/string conversion mode
///
/// Session state on the device handle, passed explicitly to every codec
/// call; the codecs themselves hold no state.
///
/// # Examples
///
/// ```
/// use oposwire_core::BinaryConversion;
///
/// let mode = BinaryConversion::try_from(1).unwrap();
/// assert_eq!(mode, BinaryConversion::Nibble);
/// assert!(BinaryConversion::try_from(5).is_err());
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum BinaryConversion {
    /// One character per byte
    #[default]
    None = 0,

    /// Two hex digits per byte
    Nibble = 1,

    /// Vendor mode reported by some controls for long buffers; the data
    /// arrives in its transport form already and is carried through
    /// unchanged, like `None`
    Decimal = 2,
}

impl From<BinaryConversion> for i32 {
    fn from(conversion: BinaryConversion) -> i32 {
        conversion as i32
    }
}

impl TryFrom<i32> for BinaryConversion {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Nibble),
            2 => Ok(Self::Decimal),
            _ => Err(Error::UnknownConversion(value)),
        }
    }
}

/// Encode bytes into a transport string
///
/// Empty input encodes to an empty string. Encoding never fails: every
/// byte value has a representation under every mode.
///
/// # Examples
///
/// ```
/// use oposwire_core::{transport, BinaryConversion};
///
/// assert_eq!(transport::encode_bytes(b"AB", BinaryConversion::None), "AB");
/// assert_eq!(transport::encode_bytes(&[0x12, 0xAB], BinaryConversion::Nibble), "12ab");
/// ```
pub fn encode_bytes(data: &[u8], conversion: BinaryConversion) -> String {
    let text = match conversion {
        BinaryConversion::None | BinaryConversion::Decimal => {
            data.iter().map(|&b| b as char).collect()
        }
        BinaryConversion::Nibble => hex::encode(data),
    };

    trace!(
        conversion = ?conversion,
        input_len = data.len(),
        output_len = text.len(),
        "Encoded transport string"
    );

    text
}

/// Decode a transport string back into bytes
///
/// An empty string decodes to an empty vector, never an absent value;
/// "no data" vs "zero-length data" is the caller's distinction.
///
/// # Errors
///
/// Returns an error if:
/// - `None`/`Decimal` mode and a character sits above U+00FF
/// - `Nibble` mode and the string has odd length or a non-hex digit
///
/// # Examples
///
/// ```
/// use oposwire_core::{transport, BinaryConversion};
///
/// let data = transport::decode_bytes("12ab", BinaryConversion::Nibble).unwrap();
/// assert_eq!(data, vec![0x12, 0xAB]);
/// ```
pub fn decode_bytes(text: &str, conversion: BinaryConversion) -> Result<Vec<u8>> {
    let data = match conversion {
        BinaryConversion::None | BinaryConversion::Decimal => {
            let mut data = Vec::with_capacity(text.len());
            for (index, ch) in text.chars().enumerate() {
                let code = ch as u32;
                if code > 0xFF {
                    return Err(Error::WideCharacter { ch, index });
                }
                data.push(code as u8);
            }
            data
        }
        BinaryConversion::Nibble => hex::decode(text).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                Error::InvalidNibbleDigit { ch: c, index }
            }
            _ => Error::OddLengthNibbleString { len: text.len() },
        })?,
    };

    trace!(
        conversion = ?conversion,
        input_len = text.len(),
        output_len = data.len(),
        "Decoded transport string"
    );

    Ok(data)
}
