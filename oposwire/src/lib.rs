//! # oposwire
//!
//! Codecs for the string-only transport of legacy point-of-sale control
//! objects: biometric information records, raw sensor frames, statistic
//! batches and cash-count tables, all carried through byte/string
//! conversion selected per device session.
//!
//! ## Features
//!
//! - Byte-exact round trips under every conversion mode
//! - Schema-driven biometric record layout
//! - Explicit errors for malformed input and unsupported formats
//! - Per-device session handle with a cached conversion mode
//!
//! ## Quick Start
//!
//! ```
//! use oposwire::{BinaryConversion, BirDataType, BirPurpose, BirRecord, DeviceCodec, SensorType};
//!
//! fn main() -> oposwire::Result<()> {
//!     let codec = DeviceCodec::with_conversion(BinaryConversion::Nibble);
//!
//!     // A processed fingerprint template, ready for the control object
//!     let record = BirRecord::new(
//!         BirDataType::Processed,
//!         BirPurpose::Verify,
//!         SensorType::FINGERPRINT,
//!     )
//!     .with_data_block(vec![0x10, 0x20, 0x30]);
//!
//!     let text = codec.encode_bir(Some(&record))?.unwrap();
//!     let decoded = codec.decode_bir(&text)?;
//!     assert_eq!(decoded, Some(record));
//!
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;

// Re-exports
pub use codec::DeviceCodec;
pub use error::{Error, Result};

// Re-export codec primitives
pub use oposwire_core::{
    delimited, image, population, transport, BinaryConversion, BirDataType, BirPurpose,
    BirRecord, SensorType,
};
pub use oposwire_types::{
    CashCount, CashCountKind, PixelFormat, SensorImage, Statistic, UposVersion,
};
