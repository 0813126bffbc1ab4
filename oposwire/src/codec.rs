//! Per-device codec handle

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use oposwire_core::{image, population, transport, BinaryConversion, BirRecord};
use oposwire_types::SensorImage;

use crate::error::Result;

/// Codec surface bound to one device handle
///
/// The legacy session exposes binary conversion as a writable property;
/// everything read or written afterwards is interpreted under the value
/// it held at call time. `DeviceCodec` caches that one piece of state
/// and threads it through every conversion.
///
/// Thread-safe and cheap to clone (clones share the cached mode).
///
/// # Examples
///
/// ```
/// use oposwire::{BinaryConversion, BirDataType, BirPurpose, BirRecord, DeviceCodec, SensorType};
///
/// fn main() -> oposwire::Result<()> {
///     let codec = DeviceCodec::with_conversion(BinaryConversion::Nibble);
///
///     let record = BirRecord::new(
///         BirDataType::Processed,
///         BirPurpose::Verify,
///         SensorType::FINGERPRINT,
///     )
///     .with_data_block(vec![0xDE, 0xAD]);
///
///     let text = codec.encode_bir(Some(&record))?.unwrap();
///     assert_eq!(codec.decode_bir(&text)?, Some(record));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeviceCodec {
    conversion: Arc<RwLock<BinaryConversion>>,
}

impl DeviceCodec {
    /// Create a handle with the default conversion (`None`)
    pub fn new() -> Self {
        Self::with_conversion(BinaryConversion::default())
    }

    /// Create a handle with a known conversion mode
    pub fn with_conversion(conversion: BinaryConversion) -> Self {
        Self {
            conversion: Arc::new(RwLock::new(conversion)),
        }
    }

    /// Get the active conversion mode
    pub fn binary_conversion(&self) -> BinaryConversion {
        *self.conversion.read()
    }

    /// Set the active conversion mode
    pub fn set_binary_conversion(&self, conversion: BinaryConversion) {
        debug!(conversion = ?conversion, "Binary conversion changed");
        *self.conversion.write() = conversion;
    }

    /// Set the conversion mode from the raw legacy property value
    ///
    /// # Errors
    ///
    /// Returns an error for values the interface does not define; the
    /// cached mode is left unchanged.
    pub fn set_binary_conversion_raw(&self, raw: i32) -> Result<()> {
        self.set_binary_conversion(BinaryConversion::try_from(raw)?);
        Ok(())
    }

    /// Encode bytes into a transport string under the active mode
    pub fn encode_bytes(&self, data: &[u8]) -> String {
        transport::encode_bytes(data, self.binary_conversion())
    }

    /// Decode a transport string into bytes under the active mode
    pub fn decode_bytes(&self, text: &str) -> Result<Vec<u8>> {
        Ok(transport::decode_bytes(text, self.binary_conversion())?)
    }

    /// Encode a biometric record into a transport string
    ///
    /// Nothing to send encodes to `None`, the same shape an absent
    /// template decodes to.
    pub fn encode_bir(&self, record: Option<&BirRecord>) -> Result<Option<String>> {
        let Some(record) = record else {
            return Ok(None);
        };

        let buf = record.encode()?;
        Ok(Some(self.encode_bytes(&buf)))
    }

    /// Decode a transport string into a biometric record
    ///
    /// An empty string, or one whose decoded bytes fall short of the
    /// record header, yields `Ok(None)`: no record present.
    pub fn decode_bir(&self, text: &str) -> Result<Option<BirRecord>> {
        if text.is_empty() {
            trace!("Empty record property, no record");
            return Ok(None);
        }

        let buf = self.decode_bytes(text)?;
        Ok(BirRecord::decode(&buf)?)
    }

    /// Encode a population of reference records
    ///
    /// Empty slots and unencodable records are dropped; the output may
    /// be shorter than the input.
    pub fn encode_bir_population(&self, records: &[Option<BirRecord>]) -> Vec<String> {
        population::encode_bir_population(records, self.binary_conversion())
    }

    /// Decode a raw sensor frame property into an image view
    pub fn decode_image(
        &self,
        text: &str,
        width: u32,
        height: u32,
        color: u32,
        bpp: u32,
    ) -> Result<SensorImage> {
        let data = self.decode_bytes(text)?;
        Ok(image::decode_image(data, width, height, color, bpp)?)
    }
}

impl Default for DeviceCodec {
    fn default() -> Self {
        Self::new()
    }
}
