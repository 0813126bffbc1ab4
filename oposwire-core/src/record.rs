//! Biometric information record structure and encoding/decoding

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::{
    constants::{BIR_HEADER_SIZE, MAX_RECORD_SIZE},
    error::{Error, Result},
    tags::{BirDataType, BirPurpose, SensorType},
};

/// Record buffer offsets
///
/// Both codec directions address the buffer through this one table.
/// Unlisted header bytes (10, 16..45) are reserved and stay zero.
mod layout {
    /// u32 LE, header plus data block
    pub const TOTAL_LENGTH: usize = 0;

    /// u8
    pub const VERSION_MAJOR: usize = 4;

    /// u8
    pub const DATA_TYPE: usize = 5;

    /// u16 LE
    pub const FORMAT_OWNER: usize = 6;

    /// u16 LE
    pub const FORMAT_ID: usize = 8;

    /// u8
    pub const PURPOSE: usize = 11;

    /// u32 LE
    pub const SENSOR_TYPE: usize = 12;

    /// start of the variable-length data block
    pub const DATA_BLOCK: usize = 45;
}

/// Biometric information record (BIR)
///
/// # Record Structure
///
/// ```text
/// ┌──────────────┬─────────┬──────────┬────────────┬───────────┬─────────┬─────────────┬──────────┬───────────┐
/// │ TotalLength  │ Version │ DataType │ FmtOwner   │ FmtId     │ Purpose │ SensorType  │ reserved │ DataBlock │
/// │ 4 bytes      │ 1 byte  │ 1 byte   │ 2 bytes    │ 2 bytes   │ 1 byte  │ 4 bytes     │ to 45    │ N bytes   │
/// │ (LE u32) @0  │ @4      │ @5       │ (LE u16)@6 │ (LE u16)@8│ @11     │ (LE u32)@12 │          │ @45       │
/// └──────────────┴─────────┴──────────┴────────────┴───────────┴─────────┴─────────────┴──────────┴───────────┘
/// ```
///
/// All multi-byte values are little-endian. Total length always equals
/// 45 + data block length; an absent data block is a zero-length block,
/// never a hole in the buffer.
///
/// # Examples
///
/// ```
/// use oposwire_core::{BirRecord, BirDataType, BirPurpose, SensorType};
///
/// let record = BirRecord::new(
///     BirDataType::Processed,
///     BirPurpose::Verify,
///     SensorType::FINGERPRINT,
/// )
/// .with_data_block(vec![0xDE, 0xAD]);
///
/// let encoded = record.encode().unwrap();
/// assert_eq!(encoded.len(), 47);
///
/// let decoded = BirRecord::decode(&encoded).unwrap().unwrap();
/// assert_eq!(decoded, record);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BirRecord {
    /// Header version, major part only
    pub version_major: u8,

    /// Processing stage of the data block
    pub data_type: BirDataType,

    /// Registered owner of the template format
    pub format_owner: u16,

    /// Format identifier within the owner's namespace
    pub format_id: u16,

    /// What the template was captured for
    pub purpose: BirPurpose,

    /// Biometric factor mask
    pub sensor_type: SensorType,

    /// Biometric data block (template/sample bytes, possibly empty)
    pub data_block: Bytes,
}

impl BirRecord {
    /// Header size in bytes
    pub const HEADER_SIZE: usize = BIR_HEADER_SIZE;

    /// Create a record with an empty data block
    ///
    /// Header version defaults to 1; format owner and id to 0.
    pub fn new(data_type: BirDataType, purpose: BirPurpose, sensor_type: SensorType) -> Self {
        Self {
            version_major: 1,
            data_type,
            format_owner: 0,
            format_id: 0,
            purpose,
            sensor_type,
            data_block: Bytes::new(),
        }
    }

    /// Set the header version major
    pub fn with_version(mut self, major: u8) -> Self {
        self.version_major = major;
        self
    }

    /// Set the template format owner and id
    pub fn with_format(mut self, owner: u16, id: u16) -> Self {
        self.format_owner = owner;
        self.format_id = id;
        self
    }

    /// Attach a biometric data block
    pub fn with_data_block(mut self, data_block: impl Into<Bytes>) -> Self {
        self.data_block = data_block.into();
        self
    }

    /// Data block length in bytes
    pub fn data_block_len(&self) -> usize {
        self.data_block.len()
    }

    /// Total encoded size (header plus data block)
    pub fn total_len(&self) -> usize {
        Self::HEADER_SIZE + self.data_block.len()
    }

    /// Encode the record to its wire buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the total length does not fit the 32-bit
    /// header field.
    pub fn encode(&self) -> Result<BytesMut> {
        let total = self.total_len();
        if total > MAX_RECORD_SIZE {
            return Err(Error::RecordTooLarge {
                size: total,
                max: MAX_RECORD_SIZE,
            });
        }

        let mut buf = BytesMut::zeroed(total);

        LittleEndian::write_u32(
            &mut buf[layout::TOTAL_LENGTH..layout::TOTAL_LENGTH + 4],
            total as u32,
        );
        buf[layout::VERSION_MAJOR] = self.version_major;
        buf[layout::DATA_TYPE] = self.data_type.into();
        LittleEndian::write_u16(
            &mut buf[layout::FORMAT_OWNER..layout::FORMAT_OWNER + 2],
            self.format_owner,
        );
        LittleEndian::write_u16(
            &mut buf[layout::FORMAT_ID..layout::FORMAT_ID + 2],
            self.format_id,
        );
        buf[layout::PURPOSE] = self.purpose.into();
        LittleEndian::write_u32(
            &mut buf[layout::SENSOR_TYPE..layout::SENSOR_TYPE + 4],
            self.sensor_type.bits(),
        );
        buf[layout::DATA_BLOCK..].copy_from_slice(&self.data_block);

        Ok(buf)
    }

    /// Decode a record from its wire buffer
    ///
    /// A buffer shorter than the 45-byte header yields `Ok(None)`: an
    /// absent or invalid template is indistinguishable from none
    /// provided, matching the empty-property convention of the legacy
    /// interface.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The header declares more data block than the buffer holds
    /// - The data type or purpose tag is unknown
    pub fn decode(buf: &[u8]) -> Result<Option<Self>> {
        if buf.len() < Self::HEADER_SIZE {
            trace!(len = buf.len(), "Buffer below header size, no record");
            return Ok(None);
        }

        let total =
            LittleEndian::read_u32(&buf[layout::TOTAL_LENGTH..layout::TOTAL_LENGTH + 4]) as usize;

        // A header total below 45 means a zero-length data block
        let declared = total.saturating_sub(Self::HEADER_SIZE);
        let available = buf.len() - Self::HEADER_SIZE;
        if declared > available {
            return Err(Error::TruncatedDataBlock {
                declared,
                available,
            });
        }

        let data_type = BirDataType::try_from(buf[layout::DATA_TYPE])?;
        let purpose = BirPurpose::try_from(buf[layout::PURPOSE])?;
        let sensor_type = SensorType::from_bits_retain(LittleEndian::read_u32(
            &buf[layout::SENSOR_TYPE..layout::SENSOR_TYPE + 4],
        ));

        let record = Self {
            version_major: buf[layout::VERSION_MAJOR],
            data_type,
            format_owner: LittleEndian::read_u16(
                &buf[layout::FORMAT_OWNER..layout::FORMAT_OWNER + 2],
            ),
            format_id: LittleEndian::read_u16(&buf[layout::FORMAT_ID..layout::FORMAT_ID + 2]),
            purpose,
            sensor_type,
            data_block: Bytes::copy_from_slice(
                &buf[layout::DATA_BLOCK..layout::DATA_BLOCK + declared],
            ),
        };

        trace!(
            total = total,
            data_block_len = declared,
            "Decoded biometric record"
        );

        Ok(Some(record))
    }
}

impl fmt::Debug for BirRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BirRecord")
            .field("version_major", &self.version_major)
            .field("data_type", &self.data_type)
            .field("format_owner", &self.format_owner)
            .field("format_id", &self.format_id)
            .field("purpose", &self.purpose)
            .field("sensor_type", &self.sensor_type)
            .field("data_block_len", &self.data_block.len())
            .finish()
    }
}

impl fmt::Display for BirRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bir[{}](owner={}, id={}, block={})",
            self.data_type,
            self.format_owner,
            self.format_id,
            self.data_block.len()
        )
    }
}
