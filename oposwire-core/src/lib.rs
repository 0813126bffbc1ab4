//! # oposwire-core
//!
//! Codec layer for legacy point-of-sale control objects.
//!
//! This crate provides the low-level conversion primitives:
//! - Byte/string transport conversion under the session's binary-conversion mode
//! - Biometric information record (BIR) encoding/decoding
//! - Reference population encoding
//! - Raw sensor frame reconstruction
//! - Comma-delimited record conversion (statistics, cash counts)

pub mod constants;
pub mod delimited;
pub mod error;
pub mod image;
pub mod population;
pub mod record;
pub mod tags;
pub mod transport;

pub use error::{Error, Result};
pub use record::BirRecord;
pub use tags::{BirDataType, BirPurpose, SensorType};
pub use transport::BinaryConversion;

/// BIR header size in bytes
pub const BIR_HEADER_SIZE: usize = constants::BIR_HEADER_SIZE;

/// Pixel row alignment in bytes
pub const ROW_ALIGNMENT: usize = constants::ROW_ALIGNMENT;
