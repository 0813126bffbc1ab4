//! BIR header tag definitions

use std::fmt;

use crate::error::{Error, Result};

/// Processing stage of the biometric data block
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BirDataType {
    /// Unprocessed sample straight from the sensor
    Raw = 1,

    /// Partially processed, not yet matchable
    Intermediate = 2,

    /// Fully processed template, ready for matching
    Processed = 4,
}

impl BirDataType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::Intermediate => "INTERMEDIATE",
            Self::Processed => "PROCESSED",
        }
    }
}

impl From<BirDataType> for u8 {
    fn from(tag: BirDataType) -> u8 {
        tag as u8
    }
}

impl TryFrom<u8> for BirDataType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Raw),
            2 => Ok(Self::Intermediate),
            4 => Ok(Self::Processed),
            _ => Err(Error::UnknownDataType(value)),
        }
    }
}

impl fmt::Display for BirDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), *self as u8)
    }
}

/// What the template was captured for
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BirPurpose {
    Verify = 1,
    Identify = 2,
    Enroll = 3,
    EnrollForVerification = 4,
    EnrollForIdentification = 5,
    Audit = 6,
}

impl From<BirPurpose> for u8 {
    fn from(tag: BirPurpose) -> u8 {
        tag as u8
    }
}

impl TryFrom<u8> for BirPurpose {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Verify),
            2 => Ok(Self::Identify),
            3 => Ok(Self::Enroll),
            4 => Ok(Self::EnrollForVerification),
            5 => Ok(Self::EnrollForIdentification),
            6 => Ok(Self::Audit),
            _ => Err(Error::UnknownPurpose(value)),
        }
    }
}

bitflags::bitflags! {
    /// Biometric factor mask
    ///
    /// A single captured template usually carries one factor, but the
    /// field is a mask and devices may set vendor bits above the named
    /// range. Decoding retains unknown bits exactly so a re-encode is
    /// byte-identical.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SensorType: u32 {
        const FACIAL_FEATURES = 1;
        const VOICE = 1 << 1;
        const FINGERPRINT = 1 << 2;
        const IRIS = 1 << 3;
        const RETINA = 1 << 4;
        const HAND_GEOMETRY = 1 << 5;
        const SIGNATURE_DYNAMICS = 1 << 6;
        const KEYSTROKE_DYNAMICS = 1 << 7;
        const LIP_MOVEMENT = 1 << 8;
        const THERMAL_FACE_IMAGE = 1 << 9;
        const THERMAL_HAND_IMAGE = 1 << 10;
        const GAIT = 1 << 11;
        const PASSWORD = 1 << 12;
    }
}
