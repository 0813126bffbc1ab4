//! Type definitions for oposwire

pub mod cash;
pub mod error;
pub mod sensor_image;
pub mod statistic;
pub mod version;

pub use cash::{CashCount, CashCountKind};
pub use error::{Error, Result};
pub use sensor_image::{PixelFormat, SensorImage};
pub use statistic::Statistic;
pub use version::UposVersion;
