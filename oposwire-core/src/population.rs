//! Reference population encoding
//!
//! Identify/verify calls hand the legacy control a whole population of
//! reference templates as an array of transport strings. Slots with
//! nothing to send and records that fail to encode are dropped, so the
//! output can be shorter than the input.

use tracing::{trace, warn};

use crate::{
    record::BirRecord,
    transport::{self, BinaryConversion},
};

/// Encode a population of records into transport strings
///
/// Elements are processed in order; order is preserved in the output.
///
/// # Examples
///
/// ```
/// use oposwire_core::{
///     population, BinaryConversion, BirDataType, BirPurpose, BirRecord, SensorType,
/// };
///
/// let reference = BirRecord::new(
///     BirDataType::Processed,
///     BirPurpose::Identify,
///     SensorType::FINGERPRINT,
/// );
///
/// let strings = population::encode_bir_population(
///     &[Some(reference.clone()), None, Some(reference)],
///     BinaryConversion::Nibble,
/// );
/// assert_eq!(strings.len(), 2);
/// ```
pub fn encode_bir_population(
    records: &[Option<BirRecord>],
    conversion: BinaryConversion,
) -> Vec<String> {
    let mut strings = Vec::with_capacity(records.len());

    for (index, slot) in records.iter().enumerate() {
        let Some(record) = slot else {
            trace!(index = index, "Skipping empty population slot");
            continue;
        };

        match record.encode() {
            Ok(buf) => {
                let text = transport::encode_bytes(&buf, conversion);
                if text.is_empty() {
                    continue;
                }
                strings.push(text);
            }
            Err(err) => {
                warn!(index = index, error = %err, "Dropping unencodable population record");
            }
        }
    }

    strings
}
