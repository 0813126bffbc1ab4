//! Encode a reference template the way an enroll-capture call sends it

use oposwire::{BinaryConversion, BirDataType, BirPurpose, BirRecord, DeviceCodec, SensorType};

fn main() -> oposwire::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // Devices default to byte-per-character; nibble survives more marshallers
    let codec = DeviceCodec::with_conversion(BinaryConversion::Nibble);

    let reference = BirRecord::new(
        BirDataType::Processed,
        BirPurpose::Enroll,
        SensorType::FINGERPRINT,
    )
    .with_format(0x0012, 0x0001)
    .with_data_block(vec![0x5A; 128]);

    println!("Reference: {}", reference);

    let text = codec.encode_bir(Some(&reference))?.unwrap();
    println!("✓ Encoded {} record bytes into {} characters", reference.total_len(), text.len());

    let decoded = codec.decode_bir(&text)?.unwrap();
    println!("✓ Decoded back: {}", decoded);

    let population = codec.encode_bir_population(&[Some(reference), None, Some(decoded)]);
    println!("✓ Population of 3 slots encoded to {} strings", population.len());

    Ok(())
}
