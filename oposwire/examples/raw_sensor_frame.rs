//! Rebuild a raw sensor frame from its transport string

use oposwire::{image, DeviceCodec};

fn main() -> oposwire::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let codec = DeviceCodec::new();

    // Synthesize the property value a 64x32 grayscale sensor would report
    let (width, height, color, bpp) = (64u32, 32u32, 8u32, 8u32);
    let stride = image::row_stride(width, bpp);
    let frame: Vec<u8> = (0..stride * height as usize).map(|i| (i % 251) as u8).collect();
    let property = codec.encode_bytes(&frame);

    let image = codec.decode_image(&property, width, height, color, bpp)?;
    println!("✓ {}", image);
    println!("✓ Complete frame: {}", image.is_complete());

    Ok(())
}
