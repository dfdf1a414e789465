//! Image transport codec.
//!
//! The remote prediction service takes base64 text over JSON, so every
//! upload is decoded, re-encoded to JPEG in memory, and base64-encoded
//! before it crosses the wire. The annotated result comes back the same
//! way and is base64-decoded for display.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageOutputFormat};
use thiserror::Error;

/// JPEG quality used for the transport re-encode.
const JPEG_QUALITY: u8 = 85;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Decode uploaded bytes into an image, whatever the container.
pub fn load_image(bytes: &[u8]) -> CodecResult<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Re-encode an image as JPEG in memory.
pub fn to_jpeg(image: &DynamicImage) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Jpeg(JPEG_QUALITY))?;
    Ok(buf)
}

/// Base64-encode raw bytes with the standard alphabet.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a base64 string back into raw bytes.
pub fn decode_base64(payload: &str) -> CodecResult<Vec<u8>> {
    Ok(STANDARD.decode(payload.trim())?)
}

/// Full upload-to-wire conversion: decode, re-encode JPEG, base64.
pub fn transport_payload(bytes: &[u8]) -> CodecResult<String> {
    let image = load_image(bytes)?;
    let jpeg = to_jpeg(&image)?;
    Ok(encode_base64(&jpeg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn test_image(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 31 % 256) as u8, (y * 17 % 256) as u8, 128])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_base64_round_trip() {
        let bytes = vec![0u8, 1, 2, 254, 255];
        let encoded = encode_base64(&bytes);
        assert_eq!(decode_base64(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_decode_base64_rejects_garbage() {
        assert!(decode_base64("not base64!!!").is_err());
    }

    #[test]
    fn test_transport_round_trip_preserves_dimensions() {
        let original = test_image(64, 48);
        let mut png_bytes = Vec::new();
        original
            .write_to(&mut Cursor::new(&mut png_bytes), ImageOutputFormat::Png)
            .unwrap();

        let payload = transport_payload(&png_bytes).unwrap();
        let wire_bytes = decode_base64(&payload).unwrap();
        let decoded = load_image(&wire_bytes).unwrap();

        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 48);
    }

    #[test]
    fn test_transport_payload_is_jpeg() {
        let original = test_image(16, 16);
        let jpeg = to_jpeg(&original).unwrap();
        // JPEG SOI marker
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let mut png_bytes = Vec::new();
        original
            .write_to(&mut Cursor::new(&mut png_bytes), ImageOutputFormat::Png)
            .unwrap();
        let wire = decode_base64(&transport_payload(&png_bytes).unwrap()).unwrap();
        assert_eq!(&wire[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_load_image_rejects_non_image() {
        assert!(load_image(b"definitely not an image").is_err());
    }
}
