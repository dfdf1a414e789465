//! Shared data models for the BoxView detection UI.
//!
//! This crate provides:
//! - Upload format definitions (the jpg/jpeg/png filter)
//! - The image transport codec (JPEG re-encode + base64)

pub mod codec;
pub mod format;

// Re-export common types
pub use codec::{
    decode_base64, encode_base64, load_image, to_jpeg, transport_payload, CodecError, CodecResult,
};
pub use format::{UploadFormat, UploadFormatParseError, ACCEPTED_EXTENSIONS};
