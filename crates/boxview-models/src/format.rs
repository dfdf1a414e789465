//! Upload format definitions.
//!
//! The upload control only accepts JPEG and PNG containers; everything else
//! is rejected before the remote call is made.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// File extensions accepted by the upload control.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Container format of an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadFormat {
    Jpeg,
    Png,
}

impl UploadFormat {
    /// Returns the format name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFormat::Jpeg => "jpeg",
            UploadFormat::Png => "png",
        }
    }

    /// Match a file name against the accepted extensions.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext)?;
        ext.parse().ok()
    }

    /// Match a MIME type reported by the browser.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(UploadFormat::Jpeg),
            "image/png" => Some(UploadFormat::Png),
            _ => None,
        }
    }
}

impl fmt::Display for UploadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UploadFormat {
    type Err = UploadFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(UploadFormat::Jpeg),
            "png" => Ok(UploadFormat::Png),
            _ => Err(UploadFormatParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unsupported image format: {0}")]
pub struct UploadFormatParseError(String);
