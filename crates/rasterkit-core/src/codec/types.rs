//! Core types for encoding and decoding.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bitmap::BitmapError;

/// MIME type of PNG images.
pub const MIME_PNG: &str = "image/png";

/// MIME type of JPEG images.
pub const MIME_JPEG: &str = "image/jpeg";

/// Error types for codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The MIME type or file extension is not PNG or JPEG.
    #[error("Unsupported MIME type: {0}")]
    UnsupportedFormat(String),

    /// The bytes could not be decoded.
    #[error("Corrupted or incomplete image data: {0}")]
    Decode(String),

    /// Encoding failed.
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// I/O error during file reading or writing.
    #[error("I/O error: {0}")]
    Io(String),

    /// The decoded pixels don't form a valid bitmap.
    #[error(transparent)]
    Bitmap(#[from] BitmapError),
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}

/// Supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless, keeps alpha.
    #[default]
    Png,
    /// Lossy, drops alpha.
    Jpeg,
}

impl ImageFormat {
    /// Look up a format by MIME type (case-insensitive).
    pub fn from_mime(mime: &str) -> Result<Self, CodecError> {
        match mime.trim().to_ascii_lowercase().as_str() {
            MIME_PNG => Ok(ImageFormat::Png),
            MIME_JPEG | "image/jpg" => Ok(ImageFormat::Jpeg),
            _ => Err(CodecError::UnsupportedFormat(mime.to_string())),
        }
    }

    /// Look up a format by file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(ImageFormat::Png),
            Some("jpg" | "jpeg") => Ok(ImageFormat::Jpeg),
            _ => Err(CodecError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// The format's MIME type.
    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Png => MIME_PNG,
            ImageFormat::Jpeg => MIME_JPEG,
        }
    }

    pub(crate) fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// JPEG quality, 0 to 100.
///
/// Only the JPEG encoder reads it. Defaults to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quality(u8);

impl Quality {
    /// Highest quality.
    pub const MAX: Quality = Quality(100);

    /// Create a quality setting.
    ///
    /// # Errors
    ///
    /// Returns `BitmapError::InvalidQuality` if `value` is above 100.
    pub fn new(value: u32) -> Result<Self, BitmapError> {
        if value > 100 {
            return Err(BitmapError::InvalidQuality(value));
        }
        Ok(Quality(value as u8))
    }

    /// The raw value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Quality::MAX
    }
}

impl TryFrom<u32> for Quality {
    type Error = BitmapError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Quality::new(value)
    }
}

impl From<Quality> for u32 {
    fn from(quality: Quality) -> Self {
        quality.0 as u32
    }
}

/// Settings for [`encode`](super::encode).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Output container format.
    pub format: ImageFormat,
    /// JPEG quality; ignored for PNG.
    pub quality: Quality,
}

impl EncodeOptions {
    /// PNG output.
    pub fn png() -> Self {
        Self {
            format: ImageFormat::Png,
            quality: Quality::default(),
        }
    }

    /// JPEG output at the given quality.
    pub fn jpeg(quality: Quality) -> Self {
        Self {
            format: ImageFormat::Jpeg,
            quality,
        }
    }
}
