//! PNG and JPEG decoding into RGBA8 bitmaps.

use std::io::Cursor;

use image::ImageReader;
use log::debug;

use super::{CodecError, ImageFormat};
use crate::bitmap::Bitmap;

/// Decode PNG or JPEG bytes of a known format.
///
/// Any colour type the decoder produces is converted to RGBA8; JPEG images
/// come back fully opaque.
///
/// # Errors
///
/// Returns `CodecError::Decode` if the bytes are not a valid image of
/// `format`.
pub fn decode(bytes: &[u8], format: ImageFormat) -> Result<Bitmap, CodecError> {
    let img = image::load_from_memory_with_format(bytes, format.to_image_format())
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    into_bitmap(img)
}

/// Decode PNG or JPEG bytes, detecting the format from the content.
///
/// # Errors
///
/// Returns `CodecError::UnsupportedFormat` if the bytes are neither PNG nor
/// JPEG, and `CodecError::Decode` if they are corrupted.
pub fn decode_guessed(bytes: &[u8]) -> Result<Bitmap, CodecError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::Decode(e.to_string()))?;

    let format = match reader.format() {
        Some(image::ImageFormat::Png) => ImageFormat::Png,
        Some(image::ImageFormat::Jpeg) => ImageFormat::Jpeg,
        Some(other) => return Err(CodecError::UnsupportedFormat(format!("{other:?}"))),
        None => return Err(CodecError::UnsupportedFormat("unknown".to_string())),
    };
    debug!("decode: detected {}", format.mime());

    let img = reader
        .decode()
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    into_bitmap(img)
}

fn into_bitmap(img: image::DynamicImage) -> Result<Bitmap, CodecError> {
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    debug!("decoded {}x{} image", width, height);
    Ok(Bitmap::from_raw(width, height, rgba.into_raw())?)
}
