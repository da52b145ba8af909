//! PNG and JPEG encoding.
//!
//! PNG output is lossless RGBA8. JPEG has no alpha channel, so the encoder
//! drops it and writes the RGB channels as they are (no compositing against a
//! background).

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::debug;

use super::{CodecError, EncodeOptions, ImageFormat};
use crate::bitmap::{Bitmap, CHANNELS};

/// Encode a bitmap into PNG or JPEG bytes.
///
/// # Example
///
/// ```
/// use rasterkit_core::codec::{encode, EncodeOptions};
/// use rasterkit_core::Bitmap;
///
/// let bmp = Bitmap::filled(10, 10, [128, 128, 128, 255]).unwrap();
/// let png = encode(&bmp, &EncodeOptions::png()).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode(bitmap: &Bitmap, options: &EncodeOptions) -> Result<Vec<u8>, CodecError> {
    let (width, height) = bitmap.dimensions();
    debug!(
        "encode {}x{} as {} (quality {})",
        width,
        height,
        options.format.mime(),
        options.quality.get()
    );

    let mut buffer = Cursor::new(Vec::new());
    match options.format {
        ImageFormat::Png => PngEncoder::new(&mut buffer)
            .write_image(bitmap.data(), width, height, ExtendedColorType::Rgba8)
            .map_err(|e| CodecError::Encode(e.to_string()))?,
        ImageFormat::Jpeg => {
            // The encoder's lowest setting is 1
            let quality = options.quality.get().max(1);
            let rgb = strip_alpha(bitmap.data());
            JpegEncoder::new_with_quality(&mut buffer, quality)
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(|e| CodecError::Encode(e.to_string()))?
        }
    }

    Ok(buffer.into_inner())
}

fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / CHANNELS * 3);
    for px in rgba.chunks_exact(CHANNELS) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
