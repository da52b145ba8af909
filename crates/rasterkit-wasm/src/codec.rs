//! Image decoding and encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode, encode } from '@rasterkit/wasm';
//!
//! const bitmap = decode(new Uint8Array(await file.arrayBuffer()), file.type);
//! bitmap.greyscale();
//! const jpeg = encode(bitmap, { mime: 'image/jpeg', quality: 85 });
//! ```

use crate::types::{to_js_error, JsBitmap};
use rasterkit_core::codec::{self, EncodeOptions, ImageFormat, Quality};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Encode options as passed from JavaScript.
///
/// Every field is optional; missing fields fall back to PNG at quality 100.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EncodeOptionsJs {
    /// Output MIME type (`image/png` or `image/jpeg`)
    pub mime: Option<String>,
    /// JPEG quality (0 to 100)
    pub quality: Option<u32>,
}

impl EncodeOptionsJs {
    /// Validate into core encode options.
    pub(crate) fn into_options(self) -> Result<EncodeOptions, codec::CodecError> {
        let format = match self.mime.as_deref() {
            Some(mime) => ImageFormat::from_mime(mime)?,
            None => ImageFormat::default(),
        };
        let quality = match self.quality {
            Some(value) => Quality::new(value)?,
            None => Quality::default(),
        };
        Ok(EncodeOptions { format, quality })
    }
}

/// Decode PNG or JPEG bytes into a bitmap.
///
/// # Arguments
///
/// * `bytes` - Encoded image bytes
/// * `mime` - MIME type of the bytes; detected from the content when omitted
///
/// # Errors
///
/// Returns an error if the MIME type is unsupported or the bytes are not a
/// valid image.
#[wasm_bindgen]
pub fn decode(bytes: &[u8], mime: Option<String>) -> Result<JsBitmap, JsValue> {
    let bitmap = match mime {
        Some(mime) => ImageFormat::from_mime(&mime)
            .and_then(|format| codec::decode(bytes, format))
            .map_err(to_js_error)?,
        None => codec::decode_guessed(bytes).map_err(to_js_error)?,
    };
    Ok(JsBitmap::from_bitmap(bitmap))
}

/// Encode a bitmap to PNG or JPEG bytes.
///
/// # Arguments
///
/// * `bitmap` - Bitmap to encode
/// * `options` - `{ mime?: string, quality?: number }`, or `undefined` for PNG
#[wasm_bindgen]
pub fn encode(bitmap: &JsBitmap, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options: EncodeOptionsJs = if options.is_undefined() || options.is_null() {
        EncodeOptionsJs::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid encode options: {}", e)))?
    };
    let options = options.into_options().map_err(to_js_error)?;

    codec::encode(bitmap.bitmap(), &options).map_err(to_js_error)
}
