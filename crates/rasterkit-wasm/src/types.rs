//! WASM-compatible wrapper around the core bitmap.

use std::fmt::Display;

use rasterkit_core::Bitmap;
use wasm_bindgen::prelude::*;

/// An RGBA8 bitmap handle for JavaScript.
///
/// The pixels stay in WASM memory; every operation mutates the handle in
/// place. `pixels()` copies the buffer out as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a bitmap from RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Returns an error if a dimension is zero or `pixels` is not exactly
    /// `width * height * 4` bytes long.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsBitmap, JsValue> {
        Bitmap::from_raw(width, height, pixels)
            .map(JsBitmap::from_bitmap)
            .map_err(to_js_error)
    }

    /// Create a bitmap filled with one colour.
    pub fn filled(width: u32, height: u32, r: u8, g: u8, b: u8, a: u8) -> Result<JsBitmap, JsValue> {
        Bitmap::filled(width, height, [r, g, b, a])
            .map(JsBitmap::from_bitmap)
            .map_err(to_js_error)
    }

    /// Get the width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.data().len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.data().to_vec()
    }
}

impl JsBitmap {
    pub(crate) fn from_bitmap(inner: Bitmap) -> Self {
        Self { inner }
    }

    pub(crate) fn bitmap(&self) -> &Bitmap {
        &self.inner
    }

    pub(crate) fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.inner
    }
}

/// Convert a core error into the string value thrown to JavaScript.
pub(crate) fn to_js_error<E: Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_bitmap_accessors() {
        let pixels: Vec<u8> = (0..2 * 3 * 4).map(|i| i as u8).collect();
        let bmp = JsBitmap::new(2, 3, pixels.clone()).unwrap();

        assert_eq!(bmp.width(), 2);
        assert_eq!(bmp.height(), 3);
        assert_eq!(bmp.byte_length(), 24);
        assert_eq!(bmp.pixels(), pixels);
    }

    #[test]
    fn test_js_bitmap_filled() {
        let bmp = JsBitmap::filled(2, 2, 1, 2, 3, 4).unwrap();
        assert_eq!(bmp.pixels(), [1, 2, 3, 4].repeat(4));
    }

    #[test]
    fn test_pixels_is_a_copy() {
        let bmp = JsBitmap::filled(1, 1, 9, 9, 9, 9).unwrap();
        let mut copy = bmp.pixels();
        copy[0] = 0;
        assert_eq!(bmp.bitmap().get_pixel(0, 0), Some([9, 9, 9, 9]));
    }
}
