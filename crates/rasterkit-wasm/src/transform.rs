//! WASM bindings for geometric transforms and resizing.

use crate::types::{to_js_error, JsBitmap};
use rasterkit_core::{resize as core_resize, transform};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl JsBitmap {
    /// Crop to the rectangle at `(x, y)` of size `width x height`.
    ///
    /// # Errors
    /// Returns an error if the rectangle is empty or leaves the bitmap.
    pub fn crop(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<(), JsValue> {
        transform::apply_crop(self.bitmap_mut(), x, y, width, height).map_err(to_js_error)
    }

    /// Mirror horizontally and/or vertically.
    pub fn flip(&mut self, horizontal: bool, vertical: bool) {
        transform::apply_flip(self.bitmap_mut(), horizontal, vertical);
    }

    /// Rotate clockwise by a multiple of 90 degrees.
    ///
    /// The angle is rounded to the nearest quarter turn; negative angles
    /// rotate counter-clockwise.
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// bitmap.rotate(90);
    /// console.log(bitmap.width, bitmap.height); // swapped
    /// ```
    pub fn rotate(&mut self, degrees: f64) -> Result<(), JsValue> {
        transform::apply_rotation(self.bitmap_mut(), degrees).map_err(to_js_error)
    }

    /// Copy the RGB channels of a rectangle of this bitmap into `target`.
    ///
    /// The target's alpha channel is left untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_into(
        &self,
        target: &mut JsBitmap,
        src_x: u32,
        src_y: u32,
        width: u32,
        height: u32,
        dst_x: u32,
        dst_y: u32,
    ) -> Result<(), JsValue> {
        transform::blit(
            self.bitmap(),
            target.bitmap_mut(),
            src_x,
            src_y,
            width,
            height,
            dst_x,
            dst_y,
        )
        .map_err(to_js_error)
    }

    /// Resize to `width x height` with bilinear resampling.
    ///
    /// Fractional sizes are rounded to the nearest pixel.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        core_resize::resize(self.bitmap_mut(), width, height).map_err(to_js_error)
    }

    /// Scale both dimensions by `factor`.
    pub fn scale(&mut self, factor: f64) -> Result<(), JsValue> {
        core_resize::scale(self.bitmap_mut(), factor).map_err(to_js_error)
    }
}
