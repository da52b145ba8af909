//! WASM bindings for colour filters and blurs.

use crate::types::{to_js_error, JsBitmap};
use log::debug;
use rasterkit_core::{blur, filter};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl JsBitmap {
    /// Invert the colour channels.
    pub fn invert(&mut self) {
        filter::apply_invert(self.bitmap_mut());
    }

    /// Replace each pixel's colour with the average of its channels.
    pub fn greyscale(&mut self) {
        filter::apply_greyscale(self.bitmap_mut());
    }

    /// Apply a sepia tone.
    pub fn sepia(&mut self) {
        filter::apply_sepia(self.bitmap_mut());
    }

    /// Multiply alpha by `factor` (0 to 1).
    pub fn opacity(&mut self, factor: f64) -> Result<(), JsValue> {
        filter::apply_opacity(self.bitmap_mut(), factor).map_err(to_js_error)
    }

    /// Fast box blur approximation, radius 1 to 254.
    pub fn blur(&mut self, radius: u32) -> Result<(), JsValue> {
        blur::fast_blur(self.bitmap_mut(), radius).map_err(to_js_error)
    }

    /// Exact Gaussian blur, radius 1 to 254.
    ///
    /// `progress`, when given, is called once per row with the percentage
    /// of rows finished. Exceptions thrown by it are logged at debug level
    /// and otherwise ignored.
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// bitmap.gaussian(3, (percent) => bar.value = percent);
    /// ```
    pub fn gaussian(
        &mut self,
        radius: u32,
        progress: Option<js_sys::Function>,
    ) -> Result<(), JsValue> {
        let result = match progress {
            Some(callback) => {
                let this = JsValue::NULL;
                blur::gaussian_blur_with_progress(self.bitmap_mut(), radius, |percent| {
                    if let Err(err) = callback.call1(&this, &JsValue::from(percent)) {
                        debug!("gaussian progress callback threw at {}%: {:?}", percent, err);
                    }
                })
            }
            None => blur::gaussian_blur(self.bitmap_mut(), radius),
        };
        result.map_err(to_js_error)
    }
}
