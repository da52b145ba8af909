//! Cropping to a pixel rectangle.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left pixel
//! - the rectangle is `[x, x + width) × [y, y + height)` in pixels
//!
//! # Example
//!
//! ```ignore
//! // Keep the 50x50 block starting at (10, 20)
//! apply_crop(&mut bitmap, 10, 20, 50, 50)?;
//! ```

use crate::bitmap::{Bitmap, BitmapError, CHANNELS};

/// Crop a bitmap to the given rectangle.
///
/// The rectangle is scanned in row-major order into a new buffer, which then
/// replaces the bitmap's buffer; the new dimensions are `width x height`.
///
/// # Arguments
///
/// * `bitmap` - Bitmap to crop in place
/// * `x` - Left edge of the crop region
/// * `y` - Top edge of the crop region
/// * `width` - Width of the crop region
/// * `height` - Height of the crop region
///
/// # Errors
///
/// - `BitmapError::InvalidDimensions` if `width` or `height` is zero
/// - `BitmapError::OutOfBounds` if the rectangle leaves the bitmap
///
/// The bitmap is unchanged on error.
pub fn apply_crop(
    bitmap: &mut Bitmap,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<(), BitmapError> {
    let len = crate::bitmap::buffer_len(width, height)?;

    // Fast path: full crop is a no-op
    if x == 0 && y == 0 && (width, height) == bitmap.dimensions() {
        return Ok(());
    }

    let mut output = Vec::with_capacity(len);
    let src = bitmap.data();
    bitmap.scan(x, y, width, height, |_, _, idx| {
        output.extend_from_slice(&src[idx..idx + CHANNELS]);
    })?;

    bitmap.replace_unchecked(width, height, output);
    Ok(())
}
