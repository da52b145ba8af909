//! Alpha scaling.

use crate::bitmap::{Bitmap, BitmapError};

/// Multiply every pixel's alpha by `factor`.
///
/// Formula: `A = floor(A * factor)`; colour channels are untouched.
///
/// # Errors
///
/// Returns `BitmapError::InvalidOpacity` if `factor` is NaN or outside
/// `[0, 1]`. The bitmap is unchanged on error.
pub fn apply_opacity(bitmap: &mut Bitmap, factor: f64) -> Result<(), BitmapError> {
    if !(0.0..=1.0).contains(&factor) {
        return Err(BitmapError::InvalidOpacity(factor));
    }

    // Fast path: fully opaque factor
    if factor == 1.0 {
        return Ok(());
    }

    bitmap.scan_all_mut(|data, _, _, idx| {
        data[idx + 3] = (data[idx + 3] as f64 * factor) as u8;
    });
    Ok(())
}
