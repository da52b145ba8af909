//! Rotation in quarter turns.
//!
//! Arbitrary angles are snapped to the nearest multiple of 90 degrees and
//! applied as a sequence of clockwise quarter turns. No interpolation is
//! involved, so every rotation is lossless.
//!
//! # Algorithm
//!
//! One clockwise quarter turn of a `w x h` image produces an `h x w` image.
//! The source is walked column by column (left to right) and, within each
//! column, from the bottom row up; the pixels are appended to the output in
//! that order:
//! ```text
//! dst(col, row) = src(row, h - 1 - col)
//! ```
//! Each turn materializes a complete intermediate bitmap before the next
//! one starts.

use log::debug;

use crate::bitmap::{Bitmap, BitmapError, CHANNELS};

/// Number of clockwise quarter turns for an angle in degrees.
///
/// The angle is rounded to the nearest multiple of 90 (halves round up,
/// toward positive infinity) and reduced into `0..4`.
///
/// # Example
///
/// ```
/// use rasterkit_core::transform::quarter_turns;
///
/// assert_eq!(quarter_turns(90.0), Some(1));
/// assert_eq!(quarter_turns(-90.0), Some(3));
/// assert_eq!(quarter_turns(44.0), Some(0));
/// assert_eq!(quarter_turns(360.0), Some(0));
/// ```
pub fn quarter_turns(angle_degrees: f64) -> Option<u8> {
    if !angle_degrees.is_finite() {
        return None;
    }
    let steps = (angle_degrees / 90.0 + 0.5).floor();
    Some(steps.rem_euclid(4.0) as u8)
}

/// Rotate a bitmap clockwise by `angle_degrees`, rounded to a quarter turn.
///
/// Width and height swap for odd numbers of quarter turns.
///
/// # Errors
///
/// Returns `BitmapError::InvalidArgument` if the angle is NaN or infinite.
pub fn apply_rotation(bitmap: &mut Bitmap, angle_degrees: f64) -> Result<(), BitmapError> {
    let turns = quarter_turns(angle_degrees).ok_or_else(|| {
        BitmapError::InvalidArgument(format!("rotation angle must be finite, got {angle_degrees}"))
    })?;

    debug!(
        "rotate {}x{} by {} degrees ({} quarter turns)",
        bitmap.width(),
        bitmap.height(),
        angle_degrees,
        turns
    );

    for _ in 0..turns {
        rotate_quarter_cw(bitmap);
    }
    Ok(())
}

/// One clockwise quarter turn.
fn rotate_quarter_cw(bitmap: &mut Bitmap) {
    let (width, height) = bitmap.dimensions();
    let src = bitmap.data();
    let mut output = Vec::with_capacity(src.len());

    for x in 0..width as usize {
        for y in (0..height as usize).rev() {
            let idx = (y * width as usize + x) * CHANNELS;
            output.extend_from_slice(&src[idx..idx + CHANNELS]);
        }
    }

    bitmap.replace_unchecked(height, width, output);
}
