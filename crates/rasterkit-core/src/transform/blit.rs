//! Copying a rectangle of colour from one bitmap into another.

use crate::bitmap::{Bitmap, BitmapError};

/// Copy the RGB channels of a rectangle of `src` into `dst`.
///
/// The `width x height` rectangle at `(src_x, src_y)` in `src` lands at
/// `(dst_x, dst_y)` in `dst`. Only red, green and blue are copied; the
/// destination keeps its own alpha. Destination offsets are computed from
/// `dst`'s own width, so the two bitmaps may have any shapes.
///
/// # Errors
///
/// Returns `BitmapError::OutOfBounds` if either rectangle leaves its bitmap.
/// Both rectangles are checked before anything is written.
#[allow(clippy::too_many_arguments)]
pub fn blit(
    src: &Bitmap,
    dst: &mut Bitmap,
    src_x: u32,
    src_y: u32,
    width: u32,
    height: u32,
    dst_x: u32,
    dst_y: u32,
) -> Result<(), BitmapError> {
    src.check_region(src_x, src_y, width, height)?;
    dst.check_region(dst_x, dst_y, width, height)?;

    let src_data = src.data();
    let dst_width = dst.width() as usize;
    let dst_data = dst.data_mut();

    src.scan(src_x, src_y, width, height, |x, y, idx| {
        let tx = (dst_x + (x - src_x)) as usize;
        let ty = (dst_y + (y - src_y)) as usize;
        let dst_idx = (ty * dst_width + tx) * 4;
        dst_data[dst_idx..dst_idx + 3].copy_from_slice(&src_data[idx..idx + 3]);
    })
}
