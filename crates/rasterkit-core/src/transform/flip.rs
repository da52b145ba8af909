//! Mirroring along the vertical and/or horizontal axis.

use crate::bitmap::{Bitmap, CHANNELS};

/// Flip a bitmap horizontally and/or vertically.
///
/// Each destination pixel `(x, y)` is read from its mirror
/// `(width - 1 - x, y)` and/or `(x, height - 1 - y)` in the untouched source
/// buffer, and written into a fresh buffer that then replaces the old one.
/// The outermost column (row) therefore swaps with the opposite edge, and
/// flipping twice along the same axis restores the original image.
///
/// # Arguments
///
/// * `bitmap` - Bitmap to flip in place
/// * `horizontal` - Mirror left/right
/// * `vertical` - Mirror top/bottom
pub fn apply_flip(bitmap: &mut Bitmap, horizontal: bool, vertical: bool) {
    // Fast path: nothing to mirror
    if !horizontal && !vertical {
        return;
    }

    let (width, height) = bitmap.dimensions();
    let src = bitmap.data();
    let mut output = Vec::with_capacity(src.len());

    for y in 0..height {
        let src_y = if vertical { height - 1 - y } else { y };
        let row_start = src_y as usize * width as usize;
        for x in 0..width {
            let src_x = if horizontal { width - 1 - x } else { x };
            let idx = (row_start + src_x as usize) * CHANNELS;
            output.extend_from_slice(&src[idx..idx + CHANNELS]);
        }
    }

    bitmap.replace_unchecked(width, height, output);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_bitmap() -> impl Strategy<Value = Bitmap> {
        (1u32..=24, 1u32..=24).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<u8>(), (w * h * 4) as usize)
                .prop_map(move |data| Bitmap::from_raw(w, h, data).unwrap())
        })
    }

    proptest! {
        /// Property: Flipping twice along the same axes restores the bitmap.
        #[test]
        fn prop_flip_is_involution(
            bmp in arbitrary_bitmap(),
            horizontal in any::<bool>(),
            vertical in any::<bool>(),
        ) {
            let mut flipped = bmp.clone();
            apply_flip(&mut flipped, horizontal, vertical);
            apply_flip(&mut flipped, horizontal, vertical);
            prop_assert_eq!(flipped, bmp);
        }

        /// Property: Flipping keeps dimensions and buffer length.
        #[test]
        fn prop_flip_preserves_shape(
            bmp in arbitrary_bitmap(),
            horizontal in any::<bool>(),
            vertical in any::<bool>(),
        ) {
            let mut flipped = bmp.clone();
            apply_flip(&mut flipped, horizontal, vertical);
            prop_assert_eq!(flipped.dimensions(), bmp.dimensions());
            prop_assert_eq!(flipped.data().len(), bmp.data().len());
        }
    }
}
