//! Rasterkit Core - In-memory RGBA bitmap engine
//!
//! This crate owns an RGBA8 pixel buffer and provides the operations that
//! rewrite it: geometric transforms, per-pixel colour filters, Gaussian and
//! fast box blur, resizing, and PNG/JPEG encoding and decoding.
//!
//! Every operation works on a [`Bitmap`] in place. Arguments are validated
//! before any pixel is touched, so a call that returns an error leaves the
//! bitmap exactly as it was.
//!
//! # Example
//!
//! ```ignore
//! use rasterkit_core::{apply_greyscale, apply_rotation, fast_blur, Bitmap};
//!
//! let mut bmp = Bitmap::filled(64, 32, [200, 120, 40, 255])?;
//! apply_rotation(&mut bmp, 90.0)?;
//! apply_greyscale(&mut bmp);
//! fast_blur(&mut bmp, 3)?;
//! assert_eq!(bmp.dimensions(), (32, 64));
//! ```

pub mod bitmap;
pub mod blur;
pub mod codec;
pub mod filter;
pub mod resize;
pub mod transform;

pub use bitmap::{Bitmap, BitmapError, CHANNELS};
pub use blur::{
    fast_blur, gaussian_blur, gaussian_blur_with_progress, MAX_FAST_BLUR_RADIUS, MAX_GAUSSIAN_RADIUS,
};
pub use codec::{CodecError, EncodeOptions, ImageFormat, Quality};
pub use filter::{apply_greyscale, apply_invert, apply_opacity, apply_sepia};
pub use resize::{resize, resize_with, scale, scale_with, BilinearResampler, Resampler};
pub use transform::{apply_crop, apply_flip, apply_rotation, blit};

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> Bitmap {
        let mut bmp = Bitmap::new(width, height).unwrap();
        bmp.scan_all_mut(|data, x, y, idx| {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            data[idx..idx + 4].copy_from_slice(&[v, v, v, 255]);
        });
        bmp
    }

    #[test]
    fn test_pipeline_keeps_buffer_consistent() {
        let mut bmp = checkerboard(40, 30);

        apply_crop(&mut bmp, 5, 5, 30, 20).unwrap();
        apply_rotation(&mut bmp, 90.0).unwrap();
        apply_flip(&mut bmp, true, false);
        apply_sepia(&mut bmp);
        fast_blur(&mut bmp, 2).unwrap();
        scale(&mut bmp, 0.5).unwrap();

        assert_eq!(bmp.dimensions(), (10, 15));
        assert_eq!(bmp.data().len(), 10 * 15 * CHANNELS);
    }

    #[test]
    fn test_failed_operation_leaves_bitmap_untouched() {
        let mut bmp = checkerboard(8, 8);
        let before = bmp.clone();

        assert!(apply_crop(&mut bmp, 4, 4, 5, 5).is_err());
        assert!(apply_rotation(&mut bmp, f64::NAN).is_err());
        assert!(apply_opacity(&mut bmp, 1.5).is_err());
        assert!(fast_blur(&mut bmp, 0).is_err());
        assert!(gaussian_blur(&mut bmp, 0).is_err());
        assert!(resize(&mut bmp, -1.0, 4.0).is_err());

        assert_eq!(bmp, before);
    }

    #[test]
    fn test_blit_between_bitmaps() {
        let src = Bitmap::filled(4, 4, [255, 0, 0, 10]).unwrap();
        let mut dst = Bitmap::filled(6, 6, [0, 0, 255, 255]).unwrap();

        blit(&src, &mut dst, 0, 0, 2, 2, 3, 3).unwrap();

        assert_eq!(dst.get_pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(dst.get_pixel(2, 2), Some([0, 0, 255, 255]));
    }
}
