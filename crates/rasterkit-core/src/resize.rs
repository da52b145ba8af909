//! Resizing and scaling.
//!
//! The pixel resampling itself is delegated to a [`Resampler`]; this module
//! only turns the requested size into whole pixels, validates it, and swaps
//! the resampled buffer into the bitmap together with the new dimensions.
//!
//! [`BilinearResampler`] is the default collaborator and uses the `image`
//! crate's triangle (bilinear) filter.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba};
use log::debug;

use crate::bitmap::{buffer_len, Bitmap, BitmapError};

/// Resamples an RGBA8 buffer to new dimensions.
pub trait Resampler {
    /// Resample `buffer` (`src_width x src_height`, RGBA8) to
    /// `dst_width x dst_height`, returning the new RGBA8 buffer.
    fn resize(
        &self,
        src_width: u32,
        src_height: u32,
        dst_width: u32,
        dst_height: u32,
        buffer: &[u8],
    ) -> Result<Vec<u8>, BitmapError>;
}

/// Two-pass bilinear resampling through `image::imageops::resize`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BilinearResampler;

impl Resampler for BilinearResampler {
    fn resize(
        &self,
        src_width: u32,
        src_height: u32,
        dst_width: u32,
        dst_height: u32,
        buffer: &[u8],
    ) -> Result<Vec<u8>, BitmapError> {
        let src = ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(src_width, src_height, buffer).ok_or(
            BitmapError::BufferSizeMismatch {
                expected: buffer_len(src_width, src_height)?,
                actual: buffer.len(),
            },
        )?;

        let resized = imageops::resize(&src, dst_width, dst_height, FilterType::Triangle);
        Ok(resized.into_raw())
    }
}

/// Resize a bitmap to `width x height` with [`BilinearResampler`].
///
/// Fractional sizes are rounded to the nearest pixel (halves round up).
///
/// # Errors
///
/// - `BitmapError::InvalidArgument` if a size is NaN, infinite, negative or
///   too large
/// - `BitmapError::InvalidDimensions` if a size rounds to zero
pub fn resize(bitmap: &mut Bitmap, width: f64, height: f64) -> Result<(), BitmapError> {
    resize_with(bitmap, width, height, &BilinearResampler)
}

/// Resize a bitmap with a caller-supplied resampler.
///
/// The resampler's output must be exactly `width * height * 4` bytes long;
/// otherwise `BitmapError::BufferSizeMismatch` is returned and the bitmap
/// is left as it was.
pub fn resize_with<R>(
    bitmap: &mut Bitmap,
    width: f64,
    height: f64,
    resampler: &R,
) -> Result<(), BitmapError>
where
    R: Resampler + ?Sized,
{
    let dst_width = round_dimension(width)?;
    let dst_height = round_dimension(height)?;
    buffer_len(dst_width, dst_height)?;

    debug!(
        "resize {}x{} -> {}x{}",
        bitmap.width(),
        bitmap.height(),
        dst_width,
        dst_height
    );

    let data = resampler.resize(
        bitmap.width(),
        bitmap.height(),
        dst_width,
        dst_height,
        bitmap.data(),
    )?;
    bitmap.replace(dst_width, dst_height, data)
}

/// Uniformly scale a bitmap by `factor` with [`BilinearResampler`].
///
/// # Errors
///
/// Returns `BitmapError::InvalidArgument` if `factor` is negative or not
/// finite, and the errors of [`resize`] for the scaled size.
pub fn scale(bitmap: &mut Bitmap, factor: f64) -> Result<(), BitmapError> {
    scale_with(bitmap, factor, &BilinearResampler)
}

/// Uniformly scale a bitmap with a caller-supplied resampler.
pub fn scale_with<R>(bitmap: &mut Bitmap, factor: f64, resampler: &R) -> Result<(), BitmapError>
where
    R: Resampler + ?Sized,
{
    if !factor.is_finite() || factor < 0.0 {
        return Err(BitmapError::InvalidArgument(format!(
            "scale factor must be a positive number, got {factor}"
        )));
    }
    let width = bitmap.width() as f64 * factor;
    let height = bitmap.height() as f64 * factor;
    resize_with(bitmap, width, height, resampler)
}

/// Round a requested size to whole pixels.
fn round_dimension(value: f64) -> Result<u32, BitmapError> {
    if !value.is_finite() {
        return Err(BitmapError::InvalidArgument(format!(
            "dimension must be finite, got {value}"
        )));
    }
    let rounded = (value + 0.5).floor();
    if rounded < 0.0 || rounded > u32::MAX as f64 {
        return Err(BitmapError::InvalidArgument(format!(
            "dimension {value} is out of range"
        )));
    }
    Ok(rounded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_bitmap(width: u32, height: u32) -> Bitmap {
        // Simple gradient
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(((x * 255) / width.max(1)) as u8);
                data.push(((y * 255) / height.max(1)) as u8);
                data.push(128);
                data.push(255);
            }
        }
        Bitmap::from_raw(width, height, data).unwrap()
    }

    /// Returns a buffer of the wrong length.
    struct BrokenResampler;

    impl Resampler for BrokenResampler {
        fn resize(&self, _: u32, _: u32, _: u32, _: u32, _: &[u8]) -> Result<Vec<u8>, BitmapError> {
            Ok(vec![0u8; 3])
        }
    }

    /// Fills the target with a constant colour.
    struct SolidResampler([u8; 4]);

    impl Resampler for SolidResampler {
        fn resize(
            &self,
            _: u32,
            _: u32,
            dst_width: u32,
            dst_height: u32,
            _: &[u8],
        ) -> Result<Vec<u8>, BitmapError> {
            Ok(self.0.repeat((dst_width * dst_height) as usize))
        }
    }

    #[test]
    fn test_resize_basic() {
        let mut bmp = create_test_bitmap(100, 50);
        resize(&mut bmp, 50.0, 25.0).unwrap();

        assert_eq!(bmp.dimensions(), (50, 25));
        assert_eq!(bmp.data().len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_upscale() {
        let mut bmp = create_test_bitmap(10, 5);
        resize(&mut bmp, 31.0, 17.0).unwrap();
        assert_eq!(bmp.dimensions(), (31, 17));
        assert_eq!(bmp.data().len(), 31 * 17 * 4);
    }

    #[test]
    fn test_resize_rounds_fractional_sizes() {
        let mut bmp = create_test_bitmap(10, 10);
        resize(&mut bmp, 4.5, 7.49).unwrap();
        assert_eq!(bmp.dimensions(), (5, 7));
    }

    #[test]
    fn test_resize_uniform_stays_uniform() {
        let mut bmp = Bitmap::filled(8, 8, [40, 80, 120, 255]).unwrap();
        resize(&mut bmp, 3.0, 5.0).unwrap();
        assert!(bmp
            .data()
            .chunks_exact(4)
            .all(|px| *px == [40, 80, 120, 255]));
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let mut bmp = create_test_bitmap(10, 10);
        assert!(matches!(
            resize(&mut bmp, 0.0, 5.0),
            Err(BitmapError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            resize(&mut bmp, 5.0, 0.4),
            Err(BitmapError::InvalidDimensions { .. })
        ));
        assert_eq!(bmp.dimensions(), (10, 10));
    }

    #[test]
    fn test_resize_invalid_numbers() {
        let mut bmp = create_test_bitmap(10, 10);
        for (w, h) in [(f64::NAN, 5.0), (5.0, f64::INFINITY), (-3.0, 5.0), (1e12, 1.0)] {
            assert!(matches!(
                resize(&mut bmp, w, h),
                Err(BitmapError::InvalidArgument(_))
            ));
        }
        assert_eq!(bmp.dimensions(), (10, 10));
    }

    #[test]
    fn test_resize_with_custom_resampler() {
        let mut bmp = create_test_bitmap(3, 3);
        resize_with(&mut bmp, 2.0, 4.0, &SolidResampler([1, 2, 3, 4])).unwrap();
        assert_eq!(bmp.dimensions(), (2, 4));
        assert_eq!(bmp.get_pixel(1, 3), Some([1, 2, 3, 4]));
    }

    #[test]
    fn test_resize_rejects_bad_resampler_output() {
        let mut bmp = create_test_bitmap(4, 4);
        let before = bmp.clone();
        let err = resize_with(&mut bmp, 2.0, 2.0, &BrokenResampler).unwrap_err();
        assert_eq!(
            err,
            BitmapError::BufferSizeMismatch {
                expected: 16,
                actual: 3
            }
        );
        assert_eq!(bmp, before);
    }

    #[test]
    fn test_scale_half() {
        let mut bmp = create_test_bitmap(100, 50);
        scale(&mut bmp, 0.5).unwrap();
        assert_eq!(bmp.dimensions(), (50, 25));
    }

    #[test]
    fn test_scale_double() {
        let mut bmp = create_test_bitmap(7, 3);
        scale(&mut bmp, 2.0).unwrap();
        assert_eq!(bmp.dimensions(), (14, 6));
    }

    #[test]
    fn test_scale_rejects_negative_factor() {
        let mut bmp = create_test_bitmap(7, 3);
        assert!(matches!(
            scale(&mut bmp, -1.0),
            Err(BitmapError::InvalidArgument(_))
        ));
        assert!(scale(&mut bmp, f64::NAN).is_err());
    }

    #[test]
    fn test_scale_to_nothing_rejected() {
        let mut bmp = create_test_bitmap(7, 3);
        assert!(matches!(
            scale(&mut bmp, 0.0),
            Err(BitmapError::InvalidDimensions { .. })
        ));
        assert_eq!(bmp.dimensions(), (7, 3));
    }

    #[test]
    fn test_bilinear_resampler_rejects_short_buffer() {
        let err = BilinearResampler.resize(2, 2, 1, 1, &[0u8; 8]).unwrap_err();
        assert!(matches!(err, BitmapError::BufferSizeMismatch { expected: 16, actual: 8 }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: The buffer always matches the new dimensions.
        #[test]
        fn prop_resize_buffer_matches_dimensions(
            (src_w, src_h) in (1u32..=40, 1u32..=40),
            (dst_w, dst_h) in (1u32..=40, 1u32..=40),
        ) {
            let mut bmp = Bitmap::filled(src_w, src_h, [1, 2, 3, 4]).unwrap();
            resize(&mut bmp, dst_w as f64, dst_h as f64).unwrap();

            prop_assert_eq!(bmp.dimensions(), (dst_w, dst_h));
            prop_assert_eq!(bmp.data().len(), (dst_w * dst_h * 4) as usize);
        }
    }
}
