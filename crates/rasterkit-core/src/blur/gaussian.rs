//! Exact Gaussian blur.
//!
//! Every output pixel is the normalized, Gaussian-weighted sum of the full
//! `(2 * rs + 1)²` neighbourhood around it, where `rs = ceil(r * 2.57)` is
//! the radius beyond which weights become negligible. Cost is
//! O(width × height × rs²), so this is meant as a reference for checking
//! [`fast_blur`](super::fast_blur), not as the everyday path.
//!
//! # Algorithm
//!
//! ```text
//! weight(dx, dy) = exp(-(dx² + dy²) / (2r²)) / (2πr²)
//! out(x, y)      = round(Σ weight * src(clamp(x + dx), clamp(y + dy)) / Σ weight)
//! ```
//! All four channels, alpha included, are blurred the same way. Samples are
//! always read from an untouched copy of the input.

use log::trace;

use super::validate_radius;
use crate::bitmap::{Bitmap, BitmapError, CHANNELS};

/// Multiple of the radius beyond which kernel weights are ignored.
pub const SIGNIFICANT_RADIUS_FACTOR: f64 = 2.57;

/// Largest accepted radius. The kernel holds `(2 * ceil(r * 2.57) + 1)²`
/// weights, about 1.7 million at this limit.
pub const MAX_GAUSSIAN_RADIUS: u32 = 254;

/// Apply a true Gaussian blur.
///
/// # Errors
///
/// Returns `BitmapError::InvalidRadius` if `radius` is zero or greater than
/// [`MAX_GAUSSIAN_RADIUS`].
pub fn gaussian_blur(bitmap: &mut Bitmap, radius: u32) -> Result<(), BitmapError> {
    gaussian_blur_with_progress(bitmap, radius, |_| {})
}

/// Apply a true Gaussian blur, reporting progress.
///
/// `progress` is called once per output row with the percentage of rows
/// already finished (`0` for the first row).
///
/// # Errors
///
/// Returns `BitmapError::InvalidRadius` if `radius` is zero or greater than
/// [`MAX_GAUSSIAN_RADIUS`]. The bitmap is unchanged on error.
pub fn gaussian_blur_with_progress<F>(
    bitmap: &mut Bitmap,
    radius: u32,
    mut progress: F,
) -> Result<(), BitmapError>
where
    F: FnMut(u32),
{
    validate_radius(radius, MAX_GAUSSIAN_RADIUS)?;

    let kernel = Kernel::new(radius)?;
    let (width, height) = bitmap.dimensions();
    let (w, h) = (width as i64, height as i64);
    let src = bitmap.data();
    let mut output = vec![0u8; src.len()];

    for y in 0..h {
        let percent = (y as f64 / h as f64 * 100.0).round() as u32;
        trace!("gaussian blur: {}%", percent);
        progress(percent);

        for x in 0..w {
            let mut acc = [0.0f64; 4];
            for (dy, row) in (-kernel.reach..=kernel.reach).zip(kernel.rows()) {
                let sy = (y + dy).clamp(0, h - 1);
                for (dx, &weight) in (-kernel.reach..=kernel.reach).zip(row) {
                    let sx = (x + dx).clamp(0, w - 1);
                    let idx = ((sy * w + sx) as usize) * CHANNELS;
                    for c in 0..CHANNELS {
                        acc[c] += src[idx + c] as f64 * weight;
                    }
                }
            }

            let out_idx = ((y * w + x) as usize) * CHANNELS;
            for c in 0..CHANNELS {
                output[out_idx + c] = (acc[c] / kernel.weight_sum).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    bitmap.replace_unchecked(width, height, output);
    Ok(())
}

/// Precomputed square Gaussian kernel.
struct Kernel {
    /// Half-width `rs`; the kernel spans `-reach..=reach` on both axes.
    reach: i64,
    /// Row-major `(2 * reach + 1)²` weights.
    weights: Vec<f64>,
    weight_sum: f64,
}

impl Kernel {
    fn new(radius: u32) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::InvalidRadius {
            radius,
            max: MAX_GAUSSIAN_RADIUS,
        };

        let r = radius as f64;
        let reach = (r * SIGNIFICANT_RADIUS_FACTOR).ceil() as i64;
        let len = reach
            .checked_mul(2)
            .and_then(|d| d.checked_add(1))
            .and_then(|side| side.checked_mul(side))
            .and_then(|len| usize::try_from(len).ok())
            .ok_or_else(too_large)?;
        let two_r_sq = 2.0 * r * r;
        let norm = std::f64::consts::PI * two_r_sq;

        let mut weights = Vec::with_capacity(len);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let dsq = (dx * dx + dy * dy) as f64;
                weights.push((-dsq / two_r_sq).exp() / norm);
            }
        }
        let weight_sum = weights.iter().sum();

        Ok(Self {
            reach,
            weights,
            weight_sum,
        })
    }

    fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.weights.chunks_exact((2 * self.reach + 1) as usize)
    }
}
