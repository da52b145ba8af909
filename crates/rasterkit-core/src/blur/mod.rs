//! Blur filters.
//!
//! Two implementations with the same edge handling (samples outside the
//! bitmap are clamped to the nearest edge pixel):
//!
//! - [`gaussian_blur`]: exact Gaussian convolution, O(w·h·r²). Slow; useful
//!   as a reference.
//! - [`fast_blur`]: two iterations of a separable box blur over
//!   premultiplied alpha, O(w·h) for any radius.
//!
//! Both build their output from an unmodified copy of the input, so a
//! uniform image comes back unchanged.

mod fast;
mod gaussian;

pub use fast::{fast_blur, MAX_FAST_BLUR_RADIUS};
pub use gaussian::{
    gaussian_blur, gaussian_blur_with_progress, MAX_GAUSSIAN_RADIUS, SIGNIFICANT_RADIUS_FACTOR,
};

use crate::bitmap::BitmapError;

/// Reject radii outside `1..=max`.
fn validate_radius(radius: u32, max: u32) -> Result<(), BitmapError> {
    if radius == 0 || radius > max {
        return Err(BitmapError::InvalidRadius { radius, max });
    }
    Ok(())
}
