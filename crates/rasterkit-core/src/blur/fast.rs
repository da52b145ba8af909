//! Fast approximate Gaussian blur.
//!
//! Two iterations of a separable box blur. Each iteration runs a horizontal
//! pass and then a vertical pass, both with a sliding window of `2r + 1`
//! samples and clamped edges, so the cost is O(width × height) whatever the
//! radius.
//!
//! # Algorithm
//!
//! 1. **Horizontal pass**: for every row keep a running sum of the
//!    premultiplied pixels (`R·A, G·A, B·A, A`) in the window. The sums are
//!    stored unnormalized in a width × height buffer.
//! 2. **Vertical pass**: for every column keep a running sum of the row
//!    sums. The total window weight is `(2r + 1)²`. Alpha is normalized
//!    with a multiply-and-shift pair looked up by radius, and colour is
//!    un-premultiplied as `ΣC·A / ΣA`, which is `C * 255 / A` with the
//!    window weight cancelled out.
//!
//! The first iteration writes its result back into the bitmap and the second
//! iteration blurs that result again.

use log::debug;

use super::validate_radius;
use crate::bitmap::{Bitmap, BitmapError, CHANNELS};

/// Largest radius covered by the normalization table.
pub const MAX_FAST_BLUR_RADIUS: u32 = 254;

/// Box blur iterations per call.
const ITERATIONS: usize = 2;

const TABLE_LEN: usize = MAX_FAST_BLUR_RADIUS as usize + 1;

/// `(mul, shift)` per radius such that `(x * mul) >> shift == x / (2r + 1)²`
/// for every alpha window sum `x` in `0..=255 * (2r + 1)²`.
static NORMALIZERS: [(u64, u32); TABLE_LEN] = build_normalizers();

const fn build_normalizers() -> [(u64, u32); TABLE_LEN] {
    let mut table = [(0u64, 0u32); TABLE_LEN];
    let mut r = 0;
    while r < TABLE_LEN {
        let side = (2 * r + 1) as u64;
        let n = side * side;
        // 2^shift >= 255 * n² keeps the rounding error of mul below one step.
        let bound = 255 * n * n;
        let mut shift = 0u32;
        while (1u64 << shift) < bound {
            shift += 1;
        }
        let mul = ((1u64 << shift) + n - 1) / n;
        table[r] = (mul, shift);
        r += 1;
    }
    table
}

/// Apply the fast box-blur approximation of a Gaussian blur.
///
/// # Errors
///
/// Returns `BitmapError::InvalidRadius` if `radius` is zero or greater than
/// [`MAX_FAST_BLUR_RADIUS`]. The bitmap is unchanged on error.
pub fn fast_blur(bitmap: &mut Bitmap, radius: u32) -> Result<(), BitmapError> {
    validate_radius(radius, MAX_FAST_BLUR_RADIUS)?;

    let (mul, shift) = NORMALIZERS[radius as usize];
    let (width, height) = (bitmap.width() as usize, bitmap.height() as usize);
    let r = radius as usize;

    debug!(
        "fast blur {}x{} radius {} (mul {}, shift {})",
        width, height, radius, mul, shift
    );

    // Window edges: the sample entering after position i, and the one leaving.
    let row_edges: Vec<(usize, usize)> = (0..width)
        .map(|x| ((x + r + 1).min(width - 1), x.saturating_sub(r)))
        .collect();
    let column_edges: Vec<(usize, usize)> = (0..height)
        .map(|y| ((y + r + 1).min(height - 1) * width, y.saturating_sub(r) * width))
        .collect();

    let mut row_sums = vec![[0u32; 4]; width * height];

    for _ in 0..ITERATIONS {
        horizontal_pass(bitmap.data(), width, height, r, &row_edges, &mut row_sums);
        vertical_pass(
            bitmap.data_mut(),
            width,
            height,
            r,
            &column_edges,
            &row_sums,
            (mul, shift),
        );
    }
    Ok(())
}

/// Premultiplied pixel at byte offset `idx`: `[R·A, G·A, B·A, A]`.
#[inline]
fn premultiplied(data: &[u8], idx: usize) -> [u32; 4] {
    let a = data[idx + 3] as u32;
    [
        data[idx] as u32 * a,
        data[idx + 1] as u32 * a,
        data[idx + 2] as u32 * a,
        a,
    ]
}

fn horizontal_pass(
    data: &[u8],
    width: usize,
    height: usize,
    r: usize,
    edges: &[(usize, usize)],
    row_sums: &mut [[u32; 4]],
) {
    let last = width - 1;
    for y in 0..height {
        let row = y * width;
        let pixel = |x: usize| premultiplied(data, (row + x) * CHANNELS);

        // Window centred on x = 0: the left edge repeated r + 1 times
        let first = pixel(0);
        let mut sum = first.map(|v| v * (r as u32 + 1));
        for i in 1..=r {
            add_to(&mut sum, pixel(i.min(last)));
        }

        for (x, &(enter, leave)) in edges.iter().enumerate() {
            row_sums[row + x] = sum;
            let (entering, leaving) = (pixel(enter), pixel(leave));
            for c in 0..4 {
                sum[c] = sum[c] + entering[c] - leaving[c];
            }
        }
    }
}

fn vertical_pass(
    data: &mut [u8],
    width: usize,
    height: usize,
    r: usize,
    edges: &[(usize, usize)],
    row_sums: &[[u32; 4]],
    (mul, shift): (u64, u32),
) {
    let last_row = (height - 1) * width;
    for x in 0..width {
        let sample = |offset: usize| row_sums[offset + x].map(u64::from);

        let mut sum = sample(0).map(|v| v * (r as u64 + 1));
        for i in 1..=r {
            add_to(&mut sum, sample((i * width).min(last_row)));
        }

        for (y, &(enter, leave)) in edges.iter().enumerate() {
            let idx = (y * width + x) * CHANNELS;
            let alpha = (sum[3] * mul) >> shift;
            data[idx + 3] = alpha as u8;
            if alpha > 0 {
                // sum[3] >= alpha > 0, and each colour sum is at most 255 * sum[3]
                data[idx] = (sum[0] / sum[3]) as u8;
                data[idx + 1] = (sum[1] / sum[3]) as u8;
                data[idx + 2] = (sum[2] / sum[3]) as u8;
            } else {
                data[idx] = 0;
                data[idx + 1] = 0;
                data[idx + 2] = 0;
            }

            let (entering, leaving) = (sample(enter), sample(leave));
            for c in 0..4 {
                sum[c] = sum[c] + entering[c] - leaving[c];
            }
        }
    }
}

#[inline]
fn add_to<T: Copy + std::ops::AddAssign>(sum: &mut [T; 4], value: [T; 4]) {
    for c in 0..4 {
        sum[c] += value[c];
    }
}
