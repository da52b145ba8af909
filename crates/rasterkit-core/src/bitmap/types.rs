//! Core bitmap type and its error enum.

use thiserror::Error;

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Error types for bitmap operations.
///
/// Every variant describes an invalid argument. Operations validate their
/// inputs before touching any pixel, so an `Err` always leaves the bitmap
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BitmapError {
    /// Width or height is zero, or the buffer size would overflow.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },

    /// Pixel buffer length doesn't match the dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A rectangle reaches outside the bitmap.
    #[error(
        "Region {width}x{height} at ({x}, {y}) is outside the {bitmap_width}x{bitmap_height} bitmap"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        bitmap_width: u32,
        bitmap_height: u32,
    },

    /// Blur radius outside the supported range.
    #[error("Invalid blur radius {radius}: must be between 1 and {max}")]
    InvalidRadius { radius: u32, max: u32 },

    /// Opacity factor outside [0, 1].
    #[error("Invalid opacity factor {0}: must be a number from 0 to 1")]
    InvalidOpacity(f64),

    /// JPEG quality outside [0, 100].
    #[error("Invalid quality {0}: must be a number 0 - 100")]
    InvalidQuality(u32),

    /// Any other out-of-range numeric input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// An RGBA8 raster image held in memory.
///
/// The pixel buffer is row-major with 4 bytes per pixel. The fields are
/// private so that `data.len() == width * height * 4` holds at all times:
/// dimensions only change through [`Bitmap::replace`], which swaps in a
/// complete buffer of the matching length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Byte length of a `width x height` RGBA8 buffer, or an error for empty or
/// overflowing dimensions.
pub(crate) fn buffer_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidDimensions {
            width: width as u64,
            height: height as u64,
        });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BitmapError::InvalidDimensions {
            width: width as u64,
            height: height as u64,
        })
}

impl Bitmap {
    /// Create a transparent black bitmap.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        let len = buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Create a bitmap with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BitmapError> {
        let len = buffer_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns `BitmapError::BufferSizeMismatch` if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(BitmapError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// The RGBA8 pixel buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the pixel buffer. A slice cannot change length, so
    /// the size invariant survives any write through it.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the bitmap, returning its buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel `(x, y)`, or `None` outside the bitmap.
    #[inline]
    pub fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((self.width as usize * y as usize + x as usize) * CHANNELS)
    }

    /// Read one pixel.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.pixel_index(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[idx..idx + CHANNELS]);
        Some(px)
    }

    /// Write one pixel.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> Result<(), BitmapError> {
        let idx = self.pixel_index(x, y).ok_or(BitmapError::OutOfBounds {
            x,
            y,
            width: 1,
            height: 1,
            bitmap_width: self.width,
            bitmap_height: self.height,
        })?;
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgba);
        Ok(())
    }

    /// Swap in a new buffer and dimensions in one step.
    ///
    /// The new buffer is validated first; on error the bitmap is untouched.
    pub fn replace(&mut self, width: u32, height: u32, data: Vec<u8>) -> Result<(), BitmapError> {
        let next = Self::from_raw(width, height, data)?;
        *self = next;
        Ok(())
    }

    /// Swap in a buffer already known to match `width * height * 4`.
    pub(crate) fn replace_unchecked(&mut self, width: u32, height: u32, data: Vec<u8>) {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        self.width = width;
        self.height = height;
        self.data = data;
    }
}
