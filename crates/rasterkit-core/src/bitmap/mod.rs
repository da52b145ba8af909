//! The in-memory bitmap and its scanner.
//!
//! A [`Bitmap`] owns a row-major RGBA8 buffer together with its dimensions.
//! Pixel `(x, y)` lives at byte offset `(y * width + x) * 4`, stored as
//! R, G, B, A.
//!
//! Operations that change the image shape (crop, flip, rotate, resize)
//! build a complete new buffer first and then swap it in, so no caller ever
//! observes a buffer whose length disagrees with the dimensions.

mod scan;
mod types;

pub use types::{Bitmap, BitmapError, CHANNELS};

pub(crate) use types::buffer_len;
