//! Per-pixel filters.
//!
//! Each filter visits every pixel once through the bitmap scanner and
//! rewrites it in place; a pixel's result depends only on its own value.

mod color;
mod opacity;

pub use color::{apply_greyscale, apply_invert, apply_sepia};
pub use opacity::apply_opacity;
