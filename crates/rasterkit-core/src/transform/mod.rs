//! Geometric transforms: crop, flip, rotation and blit.
//!
//! Crop, flip and rotation rebuild the whole pixel buffer and swap it into
//! the bitmap in one step; none of them mirrors or moves pixels in place.
//! Blit writes into a second, independently owned bitmap.
//!
//! # Coordinate System
//!
//! - Coordinates and sizes are in whole pixels
//! - Origin is the top-left corner
//! - Rotation angles are in degrees, positive = clockwise

mod blit;
mod crop;
mod flip;
mod rotation;

pub use blit::blit;
pub use crop::apply_crop;
pub use flip::apply_flip;
pub use rotation::{apply_rotation, quarter_turns};
