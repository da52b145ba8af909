//! Reading and writing PNG and JPEG images.
//!
//! The engine itself only deals with RGBA8 [`Bitmap`]s; this module is the
//! bridge to encoded bytes and files, built on the `image` crate.
//!
//! # Example
//!
//! ```ignore
//! use rasterkit_core::codec;
//!
//! let mut bmp = codec::open("photo.jpg")?;
//! rasterkit_core::apply_greyscale(&mut bmp);
//! codec::save(&bmp, "photo-grey.png", Default::default())?;
//! ```

mod decode;
mod encode;
mod types;

use std::fs;
use std::path::Path;

use log::debug;

use crate::bitmap::Bitmap;

pub use decode::{decode, decode_guessed};
pub use encode::encode;
pub use types::{CodecError, EncodeOptions, ImageFormat, Quality, MIME_JPEG, MIME_PNG};

/// Read and decode an image file.
///
/// The format comes from the file extension (`png`, `jpg` or `jpeg`).
///
/// # Errors
///
/// Returns `CodecError::UnsupportedFormat` for other extensions,
/// `CodecError::Io` if the file can't be read and `CodecError::Decode` if
/// its contents are not a valid image.
pub fn open(path: impl AsRef<Path>) -> Result<Bitmap, CodecError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    debug!("open {} as {}", path.display(), format.mime());

    let bytes = fs::read(path)?;
    decode(&bytes, format)
}

/// Encode a bitmap and write it to a file.
///
/// The format comes from the file extension; `quality` only affects JPEG.
/// Nothing is written if encoding fails.
pub fn save(bitmap: &Bitmap, path: impl AsRef<Path>, quality: Quality) -> Result<(), CodecError> {
    let path = path.as_ref();
    let options = EncodeOptions {
        format: ImageFormat::from_path(path)?,
        quality,
    };
    let bytes = encode(bitmap, &options)?;

    debug!("save {} ({} bytes)", path.display(), bytes.len());
    fs::write(path, bytes)?;
    Ok(())
}
