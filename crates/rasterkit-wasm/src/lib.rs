//! Rasterkit WASM - WebAssembly bindings for Rasterkit
//!
//! This crate exposes the rasterkit-core bitmap engine to JavaScript and
//! TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - The `JsBitmap` handle wrapping a core bitmap
//! - `transform` - Crop, flip, rotate, blit, resize and scale
//! - `filter` - Invert, greyscale, sepia, opacity and the blurs
//! - `codec` - PNG/JPEG decoding and encoding
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode, encode } from '@rasterkit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bitmap = decode(new Uint8Array(await file.arrayBuffer()), 'image/jpeg');
//! bitmap.rotate(90);
//! bitmap.blur(4);
//! const png = encode(bitmap, { mime: 'image/png' });
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod filter;
mod transform;
mod types;

// Re-export public types
pub use codec::{decode, encode, EncodeOptionsJs};
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
