#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, encoding/decoding failures,
/// and format-specific errors.
pub mod error;

/// Detection of the supported image formats.
pub mod format;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any`] for automatic format detection.
pub mod functional;

/// PNG image encoding and decoding.
///
/// Decodes gray, gray-alpha, RGB, RGBA and palette PNGs of any bit depth into
/// 8-bit ARGB; encodes 8-bit RGB or RGBA.
pub mod png;

/// JPEG image decoding.
///
/// Pure Rust JPEG decoder. JPEG output is not supported.
pub mod jpeg;

/// Internal utility functions for channel layout conversion.
mod conv_utils;

pub use crate::error::IoError;
pub use crate::format::ImageFormat;
pub use crate::functional::{decode_image_any, encode_image, read_image_any};
pub use crate::jpeg::{decode_image_jpeg, read_image_jpeg};
pub use crate::png::{decode_image_png, encode_image_png, read_image_png, write_image_png};
