#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// packed ARGB pixel buffer.
pub mod image;

/// unpacked ARGB pixel values.
pub mod pixel;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PixelBuffer};
pub use crate::pixel::Argb;
