/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the width or the height of the buffer is zero.
    #[error("Invalid image dimension: {0}x{1}")]
    InvalidDimension(usize, usize),

    /// Error when the pixel data does not hold exactly one value per pixel.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a pixel coordinate falls outside the buffer.
    #[error("Pixel ({0}, {1}) is out of range for an image of size {2}x{3}")]
    PixelOutOfRange(usize, usize, usize, usize),
}
