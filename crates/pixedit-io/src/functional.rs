use std::path::Path;

use pixedit_image::PixelBuffer;

use crate::{error::IoError, format::ImageFormat, jpeg, png};

/// Decodes a PNG or JPEG image from raw bytes.
///
/// The format is detected from the leading signature bytes, not from any
/// file name.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the bytes are neither PNG nor
/// JPEG, or the decoder error if the stream is corrupt.
pub fn decode_image_any(bytes: &[u8]) -> Result<PixelBuffer, IoError> {
    match ImageFormat::from_magic(bytes) {
        Some(ImageFormat::Png) => png::decode_image_png(bytes),
        Some(ImageFormat::Jpeg) => jpeg::decode_image_jpeg(bytes),
        None => Err(IoError::UnsupportedFormat),
    }
}

/// Encodes an image in the given format.
///
/// Only [`ImageFormat::Png`] can be written.
///
/// # Example
///
/// ```
/// use pixedit_image::PixelBuffer;
/// use pixedit_io::{encode_image, IoError, ImageFormat};
///
/// let image = PixelBuffer::create(2, 2).unwrap();
///
/// assert!(encode_image(&image, ImageFormat::Png).is_ok());
/// assert!(matches!(
///     encode_image(&image, ImageFormat::Jpeg),
///     Err(IoError::UnsupportedOutputFormat(ImageFormat::Jpeg))
/// ));
/// ```
pub fn encode_image(image: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, IoError> {
    match format {
        ImageFormat::Png => png::encode_image_png(image),
        ImageFormat::Jpeg => Err(IoError::UnsupportedOutputFormat(format)),
    }
}

/// Reads a PNG or JPEG image from the given file path.
///
/// The format is detected from the file contents, so a mislabelled file
/// still decodes.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An ARGB image containing the image data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    let image = decode_image_any(&bytes)?;

    log::debug!(
        "read {} ({}x{})",
        file_path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}
