use crate::{conv_utils, error::IoError};
use pixedit_image::{ImageSize, PixelBuffer};
use std::{fs, path::Path};

/// Read a JPEG image into an ARGB buffer.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG file.
///
/// # Returns
///
/// A fully opaque ARGB image.
pub fn read_image_jpeg(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref().to_owned();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path.extension().map_or(true, |ext| {
        !ext.eq_ignore_ascii_case("jpg") && !ext.eq_ignore_ascii_case("jpeg")
    }) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let jpeg_data = fs::read(file_path)?;
    decode_image_jpeg(&jpeg_data)
}

/// Decodes a JPEG image from raw bytes.
///
/// Gray and color JPEGs are both accepted; the result is fully opaque.
///
/// # Arguments
///
/// - `bytes` - Raw bytes of the jpeg file
pub fn decode_image_jpeg(bytes: &[u8]) -> Result<PixelBuffer, IoError> {
    let mut decoder = zune_jpeg::JpegDecoder::new(bytes);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(zune_jpeg::errors::DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;

    log::debug!(
        "decoded jpeg {}x{} into {} bytes",
        image_size.width,
        image_size.height,
        img_data.len()
    );

    conv_utils::pack_interleaved_u8(image_size, &img_data)
}
