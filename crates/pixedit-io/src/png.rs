use std::{fs, path::Path};

use pixedit_image::{ImageSize, PixelBuffer};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};

use crate::{conv_utils, error::IoError};

/// Read a PNG image into an ARGB buffer.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Errors
///
/// Fails if the file does not exist, does not have a `png` extension or
/// cannot be decoded.
pub fn read_image_png(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("png"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let bytes = fs::read(file_path)?;
    decode_image_png(&bytes)
}

/// Decodes a PNG image from raw bytes.
///
/// Palette and sub-byte images are expanded and 16-bit samples are stripped
/// to 8 bits, so every PNG color type maps onto 8-bit ARGB.
///
/// # Arguments
///
/// - `bytes` - Raw bytes of the png file
pub fn decode_image_png(bytes: &[u8]) -> Result<PixelBuffer, IoError> {
    let mut decoder = Decoder::new(bytes);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    log::debug!(
        "decoded png {}x{} {:?} {:?}",
        info.width,
        info.height,
        info.color_type,
        info.bit_depth
    );

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    conv_utils::pack_interleaved_u8(size, &buf)
}

/// Encodes an image as an 8-bit PNG.
///
/// Images where every pixel is fully opaque are written as RGB, all others
/// as RGBA so that alpha survives the round trip.
///
/// # Arguments
///
/// - `image` - The image to encode.
pub fn encode_image_png(image: &PixelBuffer) -> Result<Vec<u8>, IoError> {
    let opaque = image.as_slice().iter().all(|&px| px >> 24 == 0xFF);

    let (color_type, image_data) = if opaque {
        (ColorType::Rgb, conv_utils::unpack_rgb8(image))
    } else {
        (ColorType::Rgba, image.to_rgba8())
    };

    let mut out = Vec::new();
    write_png_impl(&mut out, &image_data, image.size(), color_type)?;

    log::debug!(
        "encoded png {}x{} {:?} into {} bytes",
        image.width(),
        image.height(),
        color_type,
        out.len()
    );

    Ok(out)
}

/// Writes the given image as a PNG to the given file path.
///
/// The file is written as PNG whatever its extension.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image to write.
pub fn write_image_png(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    let bytes = encode_image_png(image)?;
    fs::write(file_path, bytes)?;
    Ok(())
}

fn write_png_impl(
    out: &mut Vec<u8>,
    image_data: &[u8],
    image_size: ImageSize,
    color_type: ColorType,
) -> Result<(), IoError> {
    let mut encoder = Encoder::new(out, image_size.width as u32, image_size.height as u32);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}
