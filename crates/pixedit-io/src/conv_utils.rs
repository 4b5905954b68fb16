use pixedit_image::{Argb, ImageSize, PixelBuffer};

use crate::error::IoError;

/// Pack an interleaved 8-bit buffer into ARGB pixels.
///
/// The channel count is inferred from the buffer length: 1 (gray), 2 (gray,
/// alpha), 3 (rgb) or 4 (rgba). Sources without alpha become fully opaque.
pub fn pack_interleaved_u8(size: ImageSize, buf: &[u8]) -> Result<PixelBuffer, IoError> {
    let area = size.area();
    if area == 0 {
        return Err(pixedit_image::ImageError::InvalidDimension(size.width, size.height).into());
    }

    let channels = buf.len() / area;
    if buf.len() != channels * area {
        return Err(pixedit_image::ImageError::InvalidDataLength(buf.len(), area * channels).into());
    }

    let pack: fn(&[u8]) -> Argb = match channels {
        1 => |px| Argb::opaque(px[0], px[0], px[0]),
        2 => |px| Argb::new(px[1], px[0], px[0], px[0]),
        3 => |px| Argb::opaque(px[0], px[1], px[2]),
        4 => |px| Argb::new(px[3], px[0], px[1], px[2]),
        n => return Err(IoError::UnsupportedChannels(n)),
    };

    let data = buf
        .chunks_exact(channels)
        .map(|px| pack(px).to_packed())
        .collect();

    Ok(PixelBuffer::new(size, data)?)
}

/// Interleave the RGB channels of every pixel, dropping alpha.
pub fn unpack_rgb8(image: &PixelBuffer) -> Vec<u8> {
    let mut buf = Vec::with_capacity(image.num_pixels() * 3);
    for &value in image.as_slice() {
        let px = Argb::from_packed(value);
        buf.extend_from_slice(&[px.r, px.g, px.b]);
    }
    buf
}
