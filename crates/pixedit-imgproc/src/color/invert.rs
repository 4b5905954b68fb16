use pixedit_image::PixelBuffer;

const RGB_MASK: u32 = 0x00FF_FFFF;

/// Invert the color channels of a packed ARGB pixel, keeping its alpha.
///
/// Each of red, green and blue becomes `255 - value`.
///
/// # Example
///
/// ```
/// use pixedit_imgproc::color::invert_pixel;
///
/// assert_eq!(invert_pixel(0xFF0A_141E), 0xFFF5_EBE1);
/// ```
#[inline]
pub fn invert_pixel(value: u32) -> u32 {
    // 255 - x == x ^ 0xFF for every 8-bit x
    value ^ RGB_MASK
}

/// Invert the colors of an image in place.
///
/// Alpha is left untouched. Applying the filter twice restores the image.
///
/// # Arguments
///
/// * `image` - The image to invert.
pub fn invert(image: &mut PixelBuffer) {
    image
        .as_slice_mut()
        .iter_mut()
        .for_each(|px| *px = invert_pixel(*px));
}
