use pixedit_image::{Argb, PixelBuffer};

// RGB weights for the grayscale conversion, in thousandths
const RW: u32 = 299;
const GW: u32 = 587;
const BW: u32 = 114;
const WEIGHT_SUM: u32 = RW + GW + BW;

/// Compute the luminance of a color using the formula:
///
/// Y = floor(0.299 * R + 0.587 * G + 0.114 * B)
///
/// The sum is evaluated in integer thousandths, so the result is the exact
/// floor of the weighted sum and a gray input maps onto itself.
///
/// # Example
///
/// ```
/// use pixedit_imgproc::color::luminance;
///
/// assert_eq!(luminance(10, 20, 30), 18);
/// assert_eq!(luminance(200, 150, 100), 159);
/// ```
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = (RW * r as u32 + GW * g as u32 + BW * b as u32) / WEIGHT_SUM;
    // the weights sum to one, so y never exceeds the largest channel
    y as u8
}

/// Replace the color channels of a packed ARGB pixel by its luminance.
#[inline]
pub fn gray_pixel(value: u32) -> u32 {
    let px = Argb::from_packed(value);
    let y = luminance(px.r, px.g, px.b);
    Argb::new(px.a, y, y, y).to_packed()
}

/// Convert an image to grayscale in place.
///
/// Red, green and blue of every pixel are set to the pixel [`luminance`];
/// alpha is left untouched. Converting an already gray image is a no-op.
///
/// # Arguments
///
/// * `image` - The image to convert.
///
/// # Example
///
/// ```
/// use pixedit_image::{Argb, PixelBuffer};
/// use pixedit_imgproc::color::grayscale;
///
/// let mut image = PixelBuffer::from_size_val(
///     [4, 5].into(),
///     Argb::new(255, 10, 20, 30).to_packed(),
/// )
/// .unwrap();
///
/// grayscale(&mut image);
///
/// assert_eq!(image.get_argb(3, 4).unwrap(), Argb::new(255, 18, 18, 18));
/// ```
pub fn grayscale(image: &mut PixelBuffer) {
    image
        .as_slice_mut()
        .iter_mut()
        .for_each(|px| *px = gray_pixel(*px));
}
