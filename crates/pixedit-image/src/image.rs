use crate::{error::ImageError, pixel::Argb};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixedit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An owned 2-D grid of packed ARGB pixels.
///
/// Pixels are stored row-major, one `u32` per pixel, with alpha in the most
/// significant byte (see [`Argb`]). The number of stored pixels always equals
/// `width * height`, and both dimensions are non-zero.
///
/// Cloning a buffer produces an independent deep copy of the pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: ImageSize,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Create a new buffer from packed pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The packed ARGB values, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] if either dimension is zero and
    /// [`ImageError::InvalidDataLength`] if `data` does not hold exactly one
    /// value per pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixedit_image::{ImageSize, PixelBuffer};
    ///
    /// let image = PixelBuffer::new(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 1,
    ///     },
    ///     vec![0xFF0A_141E, 0x80C8_9664],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 2);
    /// assert_eq!(image.get_pixel(1, 0), Ok(0x80C8_9664));
    /// ```
    pub fn new(size: ImageSize, data: Vec<u32>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::InvalidDimension(size.width, size.height));
        }

        if data.len() != size.area() {
            return Err(ImageError::InvalidDataLength(data.len(), size.area()));
        }

        Ok(Self { size, data })
    }

    /// Create a new buffer where every pixel holds `val`.
    pub fn from_size_val(size: ImageSize, val: u32) -> Result<Self, ImageError> {
        Self::new(size, vec![val; size.area()])
    }

    /// Create a zero-initialized buffer of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] if `width` or `height` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixedit_image::{ImageError, PixelBuffer};
    ///
    /// let image = PixelBuffer::create(4, 3).unwrap();
    /// assert!(image.as_slice().iter().all(|&p| p == 0));
    ///
    /// assert_eq!(PixelBuffer::create(0, 5), Err(ImageError::InvalidDimension(0, 5)));
    /// ```
    pub fn create(width: usize, height: usize) -> Result<Self, ImageError> {
        Self::from_size_val(ImageSize { width, height }, 0)
    }

    /// Create a buffer from interleaved 8-bit RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDataLength`] if `bytes` does not hold four
    /// bytes per pixel.
    pub fn from_rgba8(size: ImageSize, bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() != size.area() * 4 {
            return Err(ImageError::InvalidDataLength(bytes.len(), size.area() * 4));
        }

        let data = bytes
            .chunks_exact(4)
            .map(|px| Argb::new(px[3], px[0], px[1], px[2]).to_packed())
            .collect();

        Self::new(size, data)
    }

    /// Interleave the pixels into 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for &value in &self.data {
            let px = Argb::from_packed(value);
            bytes.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        bytes
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of pixels in the image.
    pub fn num_pixels(&self) -> usize {
        self.data.len()
    }

    /// Get the packed pixel data, row-major.
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Get the packed pixel data mutably, row-major.
    pub fn as_slice_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelOutOfRange(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok(y * self.width() + x)
    }

    /// Get the packed value of the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelOutOfRange`] if the coordinate is outside the buffer.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<u32, ImageError> {
        let idx = self.index(x, y)?;
        Ok(self.data[idx])
    }

    /// Set the packed value of the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelOutOfRange`] if the coordinate is outside the buffer.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: u32) -> Result<(), ImageError> {
        let idx = self.index(x, y)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get the pixel at column `x` and row `y` unpacked into its channels.
    pub fn get_argb(&self, x: usize, y: usize) -> Result<Argb, ImageError> {
        self.get_pixel(x, y).map(Argb::from_packed)
    }

    /// Set the pixel at column `x` and row `y` from its channels.
    pub fn set_argb(&mut self, x: usize, y: usize, pixel: Argb) -> Result<(), ImageError> {
        self.set_pixel(x, y, pixel.to_packed())
    }
}
