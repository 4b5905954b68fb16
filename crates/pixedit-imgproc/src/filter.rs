use std::{fmt, str::FromStr};

use pixedit_image::PixelBuffer;

use crate::color;

/// Errors that can occur while selecting a filter.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// The filter name is not one of the supported filters.
    #[error("unknown filter: {0} (expected one of: invert, grayscale)")]
    UnknownFilter(String),
}

/// The per-pixel filters the editor can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Replace every color channel by `255 - value`. See [`color::invert`].
    Invert,
    /// Replace every color channel by the pixel luminance. See [`color::grayscale`].
    Grayscale,
}

impl Filter {
    /// All the supported filters.
    pub const ALL: [Filter; 2] = [Filter::Invert, Filter::Grayscale];

    /// Apply the filter to `image` in place.
    ///
    /// # Example
    ///
    /// ```
    /// use pixedit_image::PixelBuffer;
    /// use pixedit_imgproc::Filter;
    ///
    /// let mut image = PixelBuffer::from_size_val([2, 2].into(), 0xFF00_0000).unwrap();
    /// Filter::Invert.apply(&mut image);
    ///
    /// assert!(image.as_slice().iter().all(|&p| p == u32::MAX));
    /// ```
    pub fn apply(self, image: &mut PixelBuffer) {
        let start = std::time::Instant::now();

        match self {
            Filter::Invert => color::invert(image),
            Filter::Grayscale => color::grayscale(image),
        }

        log::debug!(
            "{} applied to {}x{} pixels in {:?}",
            self,
            image.width(),
            image.height(),
            start.elapsed()
        );
    }

    /// Lowercase name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Invert => "invert",
            Filter::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "invert" => Ok(Filter::Invert),
            "grayscale" | "gray" => Ok(Filter::Grayscale),
            _ => Err(FilterError::UnknownFilter(s.to_string())),
        }
    }
}
