use std::{fmt, path::Path};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// The image formats understood by the codec boundary.
///
/// Both formats can be decoded; only [`ImageFormat::Png`] can be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG / JFIF
    Jpeg,
}

impl ImageFormat {
    /// Detect the format from the leading bytes of an encoded image.
    ///
    /// # Example
    ///
    /// ```
    /// use pixedit_io::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_magic(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_magic(b"GIF89a"), None);
    /// ```
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&PNG_SIGNATURE) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&JPEG_SOI) {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }

    /// Guess the format from the file extension (`png`, `jpg` or `jpeg`, any case).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// The canonical file extension of the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::ImageFormat;

    #[test]
    fn detect_magic() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(ImageFormat::from_magic(&png), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_magic(&png[..4]), None);
        assert_eq!(
            ImageFormat::from_magic(&[0xFF, 0xD8, 0xFF, 0xDB]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::from_magic(&[]), None);
    }

    #[test]
    fn detect_extension() {
        assert_eq!(ImageFormat::from_path("a/dog.png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_path("dog.JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path("dog.jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path("dog.tiff"), None);
        assert_eq!(ImageFormat::from_path("dog"), None);
    }
}
