/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The data is neither a PNG nor a JPEG stream.
    #[error("Unsupported image format, expected a PNG or JPEG image")]
    UnsupportedFormat,

    /// The requested output format cannot be encoded.
    #[error("Unsupported output format: {0}, only png can be written")]
    UnsupportedOutputFormat(crate::format::ImageFormat),

    /// The decoded data has a channel count that cannot be mapped to ARGB.
    #[error("Unsupported number of channels: {0}")]
    UnsupportedChannels(usize),

    /// Error to decode the JPEG image.
    #[error("Error with Jpeg decoding. {0}")]
    JpegDecodingError(#[from] zune_jpeg::errors::DecodeErrors),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] pixedit_image::ImageError),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// Error to decode the PNG image.
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),
}
