use pixedit_io::IoError;

/// An error type for the edit session.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The operation needs an image but none has been loaded yet.
    #[error("No image loaded.")]
    NoImageLoaded,
}

/// An error type for the editor actions.
///
/// The `Display` text is the status message shown to the user.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// The action requires a loaded image.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The image file could not be read or decoded.
    #[error("Error loading image: {0}")]
    Decode(#[source] IoError),

    /// The image could not be encoded or written.
    #[error("Error saving image: {0}")]
    Encode(#[source] IoError),
}
