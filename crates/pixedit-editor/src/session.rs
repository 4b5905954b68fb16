use pixedit_image::PixelBuffer;
use pixedit_imgproc::Filter;

use crate::error::SessionError;

/// Whether a session holds an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No image has been loaded yet.
    Empty,
    /// An original snapshot and its working copy are present.
    Loaded,
}

#[derive(Debug, Clone)]
struct Buffers {
    // never mutated after load
    original: PixelBuffer,
    current: PixelBuffer,
}

/// Editing state for a single image.
///
/// A session keeps the image as it was loaded (`original`) next to the copy
/// that filters are applied to (`current`). Both are set together by
/// [`EditSession::load`] and replaced together by the next load, so they
/// always share the same dimensions.
///
/// # Example
///
/// ```
/// use pixedit_editor::{EditSession, SessionState};
/// use pixedit_image::PixelBuffer;
/// use pixedit_imgproc::Filter;
///
/// let mut session = EditSession::new();
/// assert_eq!(session.state(), SessionState::Empty);
///
/// let image = PixelBuffer::from_size_val([2, 2].into(), 0xFF10_2030).unwrap();
/// session.load(image.clone());
///
/// session.apply_filter(Filter::Invert).unwrap();
/// assert_ne!(session.current().unwrap(), &image);
///
/// session.reset_to_original().unwrap();
/// assert_eq!(session.current().unwrap(), &image);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    buffers: Option<Buffers>,
}

impl EditSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session state.
    pub fn state(&self) -> SessionState {
        match self.buffers {
            Some(_) => SessionState::Loaded,
            None => SessionState::Empty,
        }
    }

    /// Whether an image is loaded.
    pub fn is_loaded(&self) -> bool {
        self.buffers.is_some()
    }

    /// Load a new image, replacing any previous one.
    ///
    /// The buffer becomes the original snapshot and the current image starts
    /// as a copy of it.
    pub fn load(&mut self, image: PixelBuffer) {
        log::debug!("session load {}x{}", image.width(), image.height());
        let current = image.clone();
        self.buffers = Some(Buffers {
            original: image,
            current,
        });
    }

    /// Discard every filter applied since the last load.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if the session is empty.
    pub fn reset_to_original(&mut self) -> Result<(), SessionError> {
        let buffers = self.buffers.as_mut().ok_or(SessionError::NoImageLoaded)?;
        buffers.current.clone_from(&buffers.original);
        Ok(())
    }

    /// Apply `filter` to the current image in place.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if the session is empty.
    pub fn apply_filter(&mut self, filter: Filter) -> Result<(), SessionError> {
        let buffers = self.buffers.as_mut().ok_or(SessionError::NoImageLoaded)?;
        filter.apply(&mut buffers.current);
        Ok(())
    }

    /// Get the current image.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if the session is empty.
    pub fn current(&self) -> Result<&PixelBuffer, SessionError> {
        self.buffers
            .as_ref()
            .map(|b| &b.current)
            .ok_or(SessionError::NoImageLoaded)
    }

    /// Get the image as it was loaded.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if the session is empty.
    pub fn original(&self) -> Result<&PixelBuffer, SessionError> {
        self.buffers
            .as_ref()
            .map(|b| &b.original)
            .ok_or(SessionError::NoImageLoaded)
    }
}
