use std::path::{Path, PathBuf};

use pixedit_imgproc::Filter;

use crate::{error::EditorError, session::EditSession};

const READY: &str = "Ready to edit...";

/// A user request issued by the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Decode the PNG or JPEG file and start a new session with it.
    Load(PathBuf),
    /// Restore the image as it was loaded.
    Original,
    /// Apply [`Filter::Invert`].
    Invert,
    /// Apply [`Filter::Grayscale`].
    Grayscale,
    /// Encode the current image as PNG into the file.
    Save(PathBuf),
}

impl From<Filter> for Action {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Invert => Action::Invert,
            Filter::Grayscale => Action::Grayscale,
        }
    }
}

/// Runs shell actions against an [`EditSession`] and keeps the status line.
///
/// Every dispatched action replaces the status text, with a confirmation on
/// success and the error message on failure. A failed action leaves the
/// session as it was.
#[derive(Debug, Clone)]
pub struct Editor {
    session: EditSession,
    status: String,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            session: EditSession::new(),
            status: READY.to_string(),
        }
    }
}

impl Editor {
    /// Create an editor with an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session driven by this editor.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Get the text of the last status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the actions that need an image (original, filters, save)
    /// are available. Loading is always available.
    pub fn controls_enabled(&self) -> bool {
        self.session.is_loaded()
    }

    /// Run an action and return the new status message.
    ///
    /// # Errors
    ///
    /// Returns the [`EditorError`] of a failed action; its message is also
    /// stored as the status text.
    pub fn dispatch(&mut self, action: &Action) -> Result<&str, EditorError> {
        match self.run(action) {
            Ok(status) => {
                log::info!("{status}");
                self.status = status;
                Ok(&self.status)
            }
            Err(err) => {
                log::warn!("{action:?} failed: {err}");
                self.status = err.to_string();
                Err(err)
            }
        }
    }

    fn run(&mut self, action: &Action) -> Result<String, EditorError> {
        match action {
            Action::Load(path) => self.load(path),
            Action::Original => {
                self.session.reset_to_original()?;
                Ok("Image restored to original.".to_string())
            }
            Action::Invert => {
                self.session.apply_filter(Filter::Invert)?;
                Ok("Invert colors applied.".to_string())
            }
            Action::Grayscale => {
                self.session.apply_filter(Filter::Grayscale)?;
                Ok("Grayscale filter applied.".to_string())
            }
            Action::Save(path) => self.save(path),
        }
    }

    fn load(&mut self, path: &Path) -> Result<String, EditorError> {
        let image = pixedit_io::read_image_any(path).map_err(EditorError::Decode)?;
        self.session.load(image);

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(format!("Image loaded successfully: {name}"))
    }

    fn save(&self, path: &Path) -> Result<String, EditorError> {
        let image = self.session.current()?;
        pixedit_io::write_image_png(path, image).map_err(EditorError::Encode)?;
        Ok(format!("Image saved successfully to {}", absolute_display(path)))
    }
}

// absolute form of the path for status messages, as given if it cannot be resolved
fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::{absolute_display, Action, Editor};
    use crate::error::{EditorError, SessionError};
    use pixedit_image::{Argb, PixelBuffer};
    use pixedit_imgproc::Filter;

    #[test]
    fn starts_ready_and_disabled() {
        let editor = Editor::new();
        assert_eq!(editor.status(), "Ready to edit...");
        assert!(!editor.controls_enabled());
    }

    #[test]
    fn actions_before_load_fail() {
        let mut editor = Editor::new();
        for action in [Action::Original, Action::Invert, Action::Grayscale] {
            let res = editor.dispatch(&action);
            assert!(matches!(
                res,
                Err(EditorError::Session(SessionError::NoImageLoaded))
            ));
            assert_eq!(editor.status(), "No image loaded.");
        }
        assert!(!editor.controls_enabled());
    }

    #[test]
    fn load_missing_file_keeps_session() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("missing.png");

        let mut editor = Editor::new();
        let res = editor.dispatch(&Action::Load(path));
        assert!(matches!(res, Err(EditorError::Decode(_))));
        assert!(editor.status().starts_with("Error loading image: "));
        assert!(!editor.controls_enabled());

        Ok(())
    }

    #[test]
    fn load_filter_save() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let input = tmp_dir.path().join("input.png");
        let output = tmp_dir.path().join("output.png");

        let image = PixelBuffer::from_size_val([4, 2].into(), Argb::new(255, 10, 20, 30).to_packed())?;
        pixedit_io::write_image_png(&input, &image)?;

        let mut editor = Editor::new();
        assert_eq!(
            editor.dispatch(&Action::Load(input))?,
            "Image loaded successfully: input.png"
        );
        assert!(editor.controls_enabled());

        assert_eq!(
            editor.dispatch(&Action::from(Filter::Grayscale))?,
            "Grayscale filter applied."
        );
        let status = editor.dispatch(&Action::Save(output.clone()))?.to_string();
        assert_eq!(
            status,
            format!("Image saved successfully to {}", output.display())
        );

        let saved = pixedit_io::read_image_any(&output)?;
        assert_eq!(saved.get_argb(3, 1)?, Argb::new(255, 18, 18, 18));

        Ok(())
    }

    #[test]
    fn save_status_reports_absolute_path() {
        let relative = std::path::Path::new("out").join("edited.png");
        let shown = absolute_display(&relative);

        assert!(std::path::Path::new(&shown).is_absolute(), "{shown}");
        assert!(shown.ends_with(&relative.display().to_string()), "{shown}");
    }

    #[test]
    fn load_jpeg_grayscale_save() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let input = tmp_dir.path().join("photo.jpg");
        let output = tmp_dir.path().join("photo-gray.png");

        let mut jpeg = Vec::new();
        let encoder = jpeg_encoder::Encoder::new(&mut jpeg, 100);
        encoder.encode(&[200u8, 100, 50].repeat(16 * 8), 16, 8, jpeg_encoder::ColorType::Rgb)?;
        std::fs::write(&input, jpeg)?;

        let mut editor = Editor::new();
        assert_eq!(
            editor.dispatch(&Action::Load(input))?,
            "Image loaded successfully: photo.jpg"
        );
        editor.dispatch(&Action::Grayscale)?;
        editor.dispatch(&Action::Save(output.clone()))?;

        let saved = pixedit_io::read_image_any(&output)?;
        assert_eq!(saved.width(), 16);
        assert_eq!(saved.height(), 8);
        assert_eq!(&saved, editor.session().current()?);
        for &px in saved.as_slice() {
            let px = Argb::from_packed(px);
            assert_eq!(px.a, 255);
            assert!(px.r == px.g && px.g == px.b);
            // luminance of (200, 100, 50) is 124
            assert!(px.r.abs_diff(124) <= 4, "{px:?}");
        }

        Ok(())
    }

    #[test]
    fn save_failure_reports_encode_error() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let input = tmp_dir.path().join("input.png");
        pixedit_io::write_image_png(&input, &PixelBuffer::create(1, 1)?)?;

        let mut editor = Editor::new();
        editor.dispatch(&Action::Load(input))?;

        let output = tmp_dir.path().join("no-such-dir").join("out.png");
        let res = editor.dispatch(&Action::Save(output));
        assert!(matches!(res, Err(EditorError::Encode(_))));
        assert!(editor.status().starts_with("Error saving image: "));
        assert!(editor.controls_enabled());

        Ok(())
    }
}
