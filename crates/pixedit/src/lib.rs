//! Load an image, apply invert or grayscale, restore the original and save
//! the result as PNG.
//!
//! ```
//! use pixedit::editor::EditSession;
//! use pixedit::image::PixelBuffer;
//! use pixedit::imgproc::Filter;
//!
//! let mut session = EditSession::new();
//! session.load(PixelBuffer::from_size_val([2, 1].into(), 0xFF0A_141E).unwrap());
//! session.apply_filter(Filter::Grayscale).unwrap();
//!
//! assert_eq!(session.current().unwrap().as_slice(), &[0xFF12_1212, 0xFF12_1212]);
//! ```

#[doc(inline)]
pub use pixedit_image as image;

#[doc(inline)]
pub use pixedit_imgproc as imgproc;

#[doc(inline)]
pub use pixedit_io as io;

#[doc(inline)]
pub use pixedit_editor as editor;
