#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the session and the editor.
pub mod error;

/// The original/current two-buffer edit session.
pub mod session;

/// Shell-facing action dispatch with status messages.
pub mod editor;

pub use crate::editor::{Action, Editor};
pub use crate::error::{EditorError, SessionError};
pub use crate::session::{EditSession, SessionState};
