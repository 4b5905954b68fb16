#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// named filters applied by the editor.
pub mod filter;

pub use filter::{Filter, FilterError};
