mod gray;
mod invert;

pub use gray::{gray_pixel, grayscale, luminance};
pub use invert::{invert, invert_pixel};
