pub mod buffer;
pub mod grayscale;

pub use buffer::PixelBuffer;
pub use grayscale::{convert_in_place, luminance};
