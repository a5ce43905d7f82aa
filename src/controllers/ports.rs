use crate::core::data::pixel_colour_buffer::PixelColourBuffer;
use std::path::Path;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelColourBuffer, filepath: impl AsRef<Path>)
    -> std::io::Result<()>;
}
