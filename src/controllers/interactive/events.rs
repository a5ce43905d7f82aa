use crate::core::data::pixel_colour_buffer::PixelColourBuffer;
use std::time::Duration;

/// A completed frame, tagged with the request generation that produced it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelColourBuffer,
    pub render_duration: Duration,
}
