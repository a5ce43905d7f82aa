use crate::controllers::ports::FilePresenterPort;
use crate::core::data::pixel_colour_buffer::PixelColourBuffer;
use crate::storage::write_ppm::write_ppm;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(
        &self,
        buffer: &PixelColourBuffer,
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        write_ppm(buffer, filepath)
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
