use crate::core::data::pixel_colour_buffer::PixelColourBuffer;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(buffer: &PixelColourBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    let width = buffer.resolution().pixels_x();
    let height = buffer.resolution().pixels_y();

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(&buffer.rgb_bytes())?;

    Ok(())
}
