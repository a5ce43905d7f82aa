use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;

/// Per-pixel colour storage for one of the three output encodings.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    /// Native pixel structs.
    Native(Vec<Colour>),
    /// Channels normalized to `[0, 1]`.
    FloatTriples(Vec<[f64; 3]>),
    /// Packed RGB bytes, 3 per pixel.
    ByteTriples(Vec<u8>),
}

/// The rendered frame handed across to the external renderer.
///
/// Row-major, origin at the top-left; same dimensions as the stability
/// field it was evaluated from.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelColourBuffer {
    resolution: Resolution,
    data: PixelData,
}

impl PixelColourBuffer {
    #[must_use]
    pub fn new(resolution: Resolution, data: PixelData) -> Self {
        debug_assert_eq!(
            match &data {
                PixelData::Native(pixels) => pixels.len(),
                PixelData::FloatTriples(pixels) => pixels.len(),
                PixelData::ByteTriples(bytes) => bytes.len() / 3,
            },
            resolution.pixel_count()
        );

        Self { resolution, data }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn data(&self) -> &PixelData {
        &self.data
    }

    /// Packed RGB bytes regardless of encoding, for blitting or PPM output.
    #[must_use]
    pub fn rgb_bytes(&self) -> Vec<u8> {
        match &self.data {
            PixelData::Native(pixels) => pixels
                .iter()
                .flat_map(|colour| [colour.r, colour.g, colour.b])
                .collect(),
            PixelData::FloatTriples(pixels) => pixels
                .iter()
                .flat_map(|[r, g, b]| {
                    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
                })
                .collect(),
            PixelData::ByteTriples(bytes) => bytes.clone(),
        }
    }
}
