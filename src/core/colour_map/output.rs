use crate::core::data::colour::Colour;

/// How evaluated colours are encoded for the consumer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// The native [`Colour`] pixel struct.
    NativePixel,
    /// Channels divided by 255 into `[0, 1]` floats.
    NormalizedFloatTriple,
    /// Raw integer byte triples.
    RawByteTriple,
}

/// A single evaluated colour in the configured encoding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MappedColour {
    Native(Colour),
    FloatTriple([f64; 3]),
    ByteTriple([u8; 3]),
}

impl MappedColour {
    #[must_use]
    pub fn from_colour(colour: Colour, mode: OutputMode) -> Self {
        match mode {
            OutputMode::NativePixel => Self::Native(colour),
            OutputMode::NormalizedFloatTriple => Self::FloatTriple([
                f64::from(colour.r) / 255.0,
                f64::from(colour.g) / 255.0,
                f64::from(colour.b) / 255.0,
            ]),
            OutputMode::RawByteTriple => Self::ByteTriple([colour.r, colour.g, colour.b]),
        }
    }
}
