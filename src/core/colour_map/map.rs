use crate::core::colour_map::output::{MappedColour, OutputMode};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_colour_buffer::{PixelColourBuffer, PixelData};
use crate::core::data::stability_field::StabilityField;
use std::error::Error;
use std::fmt;

/// Nominal lookup-table budget; the realized length is slightly shorter
/// whenever the segment count does not divide it evenly.
const NOMINAL_TABLE_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum ColourMapError {
    /// Fewer than two anchors, or so many that a segment would degenerate
    /// to fewer than two samples.
    InvalidConfiguration { anchors: usize },
    /// A scalar evaluation outside `[0, 1]`.
    OutOfRange { value: f64 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { anchors } => {
                write!(
                    f,
                    "colour map needs between 2 and {} anchors, got {}",
                    NOMINAL_TABLE_SIZE / 2 + 1,
                    anchors
                )
            }
            Self::OutOfRange { value } => {
                write!(f, "value must be between 0 and 1, got {}", value)
            }
        }
    }
}

impl Error for ColourMapError {}

/// A colour lookup table built from ordered anchor colours.
///
/// With `S = anchors - 1` segments, each segment contributes
/// `floor(256 / S)` samples interpolated per channel with floor division;
/// the realized table length `N` is fixed at construction and may fall
/// short of 256.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourMap {
    table: Vec<Colour>,
    mode: OutputMode,
}

impl ColourMap {
    pub fn build(anchors: &[Colour], mode: OutputMode) -> Result<Self, ColourMapError> {
        if anchors.len() < 2 {
            return Err(ColourMapError::InvalidConfiguration {
                anchors: anchors.len(),
            });
        }

        let segments = anchors.len() - 1;
        let samples_per_segment = NOMINAL_TABLE_SIZE / segments;

        if samples_per_segment < 2 {
            return Err(ColourMapError::InvalidConfiguration {
                anchors: anchors.len(),
            });
        }

        let mut table = Vec::with_capacity(segments * samples_per_segment);

        for pair in anchors.windows(2) {
            push_gradient(pair[0], pair[1], samples_per_segment, &mut table);
        }

        Ok(Self { table, mode })
    }

    /// Realized lookup-table length `N`.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Evaluates a single stability value.
    ///
    /// Unlike [`Self::evaluate_field`], out-of-range input is a hard
    /// error: nothing is clamped and no colour is returned.
    pub fn evaluate(&self, value: f64) -> Result<MappedColour, ColourMapError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColourMapError::OutOfRange { value });
        }

        Ok(MappedColour::from_colour(self.lookup(value), self.mode))
    }

    /// Evaluates a whole stability field into a pixel colour buffer.
    ///
    /// Unlike [`Self::evaluate`], out-of-range entries are clamped to
    /// `[0, 1]` with a single stderr diagnostic, and evaluation
    /// continues: a whole frame is not worth losing over a stray entry,
    /// while a single bad scalar is always a caller bug.
    #[must_use]
    pub fn evaluate_field(&self, field: &StabilityField) -> PixelColourBuffer {
        let mut clamped_count: usize = 0;

        let colours: Vec<Colour> = field
            .values()
            .iter()
            .map(|&value| {
                let value = if (0.0..=1.0).contains(&value) {
                    value
                } else {
                    clamped_count += 1;
                    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
                };

                self.lookup(value)
            })
            .collect();

        if clamped_count > 0 {
            eprintln!(
                "colour map: clamped {} field value(s) outside [0, 1]",
                clamped_count
            );
        }

        let data = match self.mode {
            OutputMode::NativePixel => PixelData::Native(colours),
            OutputMode::NormalizedFloatTriple => PixelData::FloatTriples(
                colours
                    .iter()
                    .map(|c| {
                        [
                            f64::from(c.r) / 255.0,
                            f64::from(c.g) / 255.0,
                            f64::from(c.b) / 255.0,
                        ]
                    })
                    .collect(),
            ),
            OutputMode::RawByteTriple => {
                PixelData::ByteTriples(colours.iter().flat_map(|c| [c.r, c.g, c.b]).collect())
            }
        };

        PixelColourBuffer::new(field.resolution(), data)
    }

    fn lookup(&self, value: f64) -> Colour {
        let index = (value * (self.table.len() - 1) as f64) as usize;

        self.table[index]
    }
}

/// Appends `n` colours interpolating `[start, end]` per channel.
///
/// Floor division (`div_euclid`), not Rust's truncating `/`: on a
/// descending channel the two disagree and only floor reproduces the
/// reference tables.
fn push_gradient(start: Colour, end: Colour, n: usize, out: &mut Vec<Colour>) {
    let interpolate = |c0: u8, c1: u8, i: usize| -> u8 {
        let delta = i64::from(c1) - i64::from(c0);
        let offset = (delta * i as i64).div_euclid(n as i64 - 1);

        (i64::from(c0) + offset) as u8
    };

    for i in 0..n {
        out.push(Colour {
            r: interpolate(start.r, end.r, i),
            g: interpolate(start.g, end.g, i),
            b: interpolate(start.b, end.b, i),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::NamedColour;
    use crate::core::data::resolution::Resolution;

    const RED: Colour = Colour { r: 255, g: 0, b: 0 };
    const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    fn red_black_map(mode: OutputMode) -> ColourMap {
        ColourMap::build(&[RED, BLACK], mode).unwrap()
    }

    #[test]
    fn test_build_requires_at_least_two_anchors() {
        let none = ColourMap::build(&[], OutputMode::NativePixel);
        let one = ColourMap::build(&[RED], OutputMode::NativePixel);

        assert_eq!(none, Err(ColourMapError::InvalidConfiguration { anchors: 0 }));
        assert_eq!(one, Err(ColourMapError::InvalidConfiguration { anchors: 1 }));
    }

    #[test]
    fn test_build_rejects_degenerate_segments() {
        // 130 anchors → 129 segments → floor(256 / 129) = 1 sample each
        let anchors = vec![RED; 130];
        let result = ColourMap::build(&anchors, OutputMode::NativePixel);

        assert_eq!(
            result,
            Err(ColourMapError::InvalidConfiguration { anchors: 130 })
        );
    }

    #[test]
    fn test_single_segment_realizes_256_entries() {
        let map = red_black_map(OutputMode::NativePixel);

        assert_eq!(map.table_len(), 256);
    }

    #[test]
    fn test_realized_length_reflects_floor_division() {
        // 4 anchors → 3 segments → floor(256 / 3) = 85 samples → N = 255
        let anchors = [RED, NamedColour::Green.rgb(), NamedColour::Blue.rgb(), BLACK];
        let map = ColourMap::build(&anchors, OutputMode::NativePixel).unwrap();

        assert_eq!(map.table_len(), 255);
    }

    #[test]
    fn test_evaluate_zero_returns_the_first_anchor() {
        let map = red_black_map(OutputMode::NativePixel);

        assert_eq!(map.evaluate(0.0), Ok(MappedColour::Native(RED)));
    }

    #[test]
    fn test_evaluate_one_lands_on_the_end_anchor() {
        // floor-division interpolation hits the end anchor exactly at the
        // last sample; allow one table step of slack all the same
        let map = red_black_map(OutputMode::NativePixel);

        let MappedColour::Native(colour) = map.evaluate(1.0).unwrap() else {
            panic!("native mode must yield a native pixel");
        };

        assert!(colour.r <= 1);
        assert_eq!(colour.g, BLACK.g);
        assert_eq!(colour.b, BLACK.b);
    }

    #[test]
    fn test_interior_anchor_is_hit_at_segment_boundary() {
        // 3 anchors → 2 segments of 128; index 127 is the last sample of
        // the first segment and equals the middle anchor exactly
        let green = NamedColour::Green.rgb();
        let map = ColourMap::build(&[RED, green, BLACK], OutputMode::NativePixel).unwrap();

        let value = 127.0 / 255.0;

        assert_eq!(map.evaluate(value), Ok(MappedColour::Native(green)));
    }

    #[test]
    fn test_descending_channels_use_floor_division() {
        // delta -3 over 255 steps: floor(-3 * 1 / 255) = -1, while
        // truncating division would give 0 and hold the channel at 3
        let dark_red = Colour { r: 3, g: 0, b: 0 };
        let map = ColourMap::build(&[dark_red, BLACK], OutputMode::NativePixel).unwrap();

        let MappedColour::Native(colour) = map.evaluate(1.0 / 255.0).unwrap() else {
            panic!("native mode must yield a native pixel");
        };

        assert_eq!(colour.r, 2);
    }

    #[test]
    fn test_scalar_evaluation_out_of_range_is_a_hard_error() {
        let map = red_black_map(OutputMode::NativePixel);

        assert_eq!(
            map.evaluate(1.5),
            Err(ColourMapError::OutOfRange { value: 1.5 })
        );
        assert_eq!(
            map.evaluate(-0.1),
            Err(ColourMapError::OutOfRange { value: -0.1 })
        );
    }

    #[test]
    fn test_field_evaluation_clamps_instead_of_failing() {
        let map = red_black_map(OutputMode::NativePixel);
        let resolution = Resolution::new(3, 1).unwrap();
        let field = StabilityField::from_values(resolution, vec![0.0, 1.5, -0.5]);

        let buffer = map.evaluate_field(&field);

        let PixelData::Native(pixels) = buffer.data() else {
            panic!("native mode must yield native pixels");
        };

        let at_one = match map.evaluate(1.0).unwrap() {
            MappedColour::Native(colour) => colour,
            _ => unreachable!(),
        };
        let at_zero = match map.evaluate(0.0).unwrap() {
            MappedColour::Native(colour) => colour,
            _ => unreachable!(),
        };

        assert_eq!(pixels[1], at_one);
        assert_eq!(pixels[2], at_zero);
    }

    #[test]
    fn test_field_evaluation_in_float_mode() {
        let map = red_black_map(OutputMode::NormalizedFloatTriple);
        let resolution = Resolution::new(1, 1).unwrap();
        let field = StabilityField::from_values(resolution, vec![0.0]);

        let buffer = map.evaluate_field(&field);

        assert_eq!(
            buffer.data(),
            &PixelData::FloatTriples(vec![[1.0, 0.0, 0.0]])
        );
    }

    #[test]
    fn test_field_evaluation_in_byte_mode_packs_rgb() {
        let map = red_black_map(OutputMode::RawByteTriple);
        let resolution = Resolution::new(2, 1).unwrap();
        let field = StabilityField::from_values(resolution, vec![0.0, 0.0]);

        let buffer = map.evaluate_field(&field);

        assert_eq!(
            buffer.data(),
            &PixelData::ByteTriples(vec![255, 0, 0, 255, 0, 0])
        );
    }
}
