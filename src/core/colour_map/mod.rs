pub mod map;
pub mod output;

pub use map::{ColourMap, ColourMapError};
pub use output::{MappedColour, OutputMode};
