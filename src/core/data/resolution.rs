use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    InvalidSize { pixels_x: u32, pixels_y: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { pixels_x, pixels_y } => {
                write!(
                    f,
                    "resolution must be at least 1x1: {}x{}",
                    pixels_x, pixels_y
                )
            }
        }
    }
}

impl Error for ResolutionError {}

/// Target pixel dimensions of a sampled grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    pixels_x: u32,
    pixels_y: u32,
}

impl Resolution {
    pub fn new(pixels_x: u32, pixels_y: u32) -> Result<Self, ResolutionError> {
        if pixels_x == 0 || pixels_y == 0 {
            return Err(ResolutionError::InvalidSize { pixels_x, pixels_y });
        }

        Ok(Self { pixels_x, pixels_y })
    }

    #[must_use]
    pub fn pixels_x(&self) -> u32 {
        self.pixels_x
    }

    #[must_use]
    pub fn pixels_y(&self) -> u32 {
        self.pixels_y
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixels_x as usize * self.pixels_y as usize
    }

    /// Width over height as implied by the pixel dimensions.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.pixels_x) / f64::from(self.pixels_y)
    }
}
