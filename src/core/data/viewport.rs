use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// A rectangular region of the complex plane.
///
/// `left`/`top` name the corner with the smallest real and imaginary parts;
/// the imaginary axis follows screen convention (row 0 of a sampled grid
/// carries `top`, see [`crate::core::sampler::sample`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, ViewportError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex {
            real: self.left + self.width / 2.0,
            imag: self.top + self.height / 2.0,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        self.left <= point.real
            && point.real <= self.right()
            && self.top <= point.imag
            && point.imag <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, -2.0, 4.0, 4.0).unwrap();

        assert_eq!(viewport.left(), -2.0);
        assert_eq!(viewport.top(), -2.0);
        assert_eq!(viewport.width(), 4.0);
        assert_eq!(viewport.height(), 4.0);
        assert_eq!(viewport.right(), 2.0);
        assert_eq!(viewport.bottom(), 2.0);
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        let zero_width = Viewport::new(0.0, 0.0, 0.0, 1.0);
        let negative_width = Viewport::new(0.0, 0.0, -1.0, 1.0);
        let zero_height = Viewport::new(0.0, 0.0, 1.0, 0.0);
        let negative_height = Viewport::new(0.0, 0.0, 1.0, -1.0);

        assert_eq!(
            zero_width,
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            negative_width,
            Err(ViewportError::InvalidSize {
                width: -1.0,
                height: 1.0
            })
        );
        assert_eq!(
            zero_height,
            Err(ViewportError::InvalidSize {
                width: 1.0,
                height: 0.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ViewportError::InvalidSize {
                width: 1.0,
                height: -1.0
            })
        );
    }

    #[test]
    fn test_viewport_centre() {
        let viewport = Viewport::new(-2.5, -1.0, 3.5, 2.0).unwrap();
        let centre = viewport.centre();

        assert_eq!(centre.real, -0.75);
        assert_eq!(centre.imag, 0.0);
    }

    #[test]
    fn test_viewport_contains() {
        let viewport = Viewport::new(-2.0, -1.0, 3.0, 2.0).unwrap();

        assert!(viewport.contains(Complex { real: 0.0, imag: 0.0 }));
        assert!(viewport.contains(Complex {
            real: -2.0,
            imag: -1.0
        }));
        assert!(viewport.contains(Complex { real: 1.0, imag: 1.0 }));
        assert!(!viewport.contains(Complex { real: 1.1, imag: 0.0 }));
        assert!(!viewport.contains(Complex {
            real: 0.0,
            imag: -1.5
        }));
    }
}
