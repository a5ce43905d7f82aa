use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Which quadratic iteration rule to apply.
///
/// A closed, exhaustive set dispatched by match; the two rules share the
/// update `z = z² + c` and differ only in what seeds `z` and `c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalKind {
    Mandelbrot,
    Julia { c: Complex },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FractalParametersError {
    ZeroMaxIterations,
}

impl fmt::Display for FractalParametersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for FractalParametersError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParameters {
    kind: FractalKind,
    max_iterations: u32,
    smoothing: bool,
}

impl FractalParameters {
    pub fn new(
        kind: FractalKind,
        max_iterations: u32,
        smoothing: bool,
    ) -> Result<Self, FractalParametersError> {
        if max_iterations == 0 {
            return Err(FractalParametersError::ZeroMaxIterations);
        }

        Ok(Self {
            kind,
            max_iterations,
            smoothing,
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn smoothing(&self) -> bool {
        self.smoothing
    }
}
