use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Viewport, ViewportError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractionalRectError {
    InvalidFraction {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
}

impl fmt::Display for FractionalRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFraction {
                left,
                top,
                width,
                height,
            } => {
                write!(
                    f,
                    "fractional rect must be a positive sub-rectangle of [0, 1]²: \
                     left {} top {} width {} height {}",
                    left, top, width, height
                )
            }
        }
    }
}

impl Error for FractionalRectError {}

/// A sub-rectangle of the current view, in fractions of the viewport on
/// each axis.
///
/// Pan gestures are expressed this way so every pan recomputes from the
/// last authoritative bounds instead of integrating pixel deltas, which
/// would accumulate drift.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractionalRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl FractionalRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, FractionalRectError> {
        let valid = left >= 0.0
            && top >= 0.0
            && width > 0.0
            && height > 0.0
            && left + width <= 1.0
            && top + height <= 1.0;

        if !valid {
            return Err(FractionalRectError::InvalidFraction {
                left,
                top,
                width,
                height,
            });
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
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportControllerError {
    NonPositiveZoomFactor { factor: f64 },
    Viewport(ViewportError),
}

impl fmt::Display for ViewportControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite: {}", factor)
            }
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
        }
    }
}

impl Error for ViewportControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NonPositiveZoomFactor { .. } => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ViewportControllerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Owns the current view bounds and derives new bounds from zoom and pan
/// requests.
///
/// Pure state transitions only: no event loop, no rendering surface. The
/// bounds' aspect ratio always tracks the ratio implied by the target
/// resolution; any request that would violate that has its height
/// recomputed from the width rather than trusted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    viewport: Viewport,
    resolution: Resolution,
}

impl ViewportController {
    pub fn new(viewport: Viewport, resolution: Resolution) -> Result<Self, ViewportControllerError> {
        let viewport = constrain_to_aspect(&viewport, resolution)?;

        Ok(Self {
            viewport,
            resolution,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Scales the view by `1 / factor` (factor > 1 zooms in) about
    /// `anchor`, or about the viewport centre when no anchor is given.
    /// The anchor keeps its fractional position inside the view, so
    /// zooming in and back out about the same anchor round-trips.
    pub fn zoom(
        &mut self,
        factor: f64,
        anchor: Option<Complex>,
    ) -> Result<Viewport, ViewportControllerError> {
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(ViewportControllerError::NonPositiveZoomFactor { factor });
        }

        let anchor = anchor.unwrap_or_else(|| self.viewport.centre());

        let left = anchor.real - (anchor.real - self.viewport.left()) / factor;
        let top = anchor.imag - (anchor.imag - self.viewport.top()) / factor;
        let width = self.viewport.width() / factor;
        let height = self.viewport.height() / factor;

        let requested = Viewport::new(left, top, width, height)?;
        self.viewport = constrain_to_aspect(&requested, self.resolution)?;

        Ok(self.viewport)
    }

    /// Restricts the view to `visible`, mapped back into complex-plane
    /// coordinates from the last authoritative bounds.
    pub fn pan(&mut self, visible: FractionalRect) -> Result<Viewport, ViewportControllerError> {
        let left = self.viewport.left() + visible.left() * self.viewport.width();
        let top = self.viewport.top() + visible.top() * self.viewport.height();
        let width = visible.width() * self.viewport.width();
        let height = visible.height() * self.viewport.height();

        let requested = Viewport::new(left, top, width, height)?;
        self.viewport = constrain_to_aspect(&requested, self.resolution)?;

        Ok(self.viewport)
    }

    /// Adopts a new target resolution, re-deriving the bounds' height for
    /// the new aspect ratio.
    pub fn resize(&mut self, resolution: Resolution) -> Result<Viewport, ViewportControllerError> {
        self.resolution = resolution;
        self.viewport = constrain_to_aspect(&self.viewport, resolution)?;

        Ok(self.viewport)
    }
}

/// Height recomputed from width and the resolution aspect; width is the
/// authoritative axis.
fn constrain_to_aspect(
    viewport: &Viewport,
    resolution: Resolution,
) -> Result<Viewport, ViewportControllerError> {
    let height = viewport.width() / resolution.aspect_ratio();

    Ok(Viewport::new(
        viewport.left(),
        viewport.top(),
        viewport.width(),
        height,
    )?)
}
