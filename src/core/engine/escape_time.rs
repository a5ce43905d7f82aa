use crate::core::data::complex::Complex;
use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::stability_field::StabilityField;
use crate::core::engine::params::{FractalKind, FractalParameters};
use std::f64::consts::LN_2;

/// Magnitude-squared form of the escape radius 2; beyond it divergence is
/// guaranteed for the quadratic map.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Computes the normalized stability of a single grid point.
///
/// Mandelbrot seeds `z = 0, c = point`; Julia seeds `z = point` with its
/// fixed parameter. The loop applies `z = z² + c` while the trajectory
/// stays within the escape radius, recording the index of the last update
/// applied; once escaped, the point is left alone. With smoothing enabled,
/// escaped counts are refined to `count + 1 - ln(ln|z|)/ln 2`; if that
/// renormalization is not a number (|z| <= 1 at escape) the point is
/// treated as non-escaped rather than letting NaN into the field.
#[must_use]
pub fn point_stability(point: Complex, params: &FractalParameters) -> f64 {
    let (mut z, c) = match params.kind() {
        FractalKind::Mandelbrot => (Complex::ZERO, point),
        FractalKind::Julia { c } => (point, c),
    };

    let max_iterations = params.max_iterations();
    let mut count: u32 = 0;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            break;
        }
        z = z * z + c;
        count = iteration;
    }

    let escaped = z.magnitude_squared() > ESCAPE_RADIUS_SQUARED;

    let value = if !escaped {
        f64::from(max_iterations)
    } else if params.smoothing() {
        let smoothed = f64::from(count) + 1.0 - z.magnitude().ln().ln() / LN_2;
        if smoothed.is_nan() {
            f64::from(max_iterations)
        } else {
            smoothed
        }
    } else {
        f64::from(count)
    };

    (value / f64::from(max_iterations)).clamp(0.0, 1.0)
}

/// Turns a sampled grid into a stability field, sequentially.
///
/// Deterministic: identical inputs yield bit-identical fields. For the
/// row-parallel variant see [`crate::core::engine::parallel`].
#[must_use]
pub fn generate(grid: ComplexGrid, params: &FractalParameters) -> StabilityField {
    let resolution = grid.resolution();
    let values = grid
        .points()
        .iter()
        .map(|point| point_stability(*point, params))
        .collect();

    StabilityField::from_values(resolution, values)
}
