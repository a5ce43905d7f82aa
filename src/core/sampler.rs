use crate::core::data::complex::Complex;
use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// Samples a viewport into a grid of complex points.
///
/// `pixels_x` evenly spaced real values span `[left, left + width]` and
/// `pixels_y` evenly spaced imaginary values span `[top, top + height]`,
/// both ends inclusive; `grid[row][col] = re[col] + im[row]·i`.
///
/// Axis orientation is screen convention: row 0 carries `viewport.top` and
/// the imaginary part increases with the row index, so the row-major grid
/// (and every buffer derived from it) blits with its origin at the top-left
/// without a vertical flip. A single-pixel axis samples at the low bound.
#[must_use]
pub fn sample(viewport: &Viewport, resolution: Resolution) -> ComplexGrid {
    let reals = linspace(viewport.left(), viewport.right(), resolution.pixels_x());
    let imags = linspace(viewport.top(), viewport.bottom(), resolution.pixels_y());

    let mut points = Vec::with_capacity(resolution.pixel_count());

    for imag in &imags {
        for real in &reals {
            points.push(Complex {
                real: *real,
                imag: *imag,
            });
        }
    }

    ComplexGrid::from_points(resolution, points)
}

fn linspace(start: f64, end: f64, count: u32) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }

    let step = (end - start) / f64::from(count - 1);

    (0..count).map(|i| start + step * f64::from(i)).collect()
}
