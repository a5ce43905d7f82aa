use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;

/// A row-major grid of complex sample points.
///
/// Produced only by [`crate::core::sampler::sample`]; moved by value into
/// the escape-time engine and never mutated in between.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    resolution: Resolution,
    points: Vec<Complex>,
}

impl ComplexGrid {
    /// Callers must supply exactly `resolution.pixel_count()` points in
    /// row-major order.
    #[must_use]
    pub(crate) fn from_points(resolution: Resolution, points: Vec<Complex>) -> Self {
        debug_assert_eq!(points.len(), resolution.pixel_count());

        Self { resolution, points }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn point(&self, row: u32, col: u32) -> Complex {
        self.points[row as usize * self.resolution.pixels_x() as usize + col as usize]
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    /// Row-major rows, each `pixels_x` long.
    pub fn rows(&self) -> impl Iterator<Item = &[Complex]> {
        self.points.chunks(self.resolution.pixels_x() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_indexing_is_row_major() {
        let resolution = Resolution::new(3, 2).unwrap();
        let points: Vec<Complex> = (0..6)
            .map(|i| Complex {
                real: f64::from(i),
                imag: 0.0,
            })
            .collect();
        let grid = ComplexGrid::from_points(resolution, points);

        assert_eq!(grid.point(0, 0).real, 0.0);
        assert_eq!(grid.point(0, 2).real, 2.0);
        assert_eq!(grid.point(1, 0).real, 3.0);
        assert_eq!(grid.point(1, 2).real, 5.0);
    }

    #[test]
    fn test_rows_chunk_by_pixels_x() {
        let resolution = Resolution::new(2, 3).unwrap();
        let points = vec![Complex::ZERO; 6];
        let grid = ComplexGrid::from_points(resolution, points);

        let rows: Vec<&[Complex]> = grid.rows().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 2));
    }
}
