use crate::core::data::resolution::Resolution;

/// A row-major field of normalized stability values.
///
/// Each value is in `[0, 1]`: 0 marks the fastest divergence, 1 a point
/// that never escaped within the iteration budget.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityField {
    resolution: Resolution,
    values: Vec<f64>,
}

impl StabilityField {
    /// Callers must supply exactly `resolution.pixel_count()` values in
    /// row-major order.
    #[must_use]
    pub fn from_values(resolution: Resolution, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), resolution.pixel_count());

        Self { resolution, values }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn value(&self, row: u32, col: u32) -> f64 {
        self.values[row as usize * self.resolution.pixels_x() as usize + col as usize]
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
