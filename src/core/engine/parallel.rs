use rayon::prelude::*;

use crate::core::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::stability_field::StabilityField;
use crate::core::engine::escape_time::point_stability;
use crate::core::engine::params::FractalParameters;

/// Row-parallel stability field generation on rayon's work-stealing pool.
///
/// Every pixel's trajectory depends only on its own coordinate, so rows
/// partition with no shared mutable state; the ordered collect gathers
/// them back in row-major order, making the output bit-identical to the
/// sequential [`crate::core::engine::escape_time::generate`].
#[must_use]
pub fn generate_parallel(grid: ComplexGrid, params: &FractalParameters) -> StabilityField {
    match generate_parallel_cancelable(grid, params, &NeverCancel) {
        Ok(field) => field,
        // NeverCancel never signals cancellation
        Err(Cancelled) => unreachable!("NeverCancel token cancelled a computation"),
    }
}

/// Like [`generate_parallel`], but checks the token once per row and bails
/// out with [`Cancelled`] so a superseded viewport stops burning CPU.
pub fn generate_parallel_cancelable<C: CancelToken>(
    grid: ComplexGrid,
    params: &FractalParameters,
    cancel: &C,
) -> Result<StabilityField, Cancelled> {
    let resolution = grid.resolution();

    let rows: Result<Vec<Vec<f64>>, Cancelled> = grid
        .rows()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|row| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            Ok(row
                .iter()
                .map(|point| point_stability(*point, params))
                .collect())
        })
        .collect();

    let values = rows?.into_iter().flatten().collect();

    Ok(StabilityField::from_values(resolution, values))
}
