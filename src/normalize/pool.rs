//! Sample pooling across the statistics sources

use crate::types::SampleGrid;

/// Collect every valid value from the given grids into one combined buffer
///
/// A value is valid iff it is not exactly equal to `ignore_value`. The buffer
/// is sized up front from the total element count of all grids; its order
/// carries no meaning and later stages are free to rearrange it. The grids
/// themselves are only read.
#[must_use]
pub fn pool_valid_samples(grids: &[&SampleGrid], ignore_value: f32) -> Vec<f32> {
    let total: usize = grids.iter().map(|grid| grid.element_count()).sum();

    let mut values = Vec::with_capacity(total);
    for grid in grids {
        values.extend(
            grid.samples()
                .iter()
                .copied()
                .filter(|&value| value != ignore_value),
        );
    }

    values
}
