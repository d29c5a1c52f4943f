//! Trimmed range estimation via order-statistic selection

use super::error::EstimateError;
use crate::types::Bounds;
use std::cmp::Ordering;

/// Estimated normalization range plus the untrimmed extrema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeEstimate {
    pub bounds: Bounds,
    /// Exact minimum over the full pool, for diagnostics
    pub real_min: f32,
    /// Exact maximum over the full pool, for diagnostics
    pub real_max: f32,
}

/// Derive the normalization range from the pooled values
///
/// An override, when present, is used verbatim. Otherwise the bound is the
/// value at trimmed rank `c = floor(len * epsilon / 2)` from the corresponding
/// end of the sort order, found with a linear-time selection rather than a
/// full sort; the minimum and maximum selections run independently over the
/// same buffer. With `c == 0` the selected bounds equal the true extrema.
///
/// No check forces `min <= max` afterwards: a large epsilon can produce an
/// inverted range, which is returned as-is (only explicit overrides are
/// validated, at configuration time). `apply_range` gives the degenerate
/// cases defined behavior.
///
/// The buffer may be arbitrarily reordered.
///
/// # Errors
///
/// Returns [`EstimateError::EmptyPool`] if `values` is empty.
pub fn estimate_range(
    values: &mut [f32],
    epsilon: f32,
    minimum: Option<f32>,
    maximum: Option<f32>,
) -> Result<RangeEstimate, EstimateError> {
    debug_assert!((0.0..=1.0).contains(&epsilon));

    if values.is_empty() {
        return Err(EstimateError::EmptyPool);
    }

    let (real_min, real_max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &value| {
            (min.min(value), max.max(value))
        });

    // Half the trimmed fraction is discarded from each tail
    let trim = (values.len() as f64 * f64::from(epsilon) / 2.0) as usize;

    let min = minimum.unwrap_or_else(|| {
        let (_, nth, _) = values.select_nth_unstable_by(trim, cmp_samples);
        *nth
    });

    let max = maximum.unwrap_or_else(|| {
        let (_, nth, _) = values.select_nth_unstable_by(trim, |a, b| cmp_samples(b, a));
        *nth
    });

    Ok(RangeEstimate {
        bounds: Bounds::new(min, max),
        real_min,
        real_max,
    })
}

#[inline]
fn cmp_samples(a: &f32, b: &f32) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
