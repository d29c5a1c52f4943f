//! In-place application of a normalization range

use crate::types::{Bounds, SampleGrid};

/// Rewrite `grid` in place, mapping `[min, max]` linearly onto [0, 1]
///
/// Values equal to `ignore_value` are left untouched and not counted. Values
/// outside the range become 1.0 / 0.0 when `clamp` is set, or `ignore_value`
/// otherwise; the number of such outliers is returned.
///
/// A collapsed range (`delta == 0`) admits `min` as its only in-range value
/// and maps it to exactly 0.0 instead of dividing by zero. An inverted range
/// (`min > max`) admits no in-range value at all, so every valid sample is an
/// outlier and `delta` is never used.
pub fn apply_range(
    grid: &mut SampleGrid,
    bounds: Bounds,
    ignore_value: f32,
    clamp: bool,
) -> usize {
    let delta = bounds.delta();
    let divisor = if delta == 0.0 { 1.0 } else { delta };

    let mut outliers = 0;
    for index in 0..grid.element_count() {
        let value = grid.get(index);

        if value == ignore_value {
            continue;
        }

        if value >= bounds.min {
            if value <= bounds.max {
                grid.set(index, (value - bounds.min) / divisor);
            } else {
                grid.set(index, if clamp { 1.0 } else { ignore_value });
                outliers += 1;
            }
        } else {
            grid.set(index, if clamp { 0.0 } else { ignore_value });
            outliers += 1;
        }
    }

    outliers
}
