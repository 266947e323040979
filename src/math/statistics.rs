use num_traits::Float;
use std::cmp::Ordering;

/// Percentile of already sorted values using linear interpolation
///
/// `q` is in [0, 100]. The rank `q / 100 * (n - 1)` is interpolated between
/// its two closest sorted values. Returns `None` for empty input or a `q`
/// outside [0, 100].
pub fn percentile_sorted<T: Float>(sorted: &[T], q: T) -> Option<T> {
    let hundred = T::from(100.0)?;
    if sorted.is_empty() || !(q >= T::zero() && q <= hundred) {
        return None;
    }

    let last = T::from(sorted.len() - 1)?;
    let rank = q / hundred * last;
    let lower = rank.floor();
    let upper = rank.ceil();

    let lower_value = *sorted.get(lower.to_usize()?)?;
    let upper_value = *sorted.get(upper.to_usize()?)?;

    Some(lower_value + (upper_value - lower_value) * (rank - lower))
}

/// Distance between two percentiles of unsorted values
///
/// Sorts `values` in place. Returns `None` if `values` is empty or a
/// percentile is outside [0, 100].
pub fn percentile_spread<T: Float>(values: &mut [T], lower: T, upper: T) -> Option<T> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let low = percentile_sorted(values, lower)?;
    let high = percentile_sorted(values, upper)?;
    Some(high - low)
}
