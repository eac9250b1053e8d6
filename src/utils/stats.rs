//! Statistical utility functions.

use std::cmp::Ordering;

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population variance of a slice (n denominator).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / values.len() as f64
}

/// Calculate the population standard deviation of a slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Difference between the largest and smallest value.
///
/// Zero means every value is identical.
pub fn range(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    max - min
}

/// Element of rank `len / 2` in sorted order.
///
/// For odd lengths this is the median; for even lengths it is the upper of
/// the two middle elements, so the result is always one of the inputs.
/// Reorders `values` in place.
pub fn upper_median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let rank = values.len() / 2;
    let (_, nth, _) =
        values.select_nth_unstable_by(rank, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    *nth
}
