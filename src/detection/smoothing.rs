//! Trend smoothing: window sizing and the moving-median baseline.

use crate::transform::median_filter;

/// Number of samples covering `smoothing_duration` seconds.
///
/// `floor(smoothing_duration / sampling_rate)`, never less than 1. A zero
/// sampling rate gives an unbounded ratio, which saturates to `usize::MAX`;
/// the filter handles such windows without materialising them.
pub fn smoothing_window(sampling_rate: f64, smoothing_duration: f64) -> usize {
    let ratio = (smoothing_duration / sampling_rate).floor();
    // `as` saturates: +inf -> usize::MAX, NaN and negatives -> 0
    (ratio as usize).max(1)
}

/// Moving-median baseline of `values`.
///
/// The output has the same length and indexing as the input. A window of 1
/// leaves the values unchanged. See [`crate::transform::window`] for the
/// boundary convention.
pub fn smooth(values: &[f64], window: usize) -> Vec<f64> {
    median_filter(values, window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_from_rate_and_duration() {
        assert_eq!(smoothing_window(1.0, 60.0), 60);
        assert_eq!(smoothing_window(0.99, 10.0), 10);
        assert_eq!(smoothing_window(2.0, 5.0), 2);
    }

    #[test]
    fn window_has_minimum_of_one() {
        assert_eq!(smoothing_window(10.0, 5.0), 1);
        assert_eq!(smoothing_window(100.0, 1.0), 1);
    }

    #[test]
    fn window_with_zero_rate_saturates() {
        assert_eq!(smoothing_window(0.0, 60.0), usize::MAX);
    }

    #[test]
    fn smooth_preserves_length() {
        let values: Vec<f64> = (0..37).map(|i| (i as f64 * 0.3).sin()).collect();
        for window in [1, 2, 5, 36, 37, 100] {
            assert_eq!(smooth(&values, window).len(), values.len());
        }
    }

    #[test]
    fn smooth_with_unit_window_is_identity() {
        let values = vec![1.0, 100.0, -3.0];
        assert_eq!(smooth(&values, 1), values);
    }
}
