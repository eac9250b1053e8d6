//! Residual-based thresholding.
//!
//! Flags points whose absolute deviation from the smoothed baseline exceeds
//! `mean + factor * std` of all residuals (population statistics).

use crate::error::{AnomalyError, Result};
use crate::utils::stats::{mean, population_std_dev, range};

/// Result of thresholding a residual sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdResult {
    /// Absolute residual `|raw - smoothed|` for each point.
    pub residuals: Vec<f64>,
    /// Population mean of the residuals.
    pub mean: f64,
    /// Population standard deviation of the residuals.
    pub std_dev: f64,
    /// Threshold used for detection.
    pub threshold: f64,
    /// `true` where the residual is strictly above the threshold.
    pub mask: Vec<bool>,
    /// All residuals are identical, so nothing can stand out.
    pub degenerate: bool,
}

impl ThresholdResult {
    /// Number of flagged points.
    pub fn anomaly_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Whether the point at `index` is flagged. Out-of-range indices are not.
    pub fn is_anomalous(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    /// Indices of flagged points in ascending order.
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &m)| m)
            .map(|(i, _)| i)
            .collect()
    }

    /// Flagged points as a percentage of all points.
    pub fn anomaly_percentage(&self) -> f64 {
        if self.mask.is_empty() {
            0.0
        } else {
            100.0 * self.anomaly_count() as f64 / self.mask.len() as f64
        }
    }
}

/// Element-wise absolute residuals between raw and smoothed values.
pub fn compute_residuals(raw: &[f64], smoothed: &[f64]) -> Result<Vec<f64>> {
    if raw.len() != smoothed.len() {
        return Err(AnomalyError::DimensionMismatch {
            expected: raw.len(),
            got: smoothed.len(),
        });
    }
    Ok(raw
        .iter()
        .zip(smoothed.iter())
        .map(|(r, s)| (r - s).abs())
        .collect())
}

/// Classify each point of `raw` against its `smoothed` baseline.
///
/// A point is anomalous when its residual is strictly greater than
/// `mean + threshold_factor * std_dev`. When every residual is the same
/// (for instance a perfectly flat signal) the standard deviation is taken as
/// zero, the threshold equals the mean, and no point is flagged.
pub fn threshold_residuals(
    raw: &[f64],
    smoothed: &[f64],
    threshold_factor: f64,
) -> Result<ThresholdResult> {
    let residuals = compute_residuals(raw, smoothed)?;
    Ok(classify_residuals(residuals, threshold_factor))
}

/// Apply the statistical threshold to precomputed residuals.
pub fn classify_residuals(residuals: Vec<f64>, threshold_factor: f64) -> ThresholdResult {
    if residuals.is_empty() {
        return ThresholdResult {
            residuals,
            mean: 0.0,
            std_dev: 0.0,
            threshold: 0.0,
            mask: Vec::new(),
            degenerate: true,
        };
    }

    let mu = mean(&residuals);

    // Rounding in the mean can leave a tiny non-zero spread for constant
    // residuals; decide degeneracy on the values themselves.
    if range(&residuals) == 0.0 {
        let mask = vec![false; residuals.len()];
        return ThresholdResult {
            residuals,
            mean: mu,
            std_dev: 0.0,
            threshold: mu,
            mask,
            degenerate: true,
        };
    }

    let sigma = population_std_dev(&residuals);
    let threshold = mu + threshold_factor * sigma;
    let mask = residuals.iter().map(|&r| r > threshold).collect();

    ThresholdResult {
        residuals,
        mean: mu,
        std_dev: sigma,
        threshold,
        mask,
        degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn residuals_are_absolute() {
        let residuals = compute_residuals(&[1.0, -2.0, 3.0], &[0.0, 0.0, 5.0]).unwrap();
        assert_eq!(residuals, vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn residuals_require_equal_lengths() {
        assert_eq!(
            compute_residuals(&[1.0, 2.0], &[1.0]),
            Err(AnomalyError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn single_spike_is_flagged() {
        let mut raw = vec![0.0; 100];
        raw[50] = 1000.0;
        let smoothed = vec![0.0; 100];

        let result = threshold_residuals(&raw, &smoothed, 3.0).unwrap();

        assert_relative_eq!(result.mean, 10.0, epsilon = 1e-10);
        assert_relative_eq!(result.std_dev, 9900.0_f64.sqrt(), epsilon = 1e-8);
        assert_relative_eq!(
            result.threshold,
            10.0 + 3.0 * 9900.0_f64.sqrt(),
            epsilon = 1e-8
        );
        assert_eq!(result.anomaly_indices(), vec![50]);
        assert!(!result.degenerate);
        assert!((result.anomaly_percentage() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn threshold_is_strict() {
        // mean 1, std 1 -> threshold exactly 2; the residual equal to it stays unflagged
        let result = threshold_residuals(&[0.0, 2.0], &[0.0, 0.0], 1.0).unwrap();
        assert_eq!(result.threshold, 2.0);
        assert_eq!(result.anomaly_count(), 0);

        // factor 0 -> threshold is the mean
        let result = threshold_residuals(&[0.0, 1.0, 2.0], &[0.0; 3], 0.0).unwrap();
        assert_eq!(result.threshold, 1.0);
        assert_eq!(result.anomaly_indices(), vec![2]);
    }

    #[test]
    fn constant_residuals_flag_nothing() {
        let raw = vec![0.1; 30];
        let smoothed = vec![0.0; 30];

        for factor in [0.0, 1.0, 3.0] {
            let result = threshold_residuals(&raw, &smoothed, factor).unwrap();
            assert!(result.degenerate);
            assert_eq!(result.std_dev, 0.0);
            assert_eq!(result.threshold, result.mean);
            assert_eq!(result.anomaly_count(), 0);
        }
    }

    #[test]
    fn zero_residuals_flag_nothing() {
        let values = vec![42.0; 10];
        let result = threshold_residuals(&values, &values, 3.0).unwrap();
        assert!(result.degenerate);
        assert_eq!(result.mean, 0.0);
        assert!(result.mask.iter().all(|&m| !m));
    }

    #[test]
    fn empty_input() {
        let result = threshold_residuals(&[], &[], 3.0).unwrap();
        assert!(result.mask.is_empty());
        assert_eq!(result.anomaly_count(), 0);
        assert_eq!(result.anomaly_percentage(), 0.0);
    }

    #[test]
    fn result_accessors() {
        let result = classify_residuals(vec![0.0, 0.0, 0.0, 9.0, 0.0, 9.0], 0.5);
        assert!(result.is_anomalous(3));
        assert!(result.is_anomalous(5));
        assert!(!result.is_anomalous(0));
        assert!(!result.is_anomalous(100));
        assert_eq!(result.anomaly_count(), 2);
    }
}
