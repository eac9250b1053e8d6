//! End-to-end anomaly detection over one series.
//!
//! raw series -> sampling rate -> window size -> smoothed series ->
//! residual threshold -> anomaly mask -> merged intervals.

use super::clustering::cluster_anomalies;
use super::config::DetectionConfig;
use super::sampling::estimate_sampling_rate;
use super::smoothing::{smooth, smoothing_window};
use super::threshold::{threshold_residuals, ThresholdResult};
use crate::core::{AnomalyInterval, Series};
use crate::error::Result;
use tracing::{debug, info};

/// Outcome of detection on one series.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Moving-median baseline, aligned index-for-index with the input.
    pub smoothed: Vec<f64>,
    /// Merged anomaly intervals in time order.
    pub intervals: Vec<AnomalyInterval>,
    /// Estimated mean sample spacing in seconds.
    pub sampling_rate: f64,
    /// Median window actually applied, in samples.
    pub window: usize,
    /// Residuals, their statistics, and the per-point mask.
    pub thresholding: ThresholdResult,
}

impl Detection {
    /// Number of reported anomaly intervals.
    pub fn anomaly_count(&self) -> usize {
        self.intervals.len()
    }

    /// Whether any interval was reported.
    pub fn has_anomalies(&self) -> bool {
        !self.intervals.is_empty()
    }

    /// Number of individual points above the threshold.
    pub fn flagged_points(&self) -> usize {
        self.thresholding.anomaly_count()
    }

    /// Split into the smoothed series and the interval list.
    pub fn into_parts(self) -> (Vec<f64>, Vec<AnomalyInterval>) {
        (self.smoothed, self.intervals)
    }
}

/// Stateless detector holding a validated configuration.
///
/// # Example
///
/// ```
/// use anofox_anomaly::prelude::*;
///
/// let mut values = vec![0.0; 100];
/// values[50] = 1000.0;
/// let series = Series::regular(0.0, 1.0, values).unwrap();
///
/// let detector = AnomalyDetector::new(DetectionConfig::new(10.0, 60.0, 3.0)).unwrap();
/// let detection = detector.detect(&series).unwrap();
///
/// assert_eq!(detection.anomaly_count(), 1);
/// assert_eq!(detection.intervals[0].start, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyDetector {
    config: DetectionConfig,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self {
            config: DetectionConfig::default(),
        }
    }
}

impl AnomalyDetector {
    /// Create a detector, rejecting invalid configuration up front.
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Run the full pipeline on `series`.
    ///
    /// Either returns a complete [`Detection`] or fails without partial output.
    pub fn detect(&self, series: &Series) -> Result<Detection> {
        let timestamps = series.timestamps();
        let values = series.values();

        let sampling_rate = estimate_sampling_rate(timestamps)?;
        let window = smoothing_window(sampling_rate, self.config.smoothing_duration);
        debug!(
            samples = series.len(),
            sampling_rate,
            window,
            "estimated smoothing window"
        );

        let smoothed = smooth(values, window);
        let thresholding = threshold_residuals(values, &smoothed, self.config.threshold_factor)?;
        debug!(
            mean = thresholding.mean,
            std_dev = thresholding.std_dev,
            threshold = thresholding.threshold,
            flagged = thresholding.anomaly_count(),
            degenerate = thresholding.degenerate,
            "thresholded residuals"
        );

        let intervals =
            cluster_anomalies(&thresholding.mask, timestamps, self.config.min_anomaly_gap);
        info!(anomalies = intervals.len(), "detection complete");

        Ok(Detection {
            smoothed,
            intervals,
            sampling_rate,
            window,
            thresholding,
        })
    }
}

/// Detect anomalies in `series` with the given configuration.
pub fn detect(series: &Series, config: &DetectionConfig) -> Result<Detection> {
    AnomalyDetector::new(*config)?.detect(series)
}
