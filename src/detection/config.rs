//! Detection configuration.

use crate::error::{AnomalyError, Result};
use serde::{Deserialize, Serialize};

/// Default real-world width of the smoothing window, in seconds.
pub const DEFAULT_SMOOTHING_DURATION: f64 = 200.0;
/// Default gap below which neighbouring anomalies are merged, in seconds.
pub const DEFAULT_MIN_ANOMALY_GAP: f64 = 120.0;
/// Default multiplier on the residual standard deviation.
pub const DEFAULT_THRESHOLD_FACTOR: f64 = 3.0;

/// Parameters of one detection run.
///
/// Missing fields in a serialized document take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Width of the moving-median window in seconds.
    pub smoothing_duration: f64,
    /// Anomalous spans closer than this many seconds are merged.
    pub min_anomaly_gap: f64,
    /// Residuals above `mean + threshold_factor * std` are flagged.
    pub threshold_factor: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            smoothing_duration: DEFAULT_SMOOTHING_DURATION,
            min_anomaly_gap: DEFAULT_MIN_ANOMALY_GAP,
            threshold_factor: DEFAULT_THRESHOLD_FACTOR,
        }
    }
}

impl DetectionConfig {
    pub fn new(smoothing_duration: f64, min_anomaly_gap: f64, threshold_factor: f64) -> Self {
        Self {
            smoothing_duration,
            min_anomaly_gap,
            threshold_factor,
        }
    }

    pub fn with_smoothing_duration(mut self, seconds: f64) -> Self {
        self.smoothing_duration = seconds;
        self
    }

    pub fn with_min_anomaly_gap(mut self, seconds: f64) -> Self {
        self.min_anomaly_gap = seconds;
        self
    }

    pub fn with_threshold_factor(mut self, factor: f64) -> Self {
        self.threshold_factor = factor;
        self
    }

    /// Parse a configuration from JSON, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is finite and in range.
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing_duration.is_finite() || self.smoothing_duration < 0.0 {
            return Err(AnomalyError::InvalidParameter(format!(
                "smoothing_duration must be >= 0 seconds, got {}",
                self.smoothing_duration
            )));
        }
        if !self.min_anomaly_gap.is_finite() || self.min_anomaly_gap < 0.0 {
            return Err(AnomalyError::InvalidParameter(format!(
                "min_anomaly_gap must be >= 0 seconds, got {}",
                self.min_anomaly_gap
            )));
        }
        if !self.threshold_factor.is_finite() || self.threshold_factor < 0.0 {
            return Err(AnomalyError::InvalidParameter(format!(
                "threshold_factor must be >= 0, got {}",
                self.threshold_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.smoothing_duration, 200.0);
        assert_eq!(config.min_anomaly_gap, 120.0);
        assert_eq!(config.threshold_factor, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = DetectionConfig::default()
            .with_smoothing_duration(60.0)
            .with_min_anomaly_gap(30.0)
            .with_threshold_factor(2.5);

        assert_eq!(config, DetectionConfig::new(60.0, 30.0, 2.5));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cases = [
            DetectionConfig::default().with_smoothing_duration(-1.0),
            DetectionConfig::default().with_smoothing_duration(f64::NAN),
            DetectionConfig::default().with_min_anomaly_gap(-1.0),
            DetectionConfig::default().with_min_anomaly_gap(f64::INFINITY),
            DetectionConfig::default().with_threshold_factor(-0.5),
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(AnomalyError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn zero_values_are_valid() {
        assert!(DetectionConfig::new(60.0, 0.0, 0.0).validate().is_ok());
        // A zero duration means no smoothing, not an error
        assert!(DetectionConfig::new(0.0, 60.0, 3.0).validate().is_ok());
    }

    #[test]
    fn from_json_fills_defaults() {
        let config = DetectionConfig::from_json(r#"{"smoothing_duration": 60.0}"#).unwrap();
        assert_eq!(config.smoothing_duration, 60.0);
        assert_eq!(config.min_anomaly_gap, DEFAULT_MIN_ANOMALY_GAP);
        assert_eq!(config.threshold_factor, DEFAULT_THRESHOLD_FACTOR);
    }

    #[test]
    fn from_json_rejects_invalid() {
        assert!(matches!(
            DetectionConfig::from_json(r#"{"threshold_factor": -3}"#),
            Err(AnomalyError::InvalidParameter(_))
        ));
        assert!(matches!(
            DetectionConfig::from_json("not json"),
            Err(AnomalyError::Decode(_))
        ));
    }
}
