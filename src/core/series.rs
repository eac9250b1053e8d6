//! Sampled scalar series consumed by the detection pipeline.

use crate::error::{AnomalyError, Result};
use serde::{Deserialize, Serialize};

/// Minimum number of samples a [`Series`] must hold.
pub const MIN_SERIES_LEN: usize = 2;

/// A single observation: seconds since the epoch and the measured value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((timestamp, value): (f64, f64)) -> Self {
        Self::new(timestamp, value)
    }
}

/// An immutable, validated series of samples.
///
/// Guarantees at least [`MIN_SERIES_LEN`] samples, finite timestamps and
/// values, and non-decreasing timestamps. Duplicate timestamps are kept
/// as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    timestamps: Vec<f64>,
    values: Vec<f64>,
}

impl Series {
    /// Create a series from parallel timestamp and value vectors.
    pub fn new(timestamps: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(AnomalyError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        if timestamps.len() < MIN_SERIES_LEN {
            return Err(AnomalyError::InsufficientData {
                needed: MIN_SERIES_LEN,
                got: timestamps.len(),
            });
        }

        for (index, (&t, &v)) in timestamps.iter().zip(values.iter()).enumerate() {
            if !t.is_finite() {
                return Err(AnomalyError::MalformedSample {
                    index,
                    reason: format!("non-finite timestamp {t}"),
                });
            }
            if !v.is_finite() {
                return Err(AnomalyError::MalformedSample {
                    index,
                    reason: format!("non-finite value {v}"),
                });
            }
        }

        if let Some(i) = timestamps.windows(2).position(|w| w[1] < w[0]) {
            return Err(AnomalyError::TimestampError(format!(
                "timestamps must be non-decreasing: {} at index {} follows {}",
                timestamps[i + 1],
                i + 1,
                timestamps[i]
            )));
        }

        Ok(Self { timestamps, values })
    }

    /// Create a series from a sequence of samples.
    pub fn from_samples<I, S>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        let (timestamps, values) = samples
            .into_iter()
            .map(|s| {
                let s = s.into();
                (s.timestamp, s.value)
            })
            .unzip();
        Self::new(timestamps, values)
    }

    /// Create a series with evenly spaced timestamps starting at `start`.
    pub fn regular(start: f64, step: f64, values: Vec<f64>) -> Result<Self> {
        let timestamps = (0..values.len()).map(|i| start + step * i as f64).collect();
        Self::new(timestamps, values)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Always false for a constructed series; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample::new(
            *self.timestamps.get(index)?,
            *self.values.get(index)?,
        ))
    }

    /// Iterate over the samples in order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.timestamps
            .iter()
            .zip(self.values.iter())
            .map(|(&t, &v)| Sample::new(t, v))
    }

    /// Elapsed seconds between the first and last sample.
    pub fn span(&self) -> f64 {
        self.timestamps[self.len() - 1] - self.timestamps[0]
    }
}
