//! Reported anomaly intervals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time span during which the signal was judged anomalous.
///
/// `start` and `end` are always timestamps taken from the analysed series,
/// never interpolated. `start_index` and `end_index` are the positions of
/// those samples, so the raw and smoothed series can be sliced directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyInterval {
    pub start: f64,
    pub end: f64,
    pub start_index: usize,
    pub end_index: usize,
}

impl AnomalyInterval {
    pub fn new(start: f64, end: f64, start_index: usize, end_index: usize) -> Self {
        Self {
            start,
            end,
            start_index,
            end_index,
        }
    }

    /// Length of the interval in seconds. Zero for a single-point interval.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Number of series samples between the first and last index, inclusive.
    ///
    /// Merged intervals include the unflagged samples between their parts.
    /// Zero when `end_index` precedes `start_index`.
    pub fn sample_span(&self) -> usize {
        self.end_index
            .checked_sub(self.start_index)
            .map_or(0, |d| d + 1)
    }

    /// Check whether `timestamp` lies inside the interval (inclusive).
    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Start of the interval as a UTC datetime.
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        epoch_seconds_to_datetime(self.start)
    }

    /// End of the interval as a UTC datetime.
    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        epoch_seconds_to_datetime(self.end)
    }
}

/// Convert fractional seconds since the Unix epoch to a UTC datetime.
///
/// Returns `None` for non-finite input or values outside chrono's range.
pub fn epoch_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos)
}
