//! Core data structures for anomaly detection.

mod interval;
mod series;

pub use interval::{epoch_seconds_to_datetime, AnomalyInterval};
pub use series::{Sample, Series, MIN_SERIES_LEN};
