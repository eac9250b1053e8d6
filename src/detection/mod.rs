//! Anomaly detection over sampled series.
//!
//! This module provides the pipeline stages, leaves first:
//! - Sampling-rate estimation
//! - Trend smoothing with a moving median
//! - Residual thresholding
//! - Clustering of flagged points into intervals
//!
//! and the orchestration on top of them, for one series or a batch.

mod batch;
mod clustering;
mod config;
mod pipeline;
mod sampling;
mod smoothing;
mod threshold;

pub use batch::{detect_batch, BatchSummary, SignalReport};
pub use clustering::{cluster_anomalies, group_contiguous, merge_close};
pub use config::{
    DetectionConfig, DEFAULT_MIN_ANOMALY_GAP, DEFAULT_SMOOTHING_DURATION,
    DEFAULT_THRESHOLD_FACTOR,
};
pub use pipeline::{detect, AnomalyDetector, Detection};
pub use sampling::estimate_sampling_rate;
pub use smoothing::{smooth, smoothing_window};
pub use threshold::{classify_residuals, compute_residuals, threshold_residuals, ThresholdResult};
