//! # anofox-anomaly
//!
//! Anomaly interval detection for sampled scalar time series.
//!
//! A moving-median baseline is fitted to the raw signal, points whose
//! absolute residual exceeds `mean + k * std` are flagged, and flagged points
//! are grouped into time intervals, merging intervals that lie closer
//! together than a minimum gap.
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::prelude::*;
//!
//! let mut values: Vec<f64> = (0..600).map(|i| 0.1 * (i as f64 * 0.05).sin()).collect();
//! values[300] = 25.0;
//! let series = Series::regular(1_709_208_000.0, 1.0, values).unwrap();
//!
//! let detection = detect(&series, &DetectionConfig::default()).unwrap();
//! assert_eq!(detection.smoothed.len(), series.len());
//! assert_eq!(detection.anomaly_count(), 1);
//! ```

pub mod core;
pub mod detection;
pub mod error;
pub mod ingest;
pub mod transform;
pub mod utils;

pub use error::{AnomalyError, Result};

pub mod prelude {
    pub use crate::core::{AnomalyInterval, Sample, Series};
    pub use crate::detection::{
        detect, detect_batch, AnomalyDetector, Detection, DetectionConfig, SignalReport,
    };
    pub use crate::error::{AnomalyError, Result};
    pub use crate::ingest::{decode_payload, SignalData};
}
