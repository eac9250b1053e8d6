//! Data transformations for time series.
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::transform::median_filter;
//!
//! let series = vec![1.0, 1.0, 9.0, 1.0, 1.0];
//! let smoothed = median_filter(&series, 3);
//! assert_eq!(smoothed, vec![1.0; 5]);
//! ```

pub mod window;

pub use window::{median_filter, reflect_index};
