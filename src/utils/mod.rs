//! Utility functions shared by the detection stages.

pub mod stats;

pub use stats::{mean, population_std_dev, population_variance, range, upper_median};
