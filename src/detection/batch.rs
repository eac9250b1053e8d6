//! Detection over many named signals.
//!
//! Each signal is processed independently. A signal that failed to load or
//! fails detection is reported as such and does not affect the others.
//! With the `parallel` feature signals are processed on the rayon pool;
//! reports always come back in input order.

use super::config::DetectionConfig;
use super::pipeline::{AnomalyDetector, Detection};
use crate::core::Series;
use crate::error::{AnomalyError, Result};
use tracing::{info_span, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Detection outcome for one named signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalReport {
    pub name: String,
    pub outcome: Result<Detection>,
}

impl SignalReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Number of anomaly intervals, or `None` if detection failed.
    pub fn anomaly_count(&self) -> Option<usize> {
        self.outcome.as_ref().ok().map(Detection::anomaly_count)
    }

    pub fn detection(&self) -> Option<&Detection> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&AnomalyError> {
        self.outcome.as_ref().err()
    }
}

/// Aggregate counts over a batch of reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub signals: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub anomalies: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[SignalReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, report| {
            acc.signals += 1;
            match report.anomaly_count() {
                Some(count) => {
                    acc.succeeded += 1;
                    acc.anomalies += count;
                }
                None => acc.failed += 1,
            }
            acc
        })
    }
}

/// Run detection on every signal.
///
/// `signals` yields each signal's name with either its series or the error
/// raised while loading it. Only an invalid `config` fails the whole call.
pub fn detect_batch<I, S>(signals: I, config: &DetectionConfig) -> Result<Vec<SignalReport>>
where
    I: IntoIterator<Item = (S, Result<Series>)>,
    S: Into<String>,
{
    let detector = AnomalyDetector::new(*config)?;
    let inputs: Vec<(String, Result<Series>)> = signals
        .into_iter()
        .map(|(name, series)| (name.into(), series))
        .collect();

    #[cfg(feature = "parallel")]
    let reports = inputs
        .into_par_iter()
        .map(|(name, series)| run_signal(&detector, name, series))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let reports = inputs
        .into_iter()
        .map(|(name, series)| run_signal(&detector, name, series))
        .collect();

    Ok(reports)
}

fn run_signal(detector: &AnomalyDetector, name: String, series: Result<Series>) -> SignalReport {
    let span = info_span!("detect_signal", signal = %name);
    let _guard = span.enter();

    let outcome = series.and_then(|series| detector.detect(&series));
    if let Err(err) = &outcome {
        warn!(error = %err, "detection failed");
    }

    SignalReport { name, outcome }
}
