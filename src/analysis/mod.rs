// Clock offset analysis
//
// Turns an ordered list of offset samples into drift, spread and jitter
// figures, a per-measurement step table, and three threshold verdicts.
//
// Every function here is pure. Samples are consumed in collection order
// (never re-sorted) since "consecutive" defines jitter.

mod jitter;
mod moments;
mod observations;
mod offset;
mod steps;

pub use jitter::{compute_jitter_statistics, JitterStatistics};
pub use observations::{
    classify, Observation, ObservationKind, Observations, Verdict, DRIFT_THRESHOLD_SECONDS,
    JITTER_THRESHOLD_SECONDS, VARIANCE_THRESHOLD_SECONDS,
};
pub use offset::{compute_offset_statistics, OffsetStatistics};
pub use steps::{build_step_rows, StepRow};

use crate::sample::Sample;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the analysis engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Zero samples reached the engine; nothing can be summarized
    #[error("No samples to analyze")]
    EmptyInput,
}

/// Everything derived from one monitoring session
///
/// Built once by [`analyze`] and never mutated afterwards. The qualitative
/// verdicts are not stored; [`AnalysisResult::observations`] derives them
/// from the numbers on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Number of samples analyzed (always >= 1)
    pub count: usize,

    #[serde(flatten)]
    pub offset: OffsetStatistics,

    #[serde(flatten)]
    pub jitter: JitterStatistics,

    /// One row per sample, in collection order
    pub steps: Vec<StepRow>,

    /// Elapsed time of the last sample
    pub duration_seconds: f64,
}

impl AnalysisResult {
    /// Threshold verdicts for this result
    pub fn observations(&self) -> Observations {
        classify(self)
    }
}

/// Analyze an ordered, fully materialized list of samples
///
/// # Errors
/// Returns [`AnalysisError::EmptyInput`] when `samples` is empty. No other
/// input is an error: single-sample sessions get zero spread and no jitter.
///
/// # Example
/// ```
/// use chronoscope::analysis::analyze;
/// use chronoscope::sample::Sample;
///
/// let samples = [Sample::new(0.0, 0.0), Sample::new(30.0, 100.0)];
/// let result = analyze(&samples).unwrap();
/// assert_eq!(result.offset.total_drift, 100.0);
/// assert_eq!(result.jitter.mean_jitter, 100.0);
/// ```
pub fn analyze(samples: &[Sample]) -> Result<AnalysisResult, AnalysisError> {
    let Some(last) = samples.last() else {
        return Err(AnalysisError::EmptyInput);
    };

    tracing::debug!("Analyzing {} offset samples", samples.len());

    let offset = compute_offset_statistics(samples)?;
    let jitter = compute_jitter_statistics(samples);
    let steps = build_step_rows(samples);

    tracing::debug!(
        "drift={:.3}s std_dev={:.3}s mean_jitter={:.3}s",
        offset.total_drift,
        offset.offset_std_dev,
        jitter.mean_jitter
    );

    Ok(AnalysisResult {
        count: samples.len(),
        offset,
        jitter,
        steps,
        duration_seconds: last.elapsed,
    })
}
