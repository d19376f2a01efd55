// Aggregate offset statistics: endpoints, drift, mean and spread

use super::moments::{self, RunningMoments};
use super::AnalysisError;
use crate::sample::Sample;
use serde::Serialize;

/// Summary of the offset series as a whole
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OffsetStatistics {
    /// Offset of the first sample
    pub initial_offset: f64,

    /// Offset of the last sample
    pub final_offset: f64,

    /// `final_offset - initial_offset`, signed
    pub total_drift: f64,

    /// Arithmetic mean of all offsets
    pub mean_offset: f64,

    /// Sample standard deviation (divides by `count - 1`)
    ///
    /// Exactly 0.0 for a single sample: one point carries no variance.
    pub offset_std_dev: f64,
}

/// Compute endpoint, drift, mean and spread figures for `samples`
///
/// # Errors
/// [`AnalysisError::EmptyInput`] when `samples` is empty.
pub fn compute_offset_statistics(samples: &[Sample]) -> Result<OffsetStatistics, AnalysisError> {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Err(AnalysisError::EmptyInput);
    };

    let offsets: Vec<f64> = samples.iter().map(|s| s.offset).collect();
    let mean_offset = RunningMoments::from_values(offsets.iter().copied()).mean();
    let offset_std_dev = moments::sample_std_dev(&offsets, mean_offset);

    Ok(OffsetStatistics {
        initial_offset: first.offset,
        final_offset: last.offset,
        total_drift: last.offset - first.offset,
        mean_offset,
        offset_std_dev,
    })
}
