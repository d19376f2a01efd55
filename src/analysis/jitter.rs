// Step-to-step jitter: absolute change in offset between consecutive samples

use super::moments::RunningMoments;
use crate::sample::Sample;
use serde::Serialize;

/// Jitter series and its summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JitterStatistics {
    /// `|offset[i] - offset[i - 1]|` for every consecutive pair, `count - 1` values
    pub jitters: Vec<f64>,

    /// Largest jitter, 0.0 when there are no pairs
    pub max_jitter: f64,

    /// Mean jitter, 0.0 when there are no pairs
    pub mean_jitter: f64,
}

/// Compute the jitter series for `samples` in collection order
///
/// A single sample (or none) yields an empty series with zero max and mean.
pub fn compute_jitter_statistics(samples: &[Sample]) -> JitterStatistics {
    let jitters: Vec<f64> = samples
        .windows(2)
        .map(|pair| (pair[1].offset - pair[0].offset).abs())
        .collect();

    let max_jitter = jitters.iter().copied().fold(0.0, f64::max);
    // rounding in the running mean must not lift it past the maximum
    let mean_jitter = RunningMoments::from_values(jitters.iter().copied())
        .mean()
        .clamp(0.0, max_jitter);

    JitterStatistics {
        jitters,
        max_jitter,
        mean_jitter,
    }
}
