// Per-measurement rows for the detailed table

use crate::sample::Sample;
use serde::Serialize;

/// One measurement with its change relative to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRow {
    /// 1-based position in the session
    pub index: usize,
    pub elapsed: f64,
    pub offset: f64,
    /// `offset - previous offset`; 0.0 on the first row
    pub change: f64,
    /// `|change|`
    pub jitter: f64,
}

/// Build one row per sample, preserving collection order
pub fn build_step_rows(samples: &[Sample]) -> Vec<StepRow> {
    let mut previous: Option<f64> = None;

    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let change = previous.map_or(0.0, |prev| sample.offset - prev);
            previous = Some(sample.offset);
            StepRow {
                index: i + 1,
                elapsed: sample.elapsed,
                offset: sample.offset,
                change,
                jitter: change.abs(),
            }
        })
        .collect()
}
