// Threshold verdicts on clock stability
//
// Three independent checks, each comparing one statistic to a fixed
// threshold in seconds. The thresholds are domain constants and are not
// configurable.
//
// Polarity differs between checks: spread and jitter are healthy BELOW their
// threshold, while total drift is a warning only when it EXCEEDS its
// threshold. The drift polarity is kept exactly as the monitoring tool has
// always reported it.

use super::AnalysisResult;
use serde::Serialize;

/// Offset standard deviation below this is "stable"
pub const VARIANCE_THRESHOLD_SECONDS: f64 = 5.0;

/// Mean jitter below this is "controlled"
pub const JITTER_THRESHOLD_SECONDS: f64 = 5.0;

/// Absolute total drift above this is a warning
pub const DRIFT_THRESHOLD_SECONDS: f64 = 60.0;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Stable,
    Warning,
}

/// Which statistic a check looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationKind {
    OffsetVariance,
    Jitter,
    TotalDrift,
}

/// A single verdict plus the value it was based on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub kind: ObservationKind,
    pub verdict: Verdict,
    /// The statistic as computed (signed for drift)
    pub value: f64,
}

impl Observation {
    pub fn is_warning(&self) -> bool {
        self.verdict == Verdict::Warning
    }

    /// Short human-readable description of the verdict
    pub fn label(&self) -> &'static str {
        match (self.kind, self.verdict) {
            (ObservationKind::OffsetVariance, Verdict::Stable) => {
                "low offset variance, clock stable"
            }
            (ObservationKind::OffsetVariance, Verdict::Warning) => {
                "high offset variance, significant drift"
            }
            (ObservationKind::Jitter, Verdict::Stable) => {
                "average jitter indicates controlled variation"
            }
            (ObservationKind::Jitter, Verdict::Warning) => "large average jitter, highly unstable",
            (ObservationKind::TotalDrift, Verdict::Stable) => {
                "moderate total drift, clock tracking well"
            }
            (ObservationKind::TotalDrift, Verdict::Warning) => "large total drift over test period",
        }
    }
}

/// The three verdicts for one session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observations {
    pub offset_variance: Observation,
    pub jitter: Observation,
    pub total_drift: Observation,
}

impl Observations {
    /// Verdicts in report order
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        [&self.offset_variance, &self.jitter, &self.total_drift].into_iter()
    }

    pub fn warning_count(&self) -> usize {
        self.iter().filter(|o| o.is_warning()).count()
    }
}

fn verdict_if(stable: bool) -> Verdict {
    if stable {
        Verdict::Stable
    } else {
        Verdict::Warning
    }
}

/// Classify a result against the fixed thresholds
pub fn classify(result: &AnalysisResult) -> Observations {
    let std_dev = result.offset.offset_std_dev;
    let mean_jitter = result.jitter.mean_jitter;
    let drift = result.offset.total_drift;

    Observations {
        offset_variance: Observation {
            kind: ObservationKind::OffsetVariance,
            verdict: verdict_if(std_dev.abs() < VARIANCE_THRESHOLD_SECONDS),
            value: std_dev,
        },
        jitter: Observation {
            kind: ObservationKind::Jitter,
            verdict: verdict_if(mean_jitter < JITTER_THRESHOLD_SECONDS),
            value: mean_jitter,
        },
        total_drift: Observation {
            kind: ObservationKind::TotalDrift,
            verdict: if drift.abs() > DRIFT_THRESHOLD_SECONDS {
                Verdict::Warning
            } else {
                Verdict::Stable
            },
            value: drift,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::sample::Sample;

    fn result_for(offsets: &[f64]) -> AnalysisResult {
        let samples: Vec<Sample> = offsets
            .iter()
            .enumerate()
            .map(|(i, &offset)| Sample::new(i as f64 * 30.0, offset))
            .collect();
        analyze(&samples).unwrap()
    }

    #[test]
    fn test_thresholds_are_fixed() {
        assert_eq!(VARIANCE_THRESHOLD_SECONDS, 5.0);
        assert_eq!(JITTER_THRESHOLD_SECONDS, 5.0);
        assert_eq!(DRIFT_THRESHOLD_SECONDS, 60.0);
    }

    #[test]
    fn test_jitter_boundary_is_strict() {
        // mean jitter exactly 5.0 is not below the threshold
        let observations = result_for(&[0.0, 5.0]).observations();
        assert_eq!(observations.jitter.value, 5.0);
        assert_eq!(observations.jitter.verdict, Verdict::Warning);

        let observations = result_for(&[0.0, 4.999]).observations();
        assert_eq!(observations.jitter.verdict, Verdict::Stable);
    }

    #[test]
    fn test_drift_boundary_is_strict() {
        // exactly 60s of drift is still "moderate"
        let observations = result_for(&[0.0, 30.0, 60.0]).observations();
        assert_eq!(observations.total_drift.value, 60.0);
        assert_eq!(observations.total_drift.verdict, Verdict::Stable);

        let observations = result_for(&[0.0, 30.0, 60.5]).observations();
        assert_eq!(observations.total_drift.verdict, Verdict::Warning);
    }

    #[test]
    fn test_negative_drift_uses_absolute_value() {
        let observations = result_for(&[0.0, -30.0, -61.0]).observations();
        assert_eq!(observations.total_drift.value, -61.0);
        assert!(observations.total_drift.is_warning());
    }

    #[test]
    fn test_labels_follow_verdict() {
        let observations = result_for(&[10.0, 10.0, 10.0]).observations();
        let labels: Vec<&str> = observations.iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            vec![
                "low offset variance, clock stable",
                "average jitter indicates controlled variation",
                "moderate total drift, clock tracking well",
            ]
        );
        assert_eq!(observations.warning_count(), 0);
    }

    #[test]
    fn test_warning_labels() {
        let observations = result_for(&[0.0, 100.0]).observations();
        assert_eq!(
            observations.offset_variance.label(),
            "high offset variance, significant drift"
        );
        assert_eq!(
            observations.jitter.label(),
            "large average jitter, highly unstable"
        );
        assert_eq!(
            observations.total_drift.label(),
            "large total drift over test period"
        );
        assert_eq!(observations.warning_count(), 3);
    }

    #[test]
    fn test_iter_order() {
        let observations = result_for(&[1.0]).observations();
        let kinds: Vec<ObservationKind> = observations.iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ObservationKind::OffsetVariance,
                ObservationKind::Jitter,
                ObservationKind::TotalDrift,
            ]
        );
    }
}
