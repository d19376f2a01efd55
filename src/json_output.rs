//! JSON output format for session analysis
//!
//! A single document holding the session metadata, every computed statistic,
//! the step table and the three verdicts.

use crate::analysis::{AnalysisResult, Observation, ObservationKind, StepRow, Verdict};
use crate::sample::{SessionMetadata, Stratum};
use serde::Serialize;

/// Session configuration as reported by the time source
#[derive(Debug, Clone, Serialize)]
pub struct JsonSession {
    pub stratum: Stratum,
    pub reference_id: String,
    pub poll_interval_seconds: f64,
    pub duration_seconds: f64,
}

/// Offset summary
#[derive(Debug, Clone, Serialize)]
pub struct JsonOffsetStats {
    pub initial: f64,
    pub r#final: f64,
    pub total_drift: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// Jitter summary
#[derive(Debug, Clone, Serialize)]
pub struct JsonJitterStats {
    pub max: f64,
    pub mean: f64,
    /// Absolute change between consecutive samples
    pub series: Vec<f64>,
}

/// A threshold verdict
#[derive(Debug, Clone, Serialize)]
pub struct JsonObservation {
    pub kind: ObservationKind,
    pub verdict: Verdict,
    pub message: String,
    pub value: f64,
}

impl From<&Observation> for JsonObservation {
    fn from(observation: &Observation) -> Self {
        Self {
            kind: observation.kind,
            verdict: observation.verdict,
            message: observation.label().to_string(),
            value: observation.value,
        }
    }
}

/// Complete JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub total_requests: usize,
    pub session: JsonSession,
    pub offset: JsonOffsetStats,
    pub jitter: JsonJitterStats,
    /// Omitted when the step table is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Vec<StepRow>>,
    pub observations: Vec<JsonObservation>,
    /// How many of the observations are warnings
    pub warning_count: usize,
}

impl JsonReport {
    pub fn new(result: &AnalysisResult, metadata: &SessionMetadata, include_table: bool) -> Self {
        let observations = result.observations();

        Self {
            total_requests: result.count,
            session: JsonSession {
                stratum: metadata.stratum.clone(),
                reference_id: metadata.reference_id.clone(),
                poll_interval_seconds: metadata.poll_interval_seconds,
                duration_seconds: result.duration_seconds,
            },
            offset: JsonOffsetStats {
                initial: result.offset.initial_offset,
                r#final: result.offset.final_offset,
                total_drift: result.offset.total_drift,
                mean: result.offset.mean_offset,
                std_dev: result.offset.offset_std_dev,
            },
            jitter: JsonJitterStats {
                max: result.jitter.max_jitter,
                mean: result.jitter.mean_jitter,
                series: result.jitter.jitters.clone(),
            },
            measurements: include_table.then(|| result.steps.clone()),
            observations: observations.iter().map(JsonObservation::from).collect(),
            warning_count: observations.warning_count(),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
