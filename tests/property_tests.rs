//! Property-based tests for the analysis engine
//!
//! Three offset generators: a 1 ms grid where repeated values are common,
//! arbitrary finite offsets, and runs of offsets only a few ulps apart
//! where rounding in the mean is most likely to hide a difference.

use chronoscope::analysis::{analyze, AnalysisError, Verdict, DRIFT_THRESHOLD_SECONDS};
use chronoscope::sample::Sample;
use proptest::prelude::*;

fn sample_series(max_len: usize) -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec(-200_000i64..200_000, 1..max_len)
        .prop_map(|millis| into_session(millis.into_iter().map(|ms| ms as f64 / 1000.0).collect()))
}

fn into_session(offsets: Vec<f64>) -> Vec<Sample> {
    offsets
        .into_iter()
        .enumerate()
        .map(|(i, offset)| Sample::new(i as f64 * 30.0, offset))
        .collect()
}

fn finite_series(max_len: usize) -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..max_len).prop_map(into_session)
}

fn near_equal_series(max_len: usize) -> impl Strategy<Value = Vec<Sample>> {
    let base = prop_oneof![1.0e-3f64..1.0e6, -1.0e6f64..-1.0e-3];
    (base, prop::collection::vec(0u64..3, 1..max_len)).prop_map(|(base, ulps)| {
        into_session(
            ulps.into_iter()
                .map(|k| f64::from_bits(base.to_bits() + k))
                .collect(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_drift_is_final_minus_initial(samples in sample_series(50)) {
        let result = analyze(&samples).unwrap();
        let first = samples.first().unwrap().offset;
        let last = samples.last().unwrap().offset;
        prop_assert_eq!(result.offset.total_drift, last - first);
        prop_assert_eq!(result.offset.initial_offset, first);
        prop_assert_eq!(result.offset.final_offset, last);
    }

    #[test]
    fn prop_jitter_count_is_count_minus_one(samples in sample_series(50)) {
        let result = analyze(&samples).unwrap();
        prop_assert_eq!(result.count, samples.len());
        prop_assert_eq!(result.jitter.jitters.len(), samples.len() - 1);
        prop_assert_eq!(result.jitter.jitters.is_empty(), samples.len() == 1);
    }

    #[test]
    fn prop_jitter_summary_bounds(samples in sample_series(50)) {
        let result = analyze(&samples).unwrap();
        let jitter = &result.jitter;
        if jitter.jitters.is_empty() {
            prop_assert_eq!(jitter.max_jitter, 0.0);
            prop_assert_eq!(jitter.mean_jitter, 0.0);
        } else {
            prop_assert!(jitter.mean_jitter >= 0.0);
            prop_assert!(jitter.max_jitter >= jitter.mean_jitter);
        }
    }

    #[test]
    fn prop_jitter_bounds_for_finite_offsets(samples in finite_series(50)) {
        let jitter = analyze(&samples).unwrap().jitter;
        prop_assert!(jitter.mean_jitter >= 0.0);
        prop_assert!(jitter.max_jitter >= jitter.mean_jitter);
    }

    #[test]
    fn prop_std_dev_zero_iff_constant(samples in sample_series(20)) {
        let result = analyze(&samples).unwrap();
        let constant = samples.iter().all(|s| s.offset == samples[0].offset);
        prop_assert_eq!(result.offset.offset_std_dev == 0.0, constant);
    }

    #[test]
    fn prop_std_dev_zero_iff_constant_near_equal(samples in near_equal_series(20)) {
        let result = analyze(&samples).unwrap();
        let constant = samples.iter().all(|s| s.offset == samples[0].offset);
        prop_assert_eq!(result.offset.offset_std_dev == 0.0, constant);
    }

    #[test]
    fn prop_std_dev_zero_iff_constant_finite(samples in finite_series(20)) {
        let result = analyze(&samples).unwrap();
        let constant = samples.iter().all(|s| s.offset == samples[0].offset);
        prop_assert_eq!(result.offset.offset_std_dev == 0.0, constant);
        prop_assert!(result.offset.offset_std_dev.is_finite());
    }

    #[test]
    fn prop_drift_exact_for_finite_offsets(samples in finite_series(50)) {
        let result = analyze(&samples).unwrap();
        let first = samples[0].offset;
        let last = samples[samples.len() - 1].offset;
        prop_assert_eq!(result.offset.total_drift, last - first);
    }

    #[test]
    fn prop_constant_series_has_zero_spread(
        millis in -200_000i64..200_000,
        len in 1usize..30,
    ) {
        let offset = millis as f64 / 1000.0;
        let samples: Vec<Sample> = (0..len).map(|i| Sample::new(i as f64, offset)).collect();
        let result = analyze(&samples).unwrap();
        prop_assert_eq!(result.offset.offset_std_dev, 0.0);
        prop_assert_eq!(result.jitter.max_jitter, 0.0);
    }

    #[test]
    fn prop_step_rows_are_consistent(samples in sample_series(50)) {
        let result = analyze(&samples).unwrap();
        prop_assert_eq!(result.steps.len(), samples.len());
        prop_assert_eq!(result.steps[0].change, 0.0);
        prop_assert_eq!(result.steps[0].jitter, 0.0);
        for (i, row) in result.steps.iter().enumerate() {
            prop_assert_eq!(row.index, i + 1);
            prop_assert_eq!(row.offset, samples[i].offset);
            prop_assert_eq!(row.jitter, row.change.abs());
        }
    }

    #[test]
    fn prop_analysis_is_deterministic(samples in sample_series(50)) {
        prop_assert_eq!(analyze(&samples).unwrap(), analyze(&samples).unwrap());
    }

    #[test]
    fn prop_drift_verdict_follows_threshold(samples in sample_series(50)) {
        let result = analyze(&samples).unwrap();
        let observations = result.observations();
        let expected = if result.offset.total_drift.abs() > DRIFT_THRESHOLD_SECONDS {
            Verdict::Warning
        } else {
            Verdict::Stable
        };
        prop_assert_eq!(observations.total_drift.verdict, expected);
    }
}

#[test]
fn test_empty_input_never_analyzed() {
    assert_eq!(analyze(&[]), Err(AnalysisError::EmptyInput));
}
