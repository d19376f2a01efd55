//! Human-readable text report

use crate::analysis::{AnalysisResult, Observation, ObservationKind};
use crate::sample::SessionMetadata;
use std::fmt::Write;

const BANNER_WIDTH: usize = 64;
const TITLE: &str = "NTP Monitoring Results Analysis";
const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

fn banner() -> String {
    let bar = "═".repeat(BANNER_WIDTH);
    format!(
        "╔{bar}╗\n║{title:^width$}║\n╚{bar}╝\n\n",
        bar = bar,
        title = TITLE,
        width = BANNER_WIDTH
    )
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", RULE);
}

/// Report for a file that held a header but no records
pub fn render_no_data() -> String {
    let mut out = banner();
    out.push_str("No data in CSV file\n");
    out
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn observation_line(observation: &Observation) -> String {
    let symbol = if observation.is_warning() { "⚠" } else { "✓" };
    let detail = match observation.kind {
        ObservationKind::OffsetVariance => format!("std dev {:.3}s", observation.value),
        ObservationKind::Jitter => format!("avg {:.2}s", observation.value),
        ObservationKind::TotalDrift if observation.is_warning() => {
            format!("{:.1} min", observation.value / 60.0)
        }
        ObservationKind::TotalDrift => format!("{:.1}s", observation.value),
    };
    format!("{} {} ({})", symbol, capitalize(observation.label()), detail)
}

/// Render the full text report
pub fn render_text(
    result: &AnalysisResult,
    metadata: &SessionMetadata,
    include_table: bool,
) -> String {
    let mut out = banner();
    let offset = &result.offset;
    let jitter = &result.jitter;

    let _ = writeln!(out, "Total Requests: {}", result.count);
    out.push('\n');

    section(&mut out, "OFFSET STATISTICS");
    for (label, value) in [
        ("Initial Offset:", offset.initial_offset),
        ("Final Offset:", offset.final_offset),
        ("Total Drift:", offset.total_drift),
        ("Mean Offset:", offset.mean_offset),
    ] {
        let _ = writeln!(
            out,
            "{:<20}{:>10.3} seconds ({:.2} min)",
            label,
            value,
            value / 60.0
        );
    }
    let _ = writeln!(
        out,
        "{:<20}{:>10.3} seconds",
        "Std Deviation:", offset.offset_std_dev
    );
    out.push('\n');

    section(&mut out, "JITTER STATISTICS");
    let _ = writeln!(
        out,
        "{:<20}{:>10.3} seconds",
        "Maximum Jitter:", jitter.max_jitter
    );
    let _ = writeln!(
        out,
        "{:<20}{:>10.3} seconds",
        "Average Jitter:", jitter.mean_jitter
    );
    out.push('\n');

    if include_table {
        section(&mut out, "DETAILED MEASUREMENTS");
        let _ = writeln!(
            out,
            "{:>4} {:>10} {:>12} {:>10} {:>10}",
            "Req", "Elapsed", "Offset", "Change", "Jitter"
        );
        let _ = writeln!(
            out,
            "{:>4} {:>10} {:>12} {:>10} {:>10}",
            "#", "(sec)", "(sec)", "(sec)", "(sec)"
        );
        let _ = writeln!(out, "{}", THIN_RULE);
        for row in &result.steps {
            let _ = writeln!(
                out,
                "{:>4} {:>10.1} {:>12.3} {:>10.3} {:>10.3}",
                row.index, row.elapsed, row.offset, row.change, row.jitter
            );
        }
        out.push('\n');
    }

    section(&mut out, "SERVER CONFIGURATION");
    let _ = writeln!(out, "{:<20}{}", "Stratum:", metadata.stratum);
    let _ = writeln!(out, "{:<20}{}", "Reference ID:", metadata.reference_id);
    let _ = writeln!(
        out,
        "{:<20}{} seconds",
        "Poll Interval:", metadata.poll_interval_seconds
    );
    let _ = writeln!(
        out,
        "{:<20}{:.1} seconds",
        "Duration:", result.duration_seconds
    );
    out.push('\n');

    section(&mut out, "OBSERVATIONS");
    for observation in result.observations().iter() {
        let _ = writeln!(out, "{}", observation_line(observation));
    }
    out.push('\n');
    let _ = writeln!(out, "{}", RULE);

    out
}
