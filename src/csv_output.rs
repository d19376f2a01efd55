//! CSV output format for the per-measurement step table
//!
//! One row per sample with its change and jitter, for spreadsheet analysis.

use crate::analysis::StepRow;

/// CSV step table formatter
#[derive(Debug)]
pub struct CsvStepOutput {
    rows: Vec<StepRow>,
}

impl CsvStepOutput {
    /// Create an empty CSV step table
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a table from already-built step rows
    pub fn from_rows(rows: &[StepRow]) -> Self {
        Self {
            rows: rows.to_vec(),
        }
    }

    fn header() -> &'static str {
        "index,elapsed_seconds,offset_seconds,change_seconds,jitter_seconds"
    }

    fn format_row(row: &StepRow) -> String {
        format!(
            "{},{:.3},{:.6},{:.6},{:.6}",
            row.index, row.elapsed, row.offset, row.change, row.jitter
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }
}

impl Default for CsvStepOutput {
    fn default() -> Self {
        Self::new()
    }
}
