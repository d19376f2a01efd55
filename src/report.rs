//! Report rendering options and format dispatch

use crate::analysis::AnalysisResult;
use crate::cli::OutputFormat;
use crate::csv_output::CsvStepOutput;
use crate::json_output::JsonReport;
use crate::sample::SessionMetadata;
use crate::text_output;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How a session report is rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Output format (default: text)
    pub format: OutputFormat,

    /// Include the per-measurement table (text and JSON only; CSV output
    /// always is the table)
    pub include_table: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            include_table: true,
        }
    }
}

/// Render one analyzed session
pub fn render(
    result: &AnalysisResult,
    metadata: &SessionMetadata,
    options: &ReportOptions,
) -> Result<String> {
    tracing::debug!("Rendering {:?} report", options.format);

    match options.format {
        OutputFormat::Text => Ok(text_output::render_text(
            result,
            metadata,
            options.include_table,
        )),
        OutputFormat::Json => {
            let mut json = JsonReport::new(result, metadata, options.include_table)
                .to_json()
                .context("Failed to serialize JSON report")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => Ok(CsvStepOutput::from_rows(&result.steps).to_csv()),
    }
}

/// Output for a session file that contained no records
pub fn render_no_data(options: &ReportOptions) -> String {
    match options.format {
        OutputFormat::Text => text_output::render_no_data(),
        OutputFormat::Json => "{\"total_requests\": 0}\n".to_string(),
        OutputFormat::Csv => CsvStepOutput::new().to_csv(),
    }
}
