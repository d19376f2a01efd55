//! CLI argument parsing for Chronoscope

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for the session report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV step table for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "chronoscope")]
#[command(version)]
#[command(about = "Clock drift and jitter analysis for NTP monitoring sessions", long_about = None)]
pub struct Cli {
    /// Monitoring CSV file to analyze
    #[arg(value_name = "CSV_FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Omit the per-measurement table
    #[arg(long = "no-table")]
    pub no_table: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
