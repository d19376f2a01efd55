//! CSV ingestion for monitoring sessions
//!
//! Reads the CSV produced by the NTP monitoring client and turns it into an
//! ordered list of [`Sample`]s plus the session's [`SessionMetadata`].
//!
//! Columns are located by header name, so column order does not matter and
//! extra columns (timestamps, round-trip times, ...) are ignored. Required
//! columns:
//!
//! ```csv
//! elapsed_seconds,offset_seconds,stratum,reference_id,poll_interval_seconds
//! ```
//!
//! Records keep their file order. Metadata is taken from the first record;
//! later records are not cross-checked against it. An empty file, like a
//! header with no records, is an empty session rather than an error.

use crate::sample::{Sample, SessionMetadata, Stratum};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

pub const ELAPSED_COLUMN: &str = "elapsed_seconds";
pub const OFFSET_COLUMN: &str = "offset_seconds";
pub const STRATUM_COLUMN: &str = "stratum";
pub const REFERENCE_ID_COLUMN: &str = "reference_id";
pub const POLL_INTERVAL_COLUMN: &str = "poll_interval_seconds";

/// Errors raised while reading a monitoring CSV
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Line {line}: expected {expected} columns, got {actual}")]
    ColumnCount {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Line {line}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
}

/// Samples and metadata read from one session file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    /// Samples in collection (file) order
    pub samples: Vec<Sample>,
    /// Metadata from the first record; `None` when the file has no records
    pub metadata: Option<SessionMetadata>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Positions of the required columns within a record
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    elapsed: usize,
    offset: usize,
    stratum: usize,
    reference_id: usize,
    poll_interval: usize,
    width: usize,
}

impl ColumnIndex {
    fn from_header(header: &[String]) -> Result<Self, IngestError> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(IngestError::MissingColumn(name))
        };

        Ok(Self {
            elapsed: find(ELAPSED_COLUMN)?,
            offset: find(OFFSET_COLUMN)?,
            stratum: find(STRATUM_COLUMN)?,
            reference_id: find(REFERENCE_ID_COLUMN)?,
            poll_interval: find(POLL_INTERVAL_COLUMN)?,
            width: header.len(),
        })
    }

    fn required_width(&self) -> usize {
        [
            self.elapsed,
            self.offset,
            self.stratum,
            self.reference_id,
            self.poll_interval,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

/// Load a session from a CSV file on disk
///
/// # Errors
/// Returns `IngestError` if the file cannot be read, its header lacks a
/// required column, or a record holds a non-numeric elapsed/offset value.
pub fn load_samples(path: &Path) -> Result<SampleSet, IngestError> {
    let file = File::open(path)?;
    let set = read_samples(BufReader::new(file))?;
    if set.is_empty() {
        tracing::info!("No records in {}", path.display());
    } else {
        tracing::info!("Loaded {} samples from {}", set.len(), path.display());
    }
    Ok(set)
}

/// Parse a session from CSV text held in memory
pub fn parse_samples(input: &str) -> Result<SampleSet, IngestError> {
    read_samples(input.as_bytes())
}

/// Parse a session from any buffered reader
pub fn read_samples<R: BufRead>(reader: R) -> Result<SampleSet, IngestError> {
    let mut columns: Option<ColumnIndex> = None;
    let mut set = SampleSet::default();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = line_result?;
        let line = line.trim_start_matches('\u{feff}').trim_end_matches('\r');

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_record(line, line_num)?;

        let Some(index) = columns else {
            let index = ColumnIndex::from_header(&fields)?;
            tracing::debug!("Resolved CSV header with {} columns", index.width);
            columns = Some(index);
            continue;
        };

        if fields.len() < index.required_width() {
            return Err(IngestError::ColumnCount {
                line: line_num,
                expected: index.width,
                actual: fields.len(),
            });
        }

        let elapsed = parse_number(&fields[index.elapsed], ELAPSED_COLUMN, line_num)?;
        if elapsed < 0.0 {
            return Err(IngestError::InvalidValue {
                line: line_num,
                column: ELAPSED_COLUMN,
                value: fields[index.elapsed].clone(),
            });
        }
        let offset = parse_number(&fields[index.offset], OFFSET_COLUMN, line_num)?;

        if set.metadata.is_none() {
            set.metadata = Some(SessionMetadata {
                stratum: Stratum::parse(&fields[index.stratum]),
                reference_id: fields[index.reference_id].trim().to_string(),
                poll_interval_seconds: parse_number(
                    &fields[index.poll_interval],
                    POLL_INTERVAL_COLUMN,
                    line_num,
                )?,
            });
        }

        set.samples.push(Sample::new(elapsed, offset));
    }

    if columns.is_none() {
        tracing::debug!("Input has no header row");
    }

    Ok(set)
}

fn parse_number(raw: &str, column: &'static str, line: usize) -> Result<f64, IngestError> {
    let invalid = || IngestError::InvalidValue {
        line,
        column,
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Split one CSV record, honouring double-quoted fields and `""` escapes
fn split_record(line: &str, line_num: usize) -> Result<Vec<String>, IngestError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(IngestError::UnterminatedQuote { line: line_num });
    }

    fields.push(field);
    Ok(fields)
}
