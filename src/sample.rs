//! Offset samples and session metadata
//!
//! A monitoring session is a list of `Sample`s in collection order plus one
//! `SessionMetadata` describing the time source that answered the requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single clock-offset measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since the start of the monitoring session
    pub elapsed: f64,
    /// Measured deviation from the reference clock, in signed seconds
    pub offset: f64,
}

impl Sample {
    pub fn new(elapsed: f64, offset: f64) -> Self {
        Self { elapsed, offset }
    }
}

/// Stratum reported by the time source
///
/// Usually a small integer, but some sources report a symbolic value
/// (e.g. `unspecified`), which is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stratum {
    Level(u8),
    Label(String),
}

impl Stratum {
    /// Parse a stratum field, falling back to a label when it is not numeric
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<u8>() {
            Ok(level) => Stratum::Level(level),
            Err(_) => Stratum::Label(raw.to_string()),
        }
    }
}

impl fmt::Display for Stratum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stratum::Level(level) => write!(f, "{}", level),
            Stratum::Label(label) => f.write_str(label),
        }
    }
}

/// Time-source configuration, constant for the whole session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub stratum: Stratum,
    pub reference_id: String,
    pub poll_interval_seconds: f64,
}
