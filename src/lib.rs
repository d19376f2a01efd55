//! Chronoscope - clock drift and jitter analysis for NTP monitoring sessions
//!
//! This library reads the offset samples recorded by an NTP monitoring
//! session, computes drift, spread and jitter statistics over them, and
//! classifies the clock's health against fixed thresholds.

pub mod analysis;
pub mod cli;
pub mod csv_output;
pub mod ingest;
pub mod json_output;
pub mod report;
pub mod sample;
pub mod text_output;
