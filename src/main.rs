use anyhow::{Context, Result};
use chronoscope::analysis::{self, AnalysisError};
use chronoscope::cli::Cli;
use chronoscope::ingest;
use chronoscope::report::{self, ReportOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let Some(input) = args.input else {
        eprintln!("Usage: chronoscope <csv_file>");
        std::process::exit(1);
    };

    let options = ReportOptions {
        format: args.format,
        include_table: !args.no_table,
    };

    let set = ingest::load_samples(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let output = match analysis::analyze(&set.samples) {
        Ok(result) => {
            let metadata = set
                .metadata
                .as_ref()
                .context("Session has samples but no metadata")?;
            report::render(&result, metadata, &options)?
        }
        Err(AnalysisError::EmptyInput) => {
            tracing::warn!("{} contains no records", input.display());
            report::render_no_data(&options)
        }
    };

    print!("{}", output);
    Ok(())
}
