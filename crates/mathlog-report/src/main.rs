//! mathlog binary
//!
//! Runs the whole analysis with `mathlog.toml` from the working directory
//! (or the defaults) and prints the report to stdout. Logs go to stderr.

use mathlog_report::{run_pipeline, AnalysisConfig, ReportError, CONFIG_FILE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let result = AnalysisConfig::load_or_default(CONFIG_FILE)
        .map_err(ReportError::from)
        .and_then(|config| run_pipeline(&config));

    match result {
        Ok(report) => {
            print!("{}", report.render());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "Analysis failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
