//! book-review CLI
//!
//! Record book reviews in a terminal form and see their average rating.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use book_review::logging::init_tracing;
use book_review::report::format_report;
use book_review::tui::run::run;
use book_review::types::{OutputFormat, SessionConfig};

#[derive(Parser)]
#[command(name = "book-review")]
#[command(about = "Record book reviews and track their average rating")]
#[command(version)]
struct Cli {
    /// Print the session's reviews after quitting
    #[arg(long, value_enum)]
    summary: Option<OutputFormatArg>,

    /// How long validation notices stay visible, in milliseconds
    #[arg(long, default_value_t = 2000)]
    notice_ms: u64,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, env = "BOOK_REVIEW_LOG")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

impl From<Cli> for SessionConfig {
    fn from(cli: Cli) -> Self {
        SessionConfig {
            notice_duration: Duration::from_millis(cli.notice_ms),
            summary: cli.summary.map(Into::into),
            log_file: cli.log_file,
        }
    }
}

fn main() -> ExitCode {
    let config = SessionConfig::from(Cli::parse());

    match cmd_session(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_session(config: &SessionConfig) -> Result<(), String> {
    if let Some(path) = &config.log_file {
        init_tracing(path).map_err(|e| e.to_string())?;
    }

    let store = run(config).map_err(|e| format!("terminal error: {}", e))?;

    if let Some(format) = config.summary {
        print!("{}", format_report(&store, format));
    }

    Ok(())
}
