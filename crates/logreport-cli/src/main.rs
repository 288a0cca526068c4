use anyhow::Result;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use logreport_cli::commands;
use logreport_core::pipeline::ReportRequest;
use logreport_core::report;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logreport")]
#[command(author, version)]
#[command(
    about = "Process log files and generate reports",
    long_about = "Reads JSON-lines log files, optionally keeps only the entries from one day, \
                  and prints an aggregate report as a table."
)]
struct Cli {
    /// Path to log file(s)
    #[arg(long = "file", value_name = "PATH", num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Type of report to generate
    #[arg(long, value_name = "NAME", value_parser = PossibleValuesParser::new(report::names()))]
    report: String,

    /// Filter logs by date (format: YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let mut request = ReportRequest::new(cli.files, cli.report);
    if let Some(date) = cli.date {
        request = request.with_date(date);
    }

    commands::report::execute(&request)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose {
        "logreport=debug"
    } else {
        "logreport=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the report; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
