use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use xenoglossia::cli;
use xenoglossia::config::Config;

fn main() -> ExitCode {
    let args = cli::parse_args();
    let config = Config::from_args(&args);
    init_tracing(&config.log_filter);

    let status = cli::run_cli(&args, &config, io::stdin().lock(), io::stdout().lock(), io::stderr());
    ExitCode::from(status)
}

/// Log to stderr so stdout carries only the program's result.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("xg: ignoring log filter {filter:?}: {e}");
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
