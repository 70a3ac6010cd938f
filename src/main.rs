use std::process::ExitCode;

use clap::Parser;
use jiff::Zoned;
use privat_rates::{Cli, ParseFailure, PrivatBank, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => return report_parse_failure(&err),
    };

    setup_logging(args.verbose);

    run(&PrivatBank::default(), Zoned::now().date(), args.days).report()
}

fn report_parse_failure(err: &clap::Error) -> ExitCode {
    match ParseFailure::classify(err).outcome() {
        Some(outcome) => outcome.report(),
        // Help and version text
        None => match err.print() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("failed to write help: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Logs go to stderr so that stdout only carries the rates. `RUST_LOG` overrides `-v`.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{level},ureq=warn,ureq_proto=warn,rustls=warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
