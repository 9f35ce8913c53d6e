//! Command-line generator for South Korean locale test data.
//!
//! This binary delegates to `fake_ko_kr::cli` for argument handling and
//! execution, keeping the CLI behaviour testable without spawning a process.
//! Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use fake_ko_kr::cli::{Cli, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let requested_output = !err.use_stderr();
            if let Err(print_err) = err.print() {
                drop(print_err);
            }
            return if requested_output {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
