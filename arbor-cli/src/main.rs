//! Entry point of the `arbor` binary.
//!
//! Logging is installed before anything else runs, so a failed command is
//! reported through `tracing` with its stable code, and the source line when
//! the edge list was at fault. The forest summary is the only stdout output.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use arbor_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("failed to execute command")?;
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut out).context("failed to render summary")?;
    out.flush().context("failed to flush output")
}

fn report_failure(err: &anyhow::Error) {
    let cause = err.downcast_ref::<CliError>();
    error!(
        error = %format!("{err:#}"),
        code = cause.map(|cause| field::display(cause.code())),
        line = cause.and_then(CliError::line),
        heap_code = cause.and_then(CliError::heap_code).map(field::display),
        "command execution failed"
    );
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable until a subscriber is installed"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
