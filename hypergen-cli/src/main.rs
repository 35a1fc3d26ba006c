//! `hypergen <net_num> <cell_num>`: prints a random hypergraph to stdout.
//!
//! The instance is generated in full before anything is written, so a
//! failed run leaves stdout empty and exits with status 1. Argument errors
//! are reported by clap with status 2.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use hypergen_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use hypergen_core::GeneratorErrorCode;
use tracing::{error, field};

fn try_main() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("failed to generate hypergraph")?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut stdout).context("failed to write hypergraph")?;
    stdout.flush().context("failed to flush output")?;
    Ok(())
}

fn error_code(err: &anyhow::Error) -> Option<GeneratorErrorCode> {
    err.downcast_ref::<CliError>().map(|cli_error| match cli_error {
        CliError::Generator(generator) => generator.code(),
    })
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = error_code(&err).map(|code| field::display(code.as_str()));
            error!(error = %format!("{err:#}"), code, "hypergen failed");
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "logging is unavailable when its own setup fails"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
