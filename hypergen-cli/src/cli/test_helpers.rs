//! Small helpers shared across CLI tests.

use clap::Parser;

use super::commands::build_generator;
use super::{Cli, CliError, GenerateOptions, run_cli};

pub(super) fn seeded_cli(net_num: i64, cell_num: i64, seed: u64) -> Cli {
    Cli {
        net_num,
        cell_num,
        options: GenerateOptions {
            seed: Some(seed),
            ..GenerateOptions::default()
        },
    }
}

pub(super) fn parse(args: &[&str]) -> Cli {
    match Cli::try_parse_from(std::iter::once("hypergen").chain(args.iter().copied())) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments {args:?} must parse: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn build_expecting_error(cli: &Cli, panic_msg: &str) -> CliError {
    match build_generator(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
