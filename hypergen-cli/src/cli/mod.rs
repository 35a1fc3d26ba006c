//! Command-line interface for the hypergraph generator.
//!
//! `hypergen <net_num> <cell_num>` validates the counts, generates the
//! instance, and hands it back for rendering to stdout.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, GenerateOptions, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
