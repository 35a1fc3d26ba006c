//! Argument parsing and command execution for the `hypergen` CLI.

use std::io::{self, Write};
use std::num::NonZeroU64;
use std::time::Duration;

use clap::{Args, Parser};
use hypergen_core::{
    GeneratorBuilder, GeneratorError, Hypergraph, HypergraphGenerator, TerminationPolicy,
    write_hypergraph,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hypergen",
    about = "Generate a random hypergraph whose net sizes are skewed toward two.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of distinct nets to generate.
    pub net_num: i64,

    /// Number of cells; identifiers run from 1 to this value.
    pub cell_num: i64,

    /// Sampling options.
    #[command(flatten)]
    pub options: GenerateOptions,
}

/// Options controlling the random source and the sampling budget.
#[derive(Debug, Args, Clone, Default)]
pub struct GenerateOptions {
    /// Seed for the random number generator; drawn at random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after this many sampling attempts instead of looping forever.
    #[arg(long = "max-attempts")]
    pub max_attempts: Option<NonZeroU64>,

    /// Give up after this many seconds of sampling instead of looping forever.
    #[arg(long = "max-seconds")]
    pub max_seconds: Option<u64>,
}

impl GenerateOptions {
    fn termination(&self) -> TerminationPolicy {
        let mut policy = TerminationPolicy::unbounded();
        if let Some(attempts) = self.max_attempts {
            policy = policy.with_max_attempts(attempts);
        }
        if let Some(seconds) = self.max_seconds {
            policy = policy.with_max_duration(Duration::from_secs(seconds));
        }
        policy
    }
}

/// Errors surfaced while executing the CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parameter validation or generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Seed the random source was initialised with.
    pub seed: u64,
    /// The generated instance.
    pub hypergraph: Hypergraph,
}

/// Executes the command represented by `cli`.
///
/// Parameters are validated before the random source is seeded, so
/// degenerate counts fail without sampling anything.
///
/// # Errors
/// Returns [`CliError`] when validation or generation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hypergen_cli::cli::{Cli, GenerateOptions, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     net_num: 5,
///     cell_num: 10,
///     options: GenerateOptions {
///         seed: Some(7),
///         ..GenerateOptions::default()
///     },
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.seed, 7);
/// assert_eq!(summary.hypergraph.net_count(), 5);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(net_num = cli.net_num, cell_num = cli.cell_num, seed = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let generator = build_generator(&cli)?;
    let seed = cli.options.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);
    info!(seed, "seeded random source");

    let mut rng = SmallRng::seed_from_u64(seed);
    let hypergraph = generator.generate(&mut rng)?;

    let stats = hypergraph.stats();
    info!(
        nets = stats.net_count,
        pins = stats.pin_count,
        max_net_size = stats.max_net_size,
        mean_net_size = stats.mean_net_size(),
        max_cell_degree = stats.max_cell_degree,
        isolated_cells = stats.isolated_cells,
        "generation completed"
    );
    Ok(ExecutionSummary { seed, hypergraph })
}

pub(super) fn build_generator(cli: &Cli) -> Result<HypergraphGenerator, CliError> {
    let generator = GeneratorBuilder::new()
        .with_net_count(cli.net_num)
        .with_cell_count(cli.cell_num)
        .with_termination(cli.options.termination())
        .build()?;
    Ok(generator)
}

/// Renders the generated instance in the hypergraph text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hypergen_cli::cli::{ExecutionSummary, render_summary};
/// # use hypergen_core::read_hypergraph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     seed: 1,
///     hypergraph: read_hypergraph("1 3\n1 3\n".as_bytes())?,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"1 3\n1 3\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    write_hypergraph(&summary.hypergraph, writer)
}
