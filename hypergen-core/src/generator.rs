//! The sampling loop that assembles a hypergraph of distinct nets.

use std::{collections::BTreeSet, time::Instant};

use rand::Rng;
use tracing::{Span, debug, field, instrument, trace, warn};

use crate::{
    builder::GeneratorBuilder,
    error::{GeneratorError, Result},
    hypergraph::Hypergraph,
    net::Net,
    params::{HypergraphParams, TerminationPolicy},
    sampling::{distinct_net_capacity, sample_net},
};

/// Generates random hypergraphs whose net sizes are skewed toward two.
///
/// The randomness source is supplied per call, so a seeded generator yields
/// the same instance every time.
///
/// # Examples
/// ```
/// use hypergen_core::HypergraphGenerator;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let generator = HypergraphGenerator::builder()
///     .with_net_count(5)
///     .with_cell_count(10)
///     .build()
///     .expect("parameters are valid");
/// let first = generator.generate(&mut SmallRng::seed_from_u64(9)).expect("generation succeeds");
/// let second = generator.generate(&mut SmallRng::seed_from_u64(9)).expect("generation succeeds");
/// assert_eq!(first.net_count(), 5);
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HypergraphGenerator {
    params: HypergraphParams,
    termination: TerminationPolicy,
}

impl HypergraphGenerator {
    /// Creates a generator from validated parameters.
    #[must_use]
    pub const fn new(params: HypergraphParams, termination: TerminationPolicy) -> Self {
        Self {
            params,
            termination,
        }
    }

    /// Starts a [`GeneratorBuilder`] populated with defaults.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Instance dimensions this generator produces.
    #[must_use]
    pub const fn params(&self) -> HypergraphParams {
        self.params
    }

    /// Policy bounding the sampling loop.
    #[must_use]
    pub const fn termination(&self) -> TerminationPolicy {
        self.termination
    }

    /// Draws nets from `rng` until the requested number of distinct nets
    /// exists.
    ///
    /// A draw equal to an already collected net is discarded and does not
    /// count toward the target. With an unbounded policy the loop never ends
    /// when the target exceeds [`distinct_net_capacity`]; a warning is logged
    /// before sampling starts.
    ///
    /// # Errors
    /// Returns [`GeneratorError::AttemptsExhausted`] or
    /// [`GeneratorError::DeadlineExceeded`] when the termination policy stops
    /// the loop first. No partial instance is returned.
    #[instrument(
        name = "generator.generate",
        err,
        skip(self, rng),
        fields(
            net_count = self.params.net_count(),
            cell_count = self.params.cell_count(),
            attempts = field::Empty,
            duplicates = field::Empty,
        ),
    )]
    pub fn generate<R>(&self, rng: &mut R) -> Result<Hypergraph>
    where
        R: Rng + ?Sized,
    {
        let requested = self.params.net_count();
        let cell_count = self.params.cell_count();
        self.warn_if_unreachable();

        let mut progress = Progress::start(requested);
        while progress.nets.len() < requested {
            if let Err(err) = progress.check(self.termination) {
                progress.record(&Span::current());
                return Err(err);
            }
            progress.attempts += 1;
            let net = sample_net(rng, cell_count);
            if progress.nets.contains(&net) {
                progress.duplicates += 1;
                trace!(size = net.len(), "discarded duplicate net");
            } else {
                progress.nets.insert(net);
            }
        }

        progress.record(&Span::current());
        debug!(
            attempts = progress.attempts,
            duplicates = progress.duplicates,
            "generation completed"
        );
        Ok(Hypergraph::from_distinct_nets(cell_count, progress.nets))
    }

    fn warn_if_unreachable(&self) {
        let requested = u128::try_from(self.params.net_count()).unwrap_or(u128::MAX);
        let Some(capacity) = distinct_net_capacity(self.params.cell_count()) else {
            return;
        };
        if requested <= capacity {
            return;
        }
        if self.termination.is_unbounded() {
            warn!(
                requested = self.params.net_count(),
                capacity = capacity,
                "requested net count exceeds the distinct nets available; generation will not terminate"
            );
        } else {
            warn!(
                requested = self.params.net_count(),
                capacity = capacity,
                "requested net count exceeds the distinct nets available; generation will stop at the termination budget"
            );
        }
    }
}

struct Progress {
    nets: BTreeSet<Net>,
    requested: usize,
    attempts: u64,
    duplicates: u64,
    started: Instant,
}

impl Progress {
    fn start(requested: usize) -> Self {
        Self {
            nets: BTreeSet::new(),
            requested,
            attempts: 0,
            duplicates: 0,
            started: Instant::now(),
        }
    }

    fn check(&self, policy: TerminationPolicy) -> Result<()> {
        if let Some(limit) = policy.max_attempts() {
            if self.attempts >= limit.get() {
                return Err(GeneratorError::AttemptsExhausted {
                    attempts: self.attempts,
                    collected: self.nets.len(),
                    requested: self.requested,
                });
            }
        }
        if let Some(limit) = policy.max_duration() {
            let elapsed = self.started.elapsed();
            if elapsed >= limit {
                return Err(GeneratorError::DeadlineExceeded {
                    elapsed,
                    collected: self.nets.len(),
                    requested: self.requested,
                });
            }
        }
        Ok(())
    }

    fn record(&self, span: &Span) {
        span.record("attempts", self.attempts);
        span.record("duplicates", self.duplicates);
    }
}

#[cfg(test)]
mod tests;
