//! Builder utilities for configuring [`HypergraphGenerator`] instances.

use crate::{
    error::Result,
    generator::HypergraphGenerator,
    params::{HypergraphParams, MIN_CELL_COUNT, TerminationPolicy},
};

/// Configures and constructs [`HypergraphGenerator`] instances.
///
/// Counts are held as signed integers until [`GeneratorBuilder::build`]
/// validates them.
///
/// # Examples
/// ```
/// use std::num::NonZeroU64;
/// use hypergen_core::{GeneratorBuilder, TerminationPolicy};
///
/// let generator = GeneratorBuilder::new()
///     .with_net_count(20)
///     .with_cell_count(50)
///     .with_termination(
///         TerminationPolicy::unbounded().with_max_attempts(NonZeroU64::new(10_000).expect("non-zero")),
///     )
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.params().net_count(), 20);
/// assert_eq!(generator.params().cell_count(), 50);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GeneratorBuilder {
    net_count: i64,
    cell_count: i64,
    termination: TerminationPolicy,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            net_count: 0,
            cell_count: i64::from(MIN_CELL_COUNT),
            termination: TerminationPolicy::unbounded(),
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder for an empty instance over two cells with an
    /// unbounded termination policy.
    ///
    /// # Examples
    /// ```
    /// use hypergen_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.net_count(), 0);
    /// assert_eq!(builder.cell_count(), 2);
    /// assert!(builder.termination().is_unbounded());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of distinct nets to generate.
    #[must_use]
    pub const fn with_net_count(mut self, count: i64) -> Self {
        self.net_count = count;
        self
    }

    /// Returns the configured net count.
    #[must_use]
    pub const fn net_count(&self) -> i64 {
        self.net_count
    }

    /// Overrides the number of cells available to nets.
    #[must_use]
    pub const fn with_cell_count(mut self, count: i64) -> Self {
        self.cell_count = count;
        self
    }

    /// Returns the configured cell count.
    #[must_use]
    pub const fn cell_count(&self) -> i64 {
        self.cell_count
    }

    /// Sets the policy that bounds the sampling loop.
    #[must_use]
    pub const fn with_termination(mut self, termination: TerminationPolicy) -> Self {
        self.termination = termination;
        self
    }

    /// Returns the configured termination policy.
    #[must_use]
    pub const fn termination(&self) -> TerminationPolicy {
        self.termination
    }

    /// Validates the configuration and constructs a [`HypergraphGenerator`].
    ///
    /// # Errors
    /// Returns the degenerate-parameter variants of
    /// [`crate::GeneratorError`] when a count is out of range.
    ///
    /// # Examples
    /// ```
    /// use hypergen_core::{GeneratorBuilder, GeneratorError};
    ///
    /// let err = GeneratorBuilder::new()
    ///     .with_net_count(3)
    ///     .with_cell_count(1)
    ///     .build()
    ///     .expect_err("a single cell cannot form a net");
    /// assert_eq!(err, GeneratorError::TooFewCells { got: 1 });
    /// ```
    pub fn build(self) -> Result<HypergraphGenerator> {
        let params = HypergraphParams::try_new(self.net_count, self.cell_count)?;
        Ok(HypergraphGenerator::new(params, self.termination))
    }
}
