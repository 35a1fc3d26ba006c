//! Validated generation parameters and the termination policy.

use std::{num::NonZeroU64, time::Duration};

use crate::error::{GeneratorError, Result};

/// Smallest cell count for which a net of two cells exists.
pub const MIN_CELL_COUNT: u32 = 2;

/// Validated instance dimensions.
///
/// # Examples
/// ```
/// use hypergen_core::HypergraphParams;
///
/// let params = HypergraphParams::try_new(5, 10).expect("parameters are valid");
/// assert_eq!(params.net_count(), 5);
/// assert_eq!(params.cell_count(), 10);
/// assert!(HypergraphParams::try_new(5, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HypergraphParams {
    net_count: usize,
    cell_count: u32,
}

impl HypergraphParams {
    /// Validates raw counts.
    ///
    /// Counts are signed so negative inputs are reported as degenerate
    /// parameters.
    ///
    /// # Errors
    /// Returns [`GeneratorError::NegativeNetCount`],
    /// [`GeneratorError::TooFewCells`], [`GeneratorError::NetCountTooLarge`]
    /// or [`GeneratorError::CellCountTooLarge`] when a count is out of range.
    pub fn try_new(net_count: i64, cell_count: i64) -> Result<Self> {
        if net_count < 0 {
            return Err(GeneratorError::NegativeNetCount { got: net_count });
        }
        if cell_count < i64::from(MIN_CELL_COUNT) {
            return Err(GeneratorError::TooFewCells { got: cell_count });
        }
        let nets = usize::try_from(net_count)
            .map_err(|_| GeneratorError::NetCountTooLarge { got: net_count })?;
        let cells = u32::try_from(cell_count)
            .map_err(|_| GeneratorError::CellCountTooLarge { got: cell_count })?;
        Ok(Self {
            net_count: nets,
            cell_count: cells,
        })
    }

    /// Exact number of distinct nets to produce.
    #[must_use]
    pub const fn net_count(&self) -> usize {
        self.net_count
    }

    /// Number of cells; identifiers run from 1 to this value.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.cell_count
    }
}

/// Bounds on how long the generator keeps drawing nets.
///
/// The default is unbounded: generation continues until the requested number
/// of distinct nets exists, which never happens when the request exceeds
/// [`crate::distinct_net_capacity`].
///
/// # Examples
/// ```
/// use std::{num::NonZeroU64, time::Duration};
/// use hypergen_core::TerminationPolicy;
///
/// let policy = TerminationPolicy::unbounded()
///     .with_max_attempts(NonZeroU64::new(1_000).expect("non-zero"))
///     .with_max_duration(Duration::from_secs(5));
/// assert!(!policy.is_unbounded());
/// assert_eq!(policy.max_attempts().map(NonZeroU64::get), Some(1_000));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TerminationPolicy {
    max_attempts: Option<NonZeroU64>,
    max_duration: Option<Duration>,
}

impl TerminationPolicy {
    /// A policy that never stops generation early.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_attempts: None,
            max_duration: None,
        }
    }

    /// Caps the number of sampling attempts.
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: NonZeroU64) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Caps the wall-clock time spent sampling.
    #[must_use]
    pub const fn with_max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = Some(duration);
        self
    }

    /// Configured attempt cap, if any.
    #[must_use]
    pub const fn max_attempts(&self) -> Option<NonZeroU64> {
        self.max_attempts
    }

    /// Configured wall-clock cap, if any.
    #[must_use]
    pub const fn max_duration(&self) -> Option<Duration> {
        self.max_duration
    }

    /// Whether neither cap is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.max_attempts.is_none() && self.max_duration.is_none()
    }
}
