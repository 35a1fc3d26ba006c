//! The generated hypergraph instance and its summary statistics.

use std::collections::{BTreeSet, HashMap};

use crate::net::{CellId, Net};

/// A hypergraph instance: a cell range plus a collection of nets.
///
/// Instances built by [`crate::HypergraphGenerator`] hold pairwise-distinct
/// nets in ascending order. Instances read with [`crate::read_hypergraph`]
/// keep the order of the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hypergraph {
    cell_count: u32,
    nets: Vec<Net>,
}

impl Hypergraph {
    pub(crate) fn from_distinct_nets(cell_count: u32, nets: BTreeSet<Net>) -> Self {
        Self {
            cell_count,
            nets: nets.into_iter().collect(),
        }
    }

    pub(crate) const fn from_parts(cell_count: u32, nets: Vec<Net>) -> Self {
        Self { cell_count, nets }
    }

    /// Number of cells; identifiers run from 1 to this value.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// Number of nets in the instance.
    #[must_use]
    pub fn net_count(&self) -> usize {
        self.nets.len()
    }

    /// The nets of the instance.
    #[must_use]
    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    /// Computes summary statistics for the instance.
    ///
    /// # Examples
    /// ```
    /// use hypergen_core::{HypergraphGenerator, HypergraphParams, TerminationPolicy};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let params = HypergraphParams::try_new(4, 8).expect("valid parameters");
    /// let generator = HypergraphGenerator::new(params, TerminationPolicy::unbounded());
    /// let hypergraph = generator
    ///     .generate(&mut SmallRng::seed_from_u64(3))
    ///     .expect("generation succeeds");
    /// let stats = hypergraph.stats();
    /// assert_eq!(stats.net_count, 4);
    /// assert!(stats.min_net_size.is_some_and(|size| size >= 2));
    /// ```
    #[must_use]
    pub fn stats(&self) -> HypergraphStats {
        let mut degrees: HashMap<CellId, usize> = HashMap::new();
        let mut pin_count = 0_usize;
        let mut min_net_size: Option<usize> = None;
        let mut max_net_size: Option<usize> = None;

        for net in &self.nets {
            pin_count += net.len();
            min_net_size = Some(min_net_size.map_or(net.len(), |size| size.min(net.len())));
            max_net_size = Some(max_net_size.map_or(net.len(), |size| size.max(net.len())));
            for cell in net.cells() {
                *degrees.entry(*cell).or_default() += 1;
            }
        }

        let touched = degrees.len();
        HypergraphStats {
            net_count: self.nets.len(),
            cell_count: self.cell_count,
            pin_count,
            min_net_size,
            max_net_size,
            max_cell_degree: degrees.values().copied().max().unwrap_or(0),
            isolated_cells: (self.cell_count as usize).saturating_sub(touched),
        }
    }
}

/// Summary statistics describing a [`Hypergraph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HypergraphStats {
    /// Number of nets.
    pub net_count: usize,
    /// Number of cells in the identifier range.
    pub cell_count: u32,
    /// Total number of net memberships (sum of net sizes).
    pub pin_count: usize,
    /// Size of the smallest net, if any nets exist.
    pub min_net_size: Option<usize>,
    /// Size of the largest net, if any nets exist.
    pub max_net_size: Option<usize>,
    /// Largest number of nets any single cell belongs to.
    pub max_cell_degree: usize,
    /// Cells that belong to no net.
    pub isolated_cells: usize,
}

impl HypergraphStats {
    /// Mean net size, or `None` for an instance without nets.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "the mean is reported for diagnostics only"
    )]
    pub fn mean_net_size(&self) -> Option<f64> {
        (self.net_count > 0).then(|| self.pin_count as f64 / self.net_count as f64)
    }
}
