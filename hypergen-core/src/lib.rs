//! Random hypergraph generation for partitioning and placement benchmarks.
//!
//! A [`HypergraphGenerator`] draws nets (hyperedges) over the cells
//! `1..=cell_count` until the requested number of distinct nets exists. Net
//! sizes follow `floor(r^6 * (cell_count - 2) + 2)` for a uniform draw `r`,
//! so small nets dominate. Instances serialise to a line-oriented text format
//! with [`write_hypergraph`] and can be read back with [`read_hypergraph`].

mod builder;
mod error;
mod format;
mod generator;
mod hypergraph;
mod net;
mod params;
mod sampling;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GeneratorBuilder,
    error::{GeneratorError, GeneratorErrorCode, ParseError, Result},
    format::{read_hypergraph, write_hypergraph},
    generator::HypergraphGenerator,
    hypergraph::{Hypergraph, HypergraphStats},
    net::{CellId, Net},
    params::{HypergraphParams, MIN_CELL_COUNT, TerminationPolicy},
    sampling::{SIZE_SKEW_EXPONENT, distinct_net_capacity, net_size_from_draw, sample_net},
};
