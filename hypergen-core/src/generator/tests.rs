//! Unit and property tests for the sampling loop.

use std::{collections::BTreeSet, num::NonZeroU64, time::Duration};

use proptest::prelude::*;
use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rstest::rstest;
use test_strategy::Arbitrary;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use hypergen_test_support::tracing::RecordingLayer;

use super::HypergraphGenerator;
use crate::{
    GeneratorError, Hypergraph, TerminationPolicy, distinct_net_capacity,
    test_utils::suite_proptest_config, write_hypergraph,
};

fn generator(nets: i64, cells: i64, termination: TerminationPolicy) -> HypergraphGenerator {
    match HypergraphGenerator::builder()
        .with_net_count(nets)
        .with_cell_count(cells)
        .with_termination(termination)
        .build()
    {
        Ok(generator) => generator,
        Err(err) => panic!("parameters must be valid: {err}"),
    }
}

fn attempts(limit: u64) -> TerminationPolicy {
    match NonZeroU64::new(limit) {
        Some(limit) => TerminationPolicy::unbounded().with_max_attempts(limit),
        None => panic!("attempt limit must be non-zero"),
    }
}

fn assert_well_formed(hypergraph: &Hypergraph, nets: usize, cells: u32) {
    assert_eq!(hypergraph.net_count(), nets);
    assert_eq!(hypergraph.cell_count(), cells);
    let distinct: BTreeSet<_> = hypergraph.nets().iter().collect();
    assert_eq!(distinct.len(), nets, "nets must be pairwise distinct");
    for net in hypergraph.nets() {
        assert!(net.len() >= 2, "net {net} is smaller than two cells");
        assert!(net.len() <= cells as usize, "net {net} exceeds the cell count");
        assert!(net.cells().iter().all(|cell| (1..=cells).contains(cell)));
    }
}

#[test]
fn five_nets_over_ten_cells() {
    let generator = generator(5, 10, TerminationPolicy::unbounded());
    let hypergraph = generator
        .generate(&mut SmallRng::seed_from_u64(1))
        .expect("generation succeeds");
    assert_well_formed(&hypergraph, 5, 10);

    let mut buffer = Vec::new();
    write_hypergraph(&hypergraph, &mut buffer).expect("write succeeds");
    let text = String::from_utf8(buffer).expect("output is UTF-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines.first().copied(), Some("5 10"));
}

#[test]
fn zero_nets_yield_only_the_header() {
    let generator = generator(0, 5, TerminationPolicy::unbounded());
    let hypergraph = generator
        .generate(&mut SmallRng::seed_from_u64(1))
        .expect("generation succeeds");
    let mut buffer = Vec::new();
    write_hypergraph(&hypergraph, &mut buffer).expect("write succeeds");
    assert_eq!(buffer, b"0 5\n");
}

#[test]
fn zero_nets_ignore_an_expired_deadline() {
    let generator = generator(
        0,
        5,
        TerminationPolicy::unbounded().with_max_duration(Duration::ZERO),
    );
    let hypergraph = generator
        .generate(&mut SmallRng::seed_from_u64(1))
        .expect("nothing to sample");
    assert_eq!(hypergraph.net_count(), 0);
}

#[rstest]
#[case(3)]
#[case(17)]
#[case(12_345)]
fn same_seed_reproduces_the_instance(#[case] seed: u64) {
    let generator = generator(25, 40, TerminationPolicy::unbounded());
    let first = generator
        .generate(&mut SmallRng::seed_from_u64(seed))
        .expect("generation succeeds");
    let second = generator
        .generate(&mut SmallRng::seed_from_u64(seed))
        .expect("generation succeeds");
    assert_eq!(first, second);
}

#[test]
fn different_seeds_produce_different_instances() {
    let generator = generator(10, 30, TerminationPolicy::unbounded());
    let first = generator
        .generate(&mut SmallRng::seed_from_u64(1))
        .expect("generation succeeds");
    let second = generator
        .generate(&mut SmallRng::seed_from_u64(2))
        .expect("generation succeeds");
    assert_ne!(first, second);
}

#[test]
fn accepts_a_dynamic_randomness_source() {
    let generator = generator(4, 8, TerminationPolicy::unbounded());
    let mut boxed: Box<dyn RngCore> = Box::new(SmallRng::seed_from_u64(5));
    let hypergraph = generator
        .generate(boxed.as_mut())
        .expect("generation succeeds");
    assert_well_formed(&hypergraph, 4, 8);
}

#[test]
fn collects_every_net_over_two_cells() {
    let generator = generator(1, 2, attempts(10));
    let hypergraph = generator
        .generate(&mut SmallRng::seed_from_u64(8))
        .expect("the single pair is always drawn");
    assert_eq!(hypergraph.nets().first().map(|net| net.cells()), Some(&[1, 2][..]));
}

#[test]
fn attempt_budget_stops_unreachable_requests() {
    let generator = generator(2, 2, attempts(50));
    let err = generator
        .generate(&mut SmallRng::seed_from_u64(8))
        .expect_err("only one distinct net exists over two cells");
    assert_eq!(
        err,
        GeneratorError::AttemptsExhausted {
            attempts: 50,
            collected: 1,
            requested: 2,
        }
    );
}

#[test]
fn deadline_stops_unreachable_requests() {
    let generator = generator(
        4,
        3,
        TerminationPolicy::unbounded().with_max_duration(Duration::from_millis(20)),
    );
    let err = generator
        .generate(&mut SmallRng::seed_from_u64(8))
        .expect_err("only three pairs can be drawn over three cells");
    match err {
        GeneratorError::DeadlineExceeded {
            elapsed,
            collected,
            requested,
        } => {
            assert!(elapsed >= Duration::from_millis(20));
            assert_eq!(collected, 3);
            assert_eq!(requested, 4);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn generation_span_records_progress() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let generator = generator(6, 12, TerminationPolicy::unbounded());

    let hypergraph = tracing::subscriber::with_default(subscriber, || {
        generator.generate(&mut SmallRng::seed_from_u64(21))
    })
    .expect("generation succeeds");
    assert_eq!(hypergraph.net_count(), 6);

    let span = layer
        .span_named("generator.generate")
        .expect("generator.generate span must exist");
    assert_eq!(span.fields.get("net_count"), Some(&"6".to_owned()));
    assert_eq!(span.fields.get("cell_count"), Some(&"12".to_owned()));
    let attempts: u64 = span
        .fields
        .get("attempts")
        .and_then(|value| value.parse().ok())
        .expect("attempts must be recorded");
    let duplicates: u64 = span
        .fields
        .get("duplicates")
        .and_then(|value| value.parse().ok())
        .expect("duplicates must be recorded");
    assert_eq!(attempts, 6 + duplicates);
}

#[test]
fn unreachable_request_logs_a_warning() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let generator = generator(5, 3, attempts(100));

    let result = tracing::subscriber::with_default(subscriber, || {
        generator.generate(&mut SmallRng::seed_from_u64(2))
    });
    assert!(matches!(
        result,
        Err(GeneratorError::AttemptsExhausted { collected: 3, .. })
    ));

    let warning = layer
        .events()
        .into_iter()
        .find(|event| event.level == Level::WARN)
        .expect("a warning must be logged");
    assert_eq!(warning.fields.get("requested"), Some(&"5".to_owned()));
    assert_eq!(warning.fields.get("capacity"), Some(&"3".to_owned()));
    assert!(
        warning
            .fields
            .get("message")
            .is_some_and(|message| message.contains("termination budget"))
    );
}

#[test]
fn warning_excludes_the_undrawable_full_cell_set() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let generator = generator(11, 4, attempts(20_000));

    let result = tracing::subscriber::with_default(subscriber, || {
        generator.generate(&mut SmallRng::seed_from_u64(4))
    });
    assert_eq!(
        result,
        Err(GeneratorError::AttemptsExhausted {
            attempts: 20_000,
            collected: 10,
            requested: 11,
        })
    );

    let warnings = layer.events_at(Level::WARN);
    let warning = warnings.first().expect("a warning must be logged");
    assert_eq!(warning.fields.get("requested"), Some(&"11".to_owned()));
    assert_eq!(warning.fields.get("capacity"), Some(&"10".to_owned()));
}

#[test]
fn reachable_request_logs_no_warning() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let generator = generator(3, 10, TerminationPolicy::unbounded());

    tracing::subscriber::with_default(subscriber, || {
        generator.generate(&mut SmallRng::seed_from_u64(2))
    })
    .expect("generation succeeds");

    assert!(layer.events().iter().all(|event| event.level != Level::WARN));
}

/// Shapes of request exercised by the property suite.
#[derive(Clone, Copy, Debug, Arbitrary)]
enum Regime {
    /// Few nets over many cells; duplicates are rare.
    #[weight(3)]
    Sparse,
    /// Every reachable net over a handful of cells; duplicates dominate.
    #[weight(1)]
    Exhaustive,
}

fn request_strategy() -> impl Strategy<Value = (i64, i64, u64)> {
    (any::<Regime>(), any::<u16>(), any::<u64>()).prop_map(|(regime, hint, seed)| {
        let hint = i64::from(hint);
        match regime {
            Regime::Sparse => (hint % 40, 8 + hint % 60, seed),
            Regime::Exhaustive => {
                let cells = 4 + hint % 3;
                let reachable = u32::try_from(cells)
                    .ok()
                    .and_then(distinct_net_capacity)
                    .and_then(|capacity| i64::try_from(capacity).ok())
                    .unwrap_or(0);
                (reachable, cells, seed)
            }
        }
    })
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn generated_instances_are_well_formed((nets, cells, seed) in request_strategy()) {
        let generator = generator(nets, cells, attempts(1_000_000));
        let hypergraph = generator
            .generate(&mut SmallRng::seed_from_u64(seed))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let expected_nets = usize::try_from(nets).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let expected_cells = u32::try_from(cells).map_err(|err| TestCaseError::fail(err.to_string()))?;
        assert_well_formed(&hypergraph, expected_nets, expected_cells);
    }

    #[test]
    fn generation_is_deterministic_per_seed((nets, cells, seed) in request_strategy()) {
        let generator = generator(nets, cells, attempts(1_000_000));
        let first = generator
            .generate(&mut SmallRng::seed_from_u64(seed))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let second = generator
            .generate(&mut SmallRng::seed_from_u64(seed))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(first, second);
    }
}
