//! Tests for the observation hooks.

use super::*;
use matchforge_core::CostMatrix;

fn snapshot_fixture() -> (
    matchforge_core::ReducedMatrix<f64>,
    LabelSet,
    LabelSet,
    CoverState,
) {
    let reduced = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]])
        .unwrap()
        .to_reduced();
    (
        reduced,
        LabelSet::with_dim(2),
        LabelSet::with_dim(2),
        CoverState::with_dim(2),
    )
}

#[test]
fn test_default_hooks_are_no_ops() {
    #[derive(Debug)]
    struct SilentObserver;
    impl SolveObserver<f64> for SilentObserver {}

    let (reduced, starred, primed, cover) = snapshot_fixture();
    let snapshot = StateSnapshot {
        reduced: &reduced,
        starred: &starred,
        primed: &primed,
        cover: &cover,
    };

    let observer = SilentObserver;
    observer.on_reduced(&snapshot);
    observer.on_seeded(&snapshot);
    observer.on_covering_step(&snapshot);
    observer.on_augmented(&snapshot);
    observer.on_adjusted(1.0, &snapshot);
    observer.on_finished(&snapshot);
}

#[test]
fn test_counting_observer_counts_each_hook() {
    let (reduced, starred, primed, cover) = snapshot_fixture();
    let snapshot = StateSnapshot {
        reduced: &reduced,
        starred: &starred,
        primed: &primed,
        cover: &cover,
    };

    let observer = CountingObserver::new();
    observer.on_reduced(&snapshot);
    observer.on_covering_step(&snapshot);
    observer.on_covering_step(&snapshot);
    observer.on_adjusted(2.0, &snapshot);

    assert_eq!(observer.reduced_count(), 1);
    assert_eq!(observer.seeded_count(), 0);
    assert_eq!(observer.covering_step_count(), 2);
    assert_eq!(observer.augmented_count(), 0);
    assert_eq!(observer.adjusted_count(), 1);
    assert_eq!(observer.finished_count(), 0);
}

#[test]
fn test_trace_observer_is_shareable() {
    let observer: std::sync::Arc<dyn SolveObserver<f64>> = std::sync::Arc::new(TraceObserver::new());
    let (reduced, starred, primed, cover) = snapshot_fixture();

    observer.on_finished(&StateSnapshot {
        reduced: &reduced,
        starred: &starred,
        primed: &primed,
        cover: &cover,
    });
}
