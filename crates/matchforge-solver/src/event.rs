//! Observation hooks for the solve loop.
//!
//! The engine itself never prints. Observers receive borrowed state
//! snapshots at defined checkpoints and decide what to do with them;
//! `TraceObserver` renders the classical worked-example text, while
//! `CountingObserver` just counts callbacks for tests.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use matchforge_core::CostMatrix;
//! use matchforge_solver::{CountingObserver, SolveSession};
//!
//! let matrix = CostMatrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
//! let observer = Arc::new(CountingObserver::new());
//! let session = SolveSession::new(matrix).with_observer(observer.clone());
//!
//! session.solve().unwrap();
//! assert_eq!(observer.reduced_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

use matchforge_core::{Cost, ReducedMatrix};

use crate::cover::CoverState;
use crate::labels::LabelSet;
use crate::render;

/// A borrowed view of the working state at an observation checkpoint.
#[derive(Debug, Clone, Copy)]
pub struct StateSnapshot<'a, C> {
    /// The working matrix as of the checkpoint.
    pub reduced: &'a ReducedMatrix<C>,
    /// The starred zeros (candidate matching).
    pub starred: &'a LabelSet,
    /// The primed zeros (in-flight search marks).
    pub primed: &'a LabelSet,
    /// The covered lines.
    pub cover: &'a CoverState,
}

/// Listener for solve checkpoints.
///
/// All methods default to no-ops; implement the ones of interest.
/// Observers receive shared borrows only and can never influence the
/// solve's result.
pub trait SolveObserver<C: Cost>: Send + Sync + Debug {
    /// Called once after row and column reduction.
    fn on_reduced(&self, _snapshot: &StateSnapshot<'_, C>) {}

    /// Called once after the preliminary starring pass.
    fn on_seeded(&self, _snapshot: &StateSnapshot<'_, C>) {}

    /// Called after each covering-loop iteration.
    fn on_covering_step(&self, _snapshot: &StateSnapshot<'_, C>) {}

    /// Called after an augmenting path has grown the matching.
    fn on_augmented(&self, _snapshot: &StateSnapshot<'_, C>) {}

    /// Called after the working matrix was adjusted by `delta`.
    fn on_adjusted(&self, _delta: C, _snapshot: &StateSnapshot<'_, C>) {}

    /// Called once with the terminal state.
    fn on_finished(&self, _snapshot: &StateSnapshot<'_, C>) {}
}

/// Prints a rendered snapshot at every checkpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl TraceObserver {
    /// Creates a new trace observer.
    pub fn new() -> Self {
        TraceObserver
    }
}

impl<C: Cost> SolveObserver<C> for TraceObserver {
    fn on_reduced(&self, snapshot: &StateSnapshot<'_, C>) {
        println!("Reduced cost matrix:\n{}", render::render(snapshot));
    }

    fn on_seeded(&self, snapshot: &StateSnapshot<'_, C>) {
        println!("Preliminary starred matrix:\n{}", render::render(snapshot));
    }

    fn on_covering_step(&self, snapshot: &StateSnapshot<'_, C>) {
        println!("Covering iteration:\n{}", render::render(snapshot));
    }

    fn on_augmented(&self, snapshot: &StateSnapshot<'_, C>) {
        println!("Augmented matching:\n{}", render::render(snapshot));
    }

    fn on_adjusted(&self, delta: C, snapshot: &StateSnapshot<'_, C>) {
        println!("Adjusted by {}:\n{}", delta, render::render(snapshot));
    }

    fn on_finished(&self, snapshot: &StateSnapshot<'_, C>) {
        println!("Final matrix:\n{}", render::render(snapshot));
    }
}

/// Counts checkpoint callbacks.
///
/// Useful for testing that observation does not change results.
#[derive(Debug, Default)]
pub struct CountingObserver {
    reduced: AtomicUsize,
    seeded: AtomicUsize,
    covering_steps: AtomicUsize,
    augmented: AtomicUsize,
    adjusted: AtomicUsize,
    finished: AtomicUsize,
}

impl CountingObserver {
    /// Creates a new counting observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reduction callbacks.
    pub fn reduced_count(&self) -> usize {
        self.reduced.load(Ordering::SeqCst)
    }

    /// Number of preliminary-starring callbacks.
    pub fn seeded_count(&self) -> usize {
        self.seeded.load(Ordering::SeqCst)
    }

    /// Number of covering-loop callbacks.
    pub fn covering_step_count(&self) -> usize {
        self.covering_steps.load(Ordering::SeqCst)
    }

    /// Number of augmentation callbacks.
    pub fn augmented_count(&self) -> usize {
        self.augmented.load(Ordering::SeqCst)
    }

    /// Number of adjustment callbacks.
    pub fn adjusted_count(&self) -> usize {
        self.adjusted.load(Ordering::SeqCst)
    }

    /// Number of terminal callbacks.
    pub fn finished_count(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

impl<C: Cost> SolveObserver<C> for CountingObserver {
    fn on_reduced(&self, _snapshot: &StateSnapshot<'_, C>) {
        self.reduced.fetch_add(1, Ordering::SeqCst);
    }

    fn on_seeded(&self, _snapshot: &StateSnapshot<'_, C>) {
        self.seeded.fetch_add(1, Ordering::SeqCst);
    }

    fn on_covering_step(&self, _snapshot: &StateSnapshot<'_, C>) {
        self.covering_steps.fetch_add(1, Ordering::SeqCst);
    }

    fn on_augmented(&self, _snapshot: &StateSnapshot<'_, C>) {
        self.augmented.fetch_add(1, Ordering::SeqCst);
    }

    fn on_adjusted(&self, _delta: C, _snapshot: &StateSnapshot<'_, C>) {
        self.adjusted.fetch_add(1, Ordering::SeqCst);
    }

    fn on_finished(&self, _snapshot: &StateSnapshot<'_, C>) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
