//! The solve session: an explicit phase state machine over private
//! label state.

use std::fmt::Debug;
use std::sync::Arc;

use matchforge_core::{Assignment, Cost, CostMatrix, MatchForgeError, ReducedMatrix, Result};
use tracing::{debug, trace};

use crate::augment::augment;
use crate::cover::CoverState;
use crate::event::{SolveObserver, StateSnapshot, TraceObserver};
use crate::labels::LabelSet;
use crate::options::SolveOptions;
use crate::reduce;
use crate::zeros::ZeroMatrix;

/// Outer control state of the solve.
///
/// Replaces the classical presentation's jump-back-to-start control flow
/// with explicit transitions driven by [`SolveSession::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolvePhase {
    /// Row and column reduction of the working matrix.
    Reduce,
    /// Preliminary greedy starring pass.
    SeedStars,
    /// One covering-loop iteration: prime a non-covered zero and either
    /// rotate covers or augment the matching.
    Cover,
    /// Subtract the minimum uncovered value to expose new zeros.
    Adjust,
    /// The starred zeros are the optimal assignment.
    Finished,
}

/// A single-use solve session owning every piece of working state.
///
/// Construct one per matrix; `solve` consumes the session, so state can
/// never leak between solves. Independent sessions share nothing and may
/// run on separate threads.
///
/// # Example
///
/// ```
/// use matchforge_core::CostMatrix;
/// use matchforge_solver::SolveSession;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![4.0, 2.0],
///     vec![1.0, 3.0],
/// ]).unwrap();
///
/// let assignment = SolveSession::new(matrix).solve().unwrap();
/// assert_eq!(assignment.column_of(0), Some(1));
/// assert_eq!(assignment.column_of(1), Some(0));
/// ```
pub struct SolveSession<C: Cost> {
    matrix: CostMatrix<C>,
    reduced: ReducedMatrix<C>,
    starred: LabelSet,
    primed: LabelSet,
    cover: CoverState,
    options: SolveOptions,
    observer: Option<Arc<dyn SolveObserver<C>>>,
}

impl<C: Cost> Debug for SolveSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolveSession")
            .field("dim", &self.matrix.dim())
            .field("starred", &self.starred.len())
            .field("options", &self.options)
            .finish()
    }
}

impl<C: Cost> SolveSession<C> {
    /// Creates a session for the given matrix with default options and no
    /// observer.
    pub fn new(matrix: CostMatrix<C>) -> Self {
        let dim = matrix.dim();
        let reduced = matrix.to_reduced();
        SolveSession {
            matrix,
            reduced,
            starred: LabelSet::with_dim(dim),
            primed: LabelSet::with_dim(dim),
            cover: CoverState::with_dim(dim),
            options: SolveOptions::default(),
            observer: None,
        }
    }

    /// Sets the solve options.
    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Installs an observer notified at each solve checkpoint.
    pub fn with_observer(mut self, observer: Arc<dyn SolveObserver<C>>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Toggles the built-in textual trace of each solve phase.
    ///
    /// Purely observational; the returned assignment is identical with the
    /// trace on or off. Disabled by default.
    pub fn set_debug(&mut self, enabled: bool) {
        self.observer = enabled.then(|| Arc::new(TraceObserver::new()) as Arc<dyn SolveObserver<C>>);
    }

    /// Runs the solve to completion and returns the optimal assignment,
    /// restricted to the source extent of the matrix.
    ///
    /// # Errors
    ///
    /// `Unsolvable` when unreachable pairings leave no complete assignment,
    /// `StepLimitExceeded` when the configured bound is hit, and
    /// `BrokenAugmentingChain` on corrupted label bookkeeping (a bug, not
    /// bad input).
    pub fn solve(mut self) -> Result<Assignment> {
        let mut steps: u64 = 0;
        let mut phase = SolvePhase::Reduce;

        loop {
            phase = match phase {
                SolvePhase::Reduce => {
                    self.reduce_phase();
                    SolvePhase::SeedStars
                }
                SolvePhase::SeedStars => {
                    self.seed_stars();
                    SolvePhase::Cover
                }
                SolvePhase::Cover => {
                    self.count_step(&mut steps)?;
                    self.cover_phase()?
                }
                SolvePhase::Adjust => {
                    self.count_step(&mut steps)?;
                    self.adjust_phase()
                }
                SolvePhase::Finished => break,
            };
        }

        self.finish()
    }

    fn reduce_phase(&mut self) {
        reduce::reduce(&mut self.reduced);
        debug!(dim = self.reduced.dim(), "reduced cost matrix");
        self.notify(|observer| observer.on_reduced(&self.snapshot()));
    }

    /// Stars, per row, the row's first zero when that zero's column is
    /// still uncovered; rows whose first zero sits in a covered column
    /// seed no star. The covering loop picks those rows up later.
    fn seed_stars(&mut self) {
        let zeros = ZeroMatrix::scan(&self.reduced);
        for row in 0..self.reduced.dim() {
            let Some(&column) = zeros.in_row(row).first() else {
                continue;
            };
            if self.cover.is_column_covered(column) {
                continue;
            }
            self.starred.set(row, column);
            self.cover.cover_column(column);
        }
        debug!(starred = self.starred.len(), "seeded preliminary stars");
        self.notify(|observer| observer.on_seeded(&self.snapshot()));
    }

    fn cover_phase(&mut self) -> Result<SolvePhase> {
        let zeros = ZeroMatrix::scan(&self.reduced);
        let Some((row, column)) = zeros.first_non_covered(&self.cover) else {
            if self.cover.covered_line_count() == self.reduced.dim() {
                return Ok(SolvePhase::Finished);
            }
            return Ok(SolvePhase::Adjust);
        };

        self.primed.set(row, column);
        if let Some(star_column) = self.starred.column_in_row(row) {
            // Rotate coverage around the starred zero to expose new zeros
            // without shrinking the matching.
            self.cover.uncover_column(star_column);
            self.cover.cover_row(row);
            trace!(row, column, star_column, "rotated cover around primed zero");
        } else {
            augment(&mut self.starred, &mut self.primed, &mut self.cover, (row, column))?;
            debug!(matching = self.starred.len(), "augmented partial matching");
            self.notify(|observer| observer.on_augmented(&self.snapshot()));
        }

        self.notify(|observer| observer.on_covering_step(&self.snapshot()));
        Ok(SolvePhase::Cover)
    }

    fn adjust_phase(&mut self) -> SolvePhase {
        let dim = self.reduced.dim();

        let mut delta = C::unreachable();
        for row in 0..dim {
            for column in 0..dim {
                if !self.cover.covers(row, column) {
                    let value = self.reduced.at(row, column);
                    if value < delta {
                        delta = value;
                    }
                }
            }
        }

        if !delta.is_finite() {
            // Every uncovered cell is unreachable; no adjustment can expose
            // another zero, so the starred set is as large as it gets.
            debug!("no finite uncovered value; treating matching as final");
            return SolvePhase::Finished;
        }

        for row in 0..dim {
            for column in 0..dim {
                let row_covered = self.cover.is_row_covered(row);
                let column_covered = self.cover.is_column_covered(column);
                if !row_covered && !column_covered {
                    let value = self.reduced.at(row, column);
                    self.reduced.set(row, column, value - delta);
                } else if row_covered && column_covered {
                    let value = self.reduced.at(row, column);
                    self.reduced.set(row, column, value + delta);
                }
            }
        }

        debug!(delta = %delta, "adjusted uncovered cells");
        self.notify(|observer| observer.on_adjusted(delta, &self.snapshot()));
        SolvePhase::Cover
    }

    /// Filters the starred zeros to the source extent and checks the
    /// matching is complete over reachable pairings.
    fn finish(&self) -> Result<Assignment> {
        let pairs = self
            .starred
            .iter()
            .filter(|&(row, column)| self.matrix.in_source_extent(row, column));
        let assignment = Assignment::from_pairs(pairs);

        let required = self.matrix.source_rows().min(self.matrix.source_cols());
        if assignment.len() < required {
            return Err(MatchForgeError::Unsolvable {
                matched: assignment.len(),
                required,
            });
        }

        debug!(assigned = assignment.len(), "solve finished");
        self.notify(|observer| observer.on_finished(&self.snapshot()));
        Ok(assignment)
    }

    fn count_step(&self, steps: &mut u64) -> Result<()> {
        if let Some(limit) = self.options.step_limit {
            if *steps >= limit {
                return Err(MatchForgeError::StepLimitExceeded { limit });
            }
        }
        *steps += 1;
        Ok(())
    }

    fn snapshot(&self) -> StateSnapshot<'_, C> {
        StateSnapshot {
            reduced: &self.reduced,
            starred: &self.starred,
            primed: &self.primed,
            cover: &self.cover,
        }
    }

    fn notify(&self, f: impl FnOnce(&dyn SolveObserver<C>)) {
        if let Some(observer) = &self.observer {
            f(observer.as_ref());
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
