//! MatchForge - exact minimum-cost assignment in Rust
//!
//! Solves the linear assignment problem with the Kuhn-Munkres (Hungarian)
//! algorithm: given a cost for every row/column pairing, find the
//! one-to-one mapping with the smallest total cost. The solve is exact and
//! deterministic, never heuristic.
//!
//! # Example
//!
//! ```rust
//! use matchforge::prelude::*;
//!
//! // Three workers, three tasks; cell (w, t) is worker w's cost on task t.
//! let assignment = solve(vec![
//!     vec![8.0, 4.0, 7.0],
//!     vec![5.0, 2.0, 3.0],
//!     vec![9.0, 4.0, 8.0],
//! ]).unwrap();
//!
//! assert_eq!(assignment.column_of(0), Some(0));
//! assert_eq!(assignment.column_of(1), Some(2));
//! assert_eq!(assignment.column_of(2), Some(1));
//! ```
//!
//! Non-square matrices are padded with zero-cost cells; the padded rows and
//! columns never show up in the result. Use [`SolveSession`] directly for
//! options and observation hooks.

// Data model
pub use matchforge_core::{Assignment, Cost, CostMatrix, MatchForgeError, ReducedMatrix, Result};

// Solve engine
pub use matchforge_solver::{
    CountingObserver, SolveObserver, SolveOptions, SolveSession, StateSnapshot, TraceObserver,
};

/// Solves the assignment problem for the given cost rows.
///
/// Convenience wrapper: validates and pads the rows, runs a fresh solve
/// session with default options, and returns the optimal assignment.
pub fn solve<C: Cost>(rows: Vec<Vec<C>>) -> Result<Assignment> {
    SolveSession::new(CostMatrix::from_rows(rows)?).solve()
}

pub mod prelude {
    pub use super::{
        solve, Assignment, Cost, CostMatrix, MatchForgeError, SolveOptions, SolveSession,
    };
}
