//! Error types for MatchForge

use thiserror::Error;

/// Main error type for MatchForge operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchForgeError {
    /// The input matrix has no rows
    #[error("matrix has no rows")]
    EmptyMatrix,

    /// A row's column keys differ from the rest of the matrix
    #[error("column keys of row {row} do not correspond to the column keys found in the rest of the matrix")]
    RaggedRow { row: usize },

    /// The augmenting-path walk reached a starred row with no primed zero
    /// (signals broken label bookkeeping, not bad input)
    #[error("augmenting path reached starred row {row} with no primed zero")]
    BrokenAugmentingChain { row: usize },

    /// No complete assignment exists over reachable pairings
    #[error("only {matched} of {required} rows could be assigned over reachable pairings")]
    Unsolvable { matched: usize, required: usize },

    /// The configured step limit was hit before the solve converged
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },
}

/// Result type alias for MatchForge operations
pub type Result<T> = std::result::Result<T, MatchForgeError>;
