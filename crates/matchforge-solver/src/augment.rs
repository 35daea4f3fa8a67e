//! Augmenting-path construction.

use matchforge_core::{MatchForgeError, Result};

use crate::cover::CoverState;
use crate::labels::LabelSet;

/// Grows the partial matching by one along an alternating star/prime chain.
///
/// `start` must be a primed zero whose row holds no star. The walk follows
/// the chain from it: while the current prime's column holds a star, that
/// star joins the chain and the star's row must itself hold a prime to
/// continue from. When a prime's column holds no star the chain is
/// complete: every chain star is unstarred and every chain prime starred,
/// growing the matching by exactly one.
///
/// Afterwards the prime set and cover state are reset, and exactly the
/// columns of the grown matching are re-covered.
///
/// # Errors
///
/// `BrokenAugmentingChain` if a chain star's row holds no prime. Every
/// starred row reached by the walk was primed by an earlier covering step,
/// so this signals corrupted label bookkeeping.
pub fn augment(
    starred: &mut LabelSet,
    primed: &mut LabelSet,
    cover: &mut CoverState,
    start: (usize, usize),
) -> Result<()> {
    let mut chain_stars: Vec<(usize, usize)> = Vec::new();
    let mut chain_primes: Vec<(usize, usize)> = vec![start];
    let mut column = start.1;

    while let Some(star_row) = starred.row_in_column(column) {
        chain_stars.push((star_row, column));
        let prime_column = primed
            .column_in_row(star_row)
            .ok_or(MatchForgeError::BrokenAugmentingChain { row: star_row })?;
        chain_primes.push((star_row, prime_column));
        column = prime_column;
    }

    for &(row, _) in &chain_stars {
        starred.clear_row(row);
    }
    for &(row, column) in &chain_primes {
        starred.set(row, column);
    }

    primed.clear();
    cover.clear();
    cover.cover_starred_columns(starred);

    Ok(())
}
