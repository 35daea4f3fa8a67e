//! Row and column reduction of the working matrix.
//!
//! Subtracting a line's minimum from the whole line never changes which
//! assignment is optimal, and leaves at least one zero behind for the
//! covering analysis to work with.

use matchforge_core::{Cost, ReducedMatrix};

/// Runs row reduction followed by column reduction.
pub fn reduce<C: Cost>(reduced: &mut ReducedMatrix<C>) {
    reduce_rows(reduced);
    reduce_columns(reduced);
}

/// Subtracts each row's minimum from every cell of the row.
///
/// A row whose minimum is not finite (entirely unreachable) has no usable
/// minimum and is left unchanged.
pub fn reduce_rows<C: Cost>(reduced: &mut ReducedMatrix<C>) {
    for row in 0..reduced.dim() {
        let Some(min) = row_min(reduced, row) else {
            continue;
        };
        for column in 0..reduced.dim() {
            let value = reduced.at(row, column);
            reduced.set(row, column, value - min);
        }
    }
}

/// Subtracts each column's minimum from every cell of the column, using the
/// state left by row reduction.
pub fn reduce_columns<C: Cost>(reduced: &mut ReducedMatrix<C>) {
    for column in 0..reduced.dim() {
        let Some(min) = column_min(reduced, column) else {
            continue;
        };
        for row in 0..reduced.dim() {
            let value = reduced.at(row, column);
            reduced.set(row, column, value - min);
        }
    }
}

fn row_min<C: Cost>(reduced: &ReducedMatrix<C>, row: usize) -> Option<C> {
    let mut min = C::unreachable();
    for column in 0..reduced.dim() {
        let value = reduced.at(row, column);
        if value < min {
            min = value;
        }
    }
    min.is_finite().then_some(min)
}

fn column_min<C: Cost>(reduced: &ReducedMatrix<C>, column: usize) -> Option<C> {
    let mut min = C::unreachable();
    for row in 0..reduced.dim() {
        let value = reduced.at(row, column);
        if value < min {
            min = value;
        }
    }
    min.is_finite().then_some(min)
}
