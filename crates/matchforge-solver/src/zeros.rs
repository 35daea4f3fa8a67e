//! Zero-position analysis of the reduced matrix.

use matchforge_core::{Cost, ReducedMatrix};
use smallvec::SmallVec;

use crate::cover::CoverState;

/// Zero columns of one row; rarely more than a handful.
type ColumnList = SmallVec<[usize; 4]>;

/// Per-row zero positions of the reduced matrix at one point in time.
///
/// Purely derived: a scan is taken fresh after every mutation of the
/// working matrix, never cached across them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZeroMatrix {
    rows: Vec<ColumnList>,
}

impl ZeroMatrix {
    /// Collects, per row, the ascending columns holding an exact zero.
    pub fn scan<C: Cost>(reduced: &ReducedMatrix<C>) -> Self {
        let mut rows = Vec::with_capacity(reduced.dim());
        for row in 0..reduced.dim() {
            let mut columns = ColumnList::new();
            for column in 0..reduced.dim() {
                if reduced.at(row, column) == C::zero() {
                    columns.push(column);
                }
            }
            rows.push(columns);
        }
        ZeroMatrix { rows }
    }

    /// Zero columns of the given row, ascending.
    pub fn in_row(&self, row: usize) -> &[usize] {
        &self.rows[row]
    }

    /// All zero positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, columns)| columns.iter().map(move |&column| (row, column)))
    }

    /// Zeros struck through by at least one covered line.
    pub fn covered(&self, cover: &CoverState) -> Vec<(usize, usize)> {
        self.positions()
            .filter(|&(row, column)| cover.covers(row, column))
            .collect()
    }

    /// Zeros with neither line covered.
    pub fn non_covered(&self, cover: &CoverState) -> Vec<(usize, usize)> {
        self.positions()
            .filter(|&(row, column)| !cover.covers(row, column))
            .collect()
    }

    /// First non-covered zero in row-major order, column-ascending within
    /// the row. Drives the covering loop.
    pub fn first_non_covered(&self, cover: &CoverState) -> Option<(usize, usize)> {
        self.positions()
            .find(|&(row, column)| !cover.covers(row, column))
    }
}
