//! Covered-line bookkeeping.

use crate::labels::LabelSet;

/// Which matrix lines are currently struck through.
///
/// After the preliminary starring pass the covered line count equals the
/// star count; the covering loop then rotates and resets covers until every
/// zero is accounted for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverState {
    rows: Vec<bool>,
    columns: Vec<bool>,
}

impl CoverState {
    /// Creates an all-uncovered state for a `dim`-sided matrix.
    pub fn with_dim(dim: usize) -> Self {
        CoverState {
            rows: vec![false; dim],
            columns: vec![false; dim],
        }
    }

    /// Strikes through a row.
    pub fn cover_row(&mut self, row: usize) {
        self.rows[row] = true;
    }

    /// Strikes through a column.
    pub fn cover_column(&mut self, column: usize) {
        self.columns[column] = true;
    }

    /// Removes the strike from a column.
    pub fn uncover_column(&mut self, column: usize) {
        self.columns[column] = false;
    }

    /// Returns true if the row is struck through.
    pub fn is_row_covered(&self, row: usize) -> bool {
        self.rows[row]
    }

    /// Returns true if the column is struck through.
    pub fn is_column_covered(&self, column: usize) -> bool {
        self.columns[column]
    }

    /// Returns true if either line through the position is struck.
    pub fn covers(&self, row: usize, column: usize) -> bool {
        self.rows[row] || self.columns[column]
    }

    /// Total number of struck rows and columns.
    pub fn covered_line_count(&self) -> usize {
        let rows = self.rows.iter().filter(|&&covered| covered).count();
        let columns = self.columns.iter().filter(|&&covered| covered).count();
        rows + columns
    }

    /// Removes every strike.
    pub fn clear(&mut self) {
        self.rows.fill(false);
        self.columns.fill(false);
    }

    /// Strikes through exactly the columns holding a star.
    pub fn cover_starred_columns(&mut self, starred: &LabelSet) {
        for (_, column) in starred.iter() {
            self.columns[column] = true;
        }
    }
}
