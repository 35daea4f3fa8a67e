//! Star and prime zero bookkeeping.

/// A row-to-column zero marking with at most one entry per row.
///
/// Backs both the starred set (the candidate partial matching) and the
/// primed set (temporary marks made during an augmenting search). Lookups
/// are exact in both directions; the column-keyed direction scans, which
/// stays proportional to the matrix side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    columns: Vec<Option<usize>>,
}

impl LabelSet {
    /// Creates an empty set for a `dim`-sided matrix.
    pub fn with_dim(dim: usize) -> Self {
        LabelSet {
            columns: vec![None; dim],
        }
    }

    /// Marks `(row, column)`, replacing any previous mark in the row.
    pub fn set(&mut self, row: usize, column: usize) {
        self.columns[row] = Some(column);
    }

    /// Removes the mark in the given row, if any.
    pub fn clear_row(&mut self, row: usize) {
        self.columns[row] = None;
    }

    /// Removes every mark.
    pub fn clear(&mut self) {
        self.columns.fill(None);
    }

    /// The marked column in the given row.
    pub fn column_in_row(&self, row: usize) -> Option<usize> {
        self.columns[row]
    }

    /// The row whose mark sits in the given column.
    pub fn row_in_column(&self, column: usize) -> Option<usize> {
        self.columns.iter().position(|&c| c == Some(column))
    }

    /// Returns true if the row holds a mark.
    pub fn has_row(&self, row: usize) -> bool {
        self.columns[row].is_some()
    }

    /// Returns true if any mark sits in the given column.
    pub fn has_column(&self, column: usize) -> bool {
        self.columns.contains(&Some(column))
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }

    /// Returns true if no mark is set.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.is_none())
    }

    /// Iterates `(row, column)` marks in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(row, column)| column.map(|c| (row, c)))
    }
}
