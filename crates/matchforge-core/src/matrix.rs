//! Cost matrices: validated caller input and the mutable working copy.

use crate::cost::Cost;
use crate::error::{MatchForgeError, Result};

/// The assignment cost matrix to be minimised.
///
/// Built once per solve session from caller rows: validation rejects empty
/// or ragged input, then the matrix is padded with zero-cost cells to a
/// square of side `max(width, height)`. Padded cells look attractive to the
/// matching and are filtered out of the final assignment by the source
/// extent recorded here.
///
/// # Examples
///
/// ```
/// use matchforge_core::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![4.0, 2.0, 8.0],
///     vec![4.0, 3.0, 7.0],
/// ]).unwrap();
///
/// assert_eq!(matrix.dim(), 3);
/// assert_eq!(matrix.source_rows(), 2);
/// assert_eq!(matrix.at(1, 2), 7.0);
/// assert_eq!(matrix.at(2, 0), 0.0); // padding
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<C> {
    cells: Vec<C>,
    dim: usize,
    source_rows: usize,
    source_cols: usize,
}

impl<C: Cost> CostMatrix<C> {
    /// Validates the caller's rows and pads them to a square matrix.
    ///
    /// # Errors
    ///
    /// `EmptyMatrix` when there are no rows; `RaggedRow` when a row's
    /// column keys differ from the first row's, carrying the offending
    /// row index.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(MatchForgeError::EmptyMatrix);
        }

        let source_cols = rows[0].len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != source_cols {
                return Err(MatchForgeError::RaggedRow { row: index });
            }
        }

        let source_rows = rows.len();
        let dim = source_cols.max(source_rows);
        let mut cells = vec![C::zero(); dim * dim];
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                cells[r * dim + c] = cell;
            }
        }

        Ok(CostMatrix {
            cells,
            dim,
            source_rows,
            source_cols,
        })
    }

    /// Side length after padding.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row count of the caller's matrix before padding.
    pub fn source_rows(&self) -> usize {
        self.source_rows
    }

    /// Column count of the caller's matrix before padding.
    pub fn source_cols(&self) -> usize {
        self.source_cols
    }

    /// Cost at the given position of the padded matrix.
    pub fn at(&self, row: usize, column: usize) -> C {
        self.cells[row * self.dim + column]
    }

    /// Returns true if the position existed before padding.
    pub fn in_source_extent(&self, row: usize, column: usize) -> bool {
        row < self.source_rows && column < self.source_cols
    }

    /// Creates the mutable working copy the solve phases operate on.
    pub fn to_reduced(&self) -> ReducedMatrix<C> {
        ReducedMatrix {
            cells: self.cells.clone(),
            dim: self.dim,
        }
    }
}

/// The reduced cost matrix: the working copy mutated in place by the
/// reduction and adjustment phases.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedMatrix<C> {
    cells: Vec<C>,
    dim: usize,
}

impl<C: Cost> ReducedMatrix<C> {
    /// Side length (always the padded dimension of the source matrix).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Value at the given position.
    pub fn at(&self, row: usize, column: usize) -> C {
        self.cells[row * self.dim + column]
    }

    /// Overwrites the value at the given position.
    pub fn set(&mut self, row: usize, column: usize, value: C) {
        self.cells[row * self.dim + column] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_input_unpadded() {
        let matrix = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.source_rows(), 2);
        assert_eq!(matrix.source_cols(), 2);
        assert_eq!(matrix.at(1, 0), 3.0);
    }

    #[test]
    fn test_tall_input_pads_columns() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0], vec![11.0]]).unwrap();

        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.source_cols(), 1);
        assert_eq!(matrix.at(0, 1), 0.0);
        assert_eq!(matrix.at(1, 1), 0.0);
        assert!(matrix.in_source_extent(1, 0));
        assert!(!matrix.in_source_extent(1, 1));
    }

    #[test]
    fn test_wide_input_pads_rows() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0, 1.0]]).unwrap();

        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.source_rows(), 1);
        assert_eq!(matrix.at(1, 0), 0.0);
        assert_eq!(matrix.at(1, 1), 0.0);
        assert!(!matrix.in_source_extent(1, 1));
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let result = CostMatrix::<f64>::from_rows(vec![]);

        assert_eq!(result.unwrap_err(), MatchForgeError::EmptyMatrix);
    }

    #[test]
    fn test_ragged_row_rejected_with_index() {
        let result = CostMatrix::from_rows(vec![
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0],
        ]);

        assert_eq!(result.unwrap_err(), MatchForgeError::RaggedRow { row: 2 });
    }

    #[test]
    fn test_reduced_copy_is_independent() {
        let matrix = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut reduced = matrix.to_reduced();

        reduced.set(0, 0, 9.0);

        assert_eq!(reduced.at(0, 0), 9.0);
        assert_eq!(matrix.at(0, 0), 1.0);
    }
}
