use crate::{cost_matrix_integer::CostMatrixInteger, matrix::Matrix};
use std::iter::FusedIterator;

/// Row-major walk over every cell of the condensed matrix.
///
/// The end state is `(num_rows, 0)`. A matrix with no cells starts there.
#[derive(Debug, Clone)]
pub struct CostMatrixIter<'a> {
    matrix: &'a Matrix<CostMatrixInteger>,
    row: usize,
    column: usize,
}

impl<'a> CostMatrixIter<'a> {
    pub(crate) fn new(matrix: &'a Matrix<CostMatrixInteger>) -> Self {
        if matrix.num_columns() == 0 {
            return Self::end(matrix);
        }
        Self {
            matrix,
            row: 0,
            column: 0,
        }
    }

    pub(crate) fn end(matrix: &'a Matrix<CostMatrixInteger>) -> Self {
        Self {
            matrix,
            row: matrix.num_rows(),
            column: 0,
        }
    }

    /// Condensed `(row, column)` of the next cell to be yielded.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn is_end(&self) -> bool {
        self.row == self.matrix.num_rows() && self.column == 0
    }

    fn move_to_next_cell(&mut self) {
        if self.is_end() {
            return;
        }
        // column wraps around into the next row
        self.column = (self.column + 1) % self.matrix.num_columns();
        if self.column == 0 {
            self.row += 1;
        }
    }
}

impl<'a> Iterator for CostMatrixIter<'a> {
    type Item = &'a CostMatrixInteger;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        let matrix = self.matrix;
        let cell = &matrix[(self.row, self.column)];
        self.move_to_next_cell();
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.matrix.num_rows() - self.row) * self.matrix.num_columns() - self.column;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CostMatrixIter<'_> {}

impl FusedIterator for CostMatrixIter<'_> {}

/// Equal when both walk the same matrix and sit on the same cell.
impl PartialEq for CostMatrixIter<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.matrix, other.matrix)
            && self.row == other.row
            && self.column == other.column
    }
}

impl Eq for CostMatrixIter<'_> {}
