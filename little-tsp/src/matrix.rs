use std::ops::{Index, IndexMut};

/// Dense row-major storage with no domain knowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    num_rows: usize,
    num_columns: usize,
}

impl<T> Matrix<T> {
    pub fn from_fn<F>(num_rows: usize, num_columns: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(num_rows * num_columns);
        for row in 0..num_rows {
            for column in 0..num_columns {
                data.push(f(row, column));
            }
        }
        Self {
            data,
            num_rows,
            num_columns,
        }
    }

    #[inline(always)]
    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.num_rows && column < self.num_columns).then(|| row * self.num_columns + column)
    }

    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline(always)]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.offset(row, column).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.offset(row, column).map(move |i| &mut self.data[i])
    }

    /// Cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.num_rows && column < self.num_columns,
            "cell ({}, {}) outside {}x{} matrix",
            row,
            column,
            self.num_rows,
            self.num_columns
        );
        &self.data[row * self.num_columns + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.num_rows && column < self.num_columns,
            "cell ({}, {}) outside {}x{} matrix",
            row,
            column,
            self.num_rows,
            self.num_columns
        );
        &mut self.data[row * self.num_columns + column]
    }
}
