use crate::{
    cost_matrix_integer::{CellCost, CostMatrixInteger},
    matrix::Matrix,
    Cost,
};
use std::{
    iter::{FusedIterator, StepBy, Take},
    ops::{Deref, DerefMut, Index, IndexMut},
    slice,
};

type Cells = Matrix<CostMatrixInteger>;

/// Read access to one row or one column of the condensed matrix.
///
/// Rows and columns differ only in where cell `k` lives in row-major storage,
/// so everything is expressed through `layout`.
pub trait CostVector {
    fn matrix(&self) -> &Cells;

    /// Storage offset of cell 0 and the stride between consecutive cells.
    fn layout(&self) -> (usize, usize);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, k: usize) -> Option<&CostMatrixInteger> {
        if k >= self.len() {
            return None;
        }
        let (start, stride) = self.layout();
        self.matrix().as_slice().get(start + k * stride)
    }

    fn iter(&self) -> CostVectorIter<'_> {
        let (start, stride) = self.layout();
        CostVectorIter {
            cells: self.matrix().as_slice(),
            start,
            stride,
            index: 0,
            len: self.len(),
        }
    }

    /// Smallest cell cost. Infinite only if every cell is infinite, `None` if
    /// the vector is empty.
    fn min_cost(&self) -> Option<CellCost> {
        self.iter().map(|cell| cell.cost()).min()
    }
}

pub trait CostVectorMut: CostVector {
    fn matrix_mut(&mut self) -> &mut Cells;

    fn get_mut(&mut self, k: usize) -> Option<&mut CostMatrixInteger> {
        if k >= self.len() {
            return None;
        }
        let (start, stride) = self.layout();
        self.matrix_mut().as_mut_slice().get_mut(start + k * stride)
    }

    fn iter_mut(&mut self) -> CostVectorIterMut<'_> {
        let (start, stride) = self.layout();
        let len = self.len();
        let cells = self
            .matrix_mut()
            .as_mut_slice()
            .get_mut(start..)
            .unwrap_or_default();
        CostVectorIterMut {
            inner: cells.iter_mut().step_by(stride.max(1)).take(len),
        }
    }

    /// Subtract `amount` from every finite cell.
    fn subtract(&mut self, amount: Cost) {
        for cell in self.iter_mut() {
            *cell -= amount;
        }
    }
}

/// Row view. `M` is `&Matrix` for reading or `&mut Matrix` for reduction.
#[derive(Debug)]
pub struct CostRow<M> {
    matrix: M,
    row: usize,
}

/// Column view. `M` is `&Matrix` for reading or `&mut Matrix` for reduction.
#[derive(Debug)]
pub struct CostColumn<M> {
    matrix: M,
    column: usize,
}

impl<M> CostRow<M> {
    pub(crate) fn new(matrix: M, row: usize) -> Self {
        Self { matrix, row }
    }

    pub fn condensed_index(&self) -> usize {
        self.row
    }
}

impl<M> CostColumn<M> {
    pub(crate) fn new(matrix: M, column: usize) -> Self {
        Self { matrix, column }
    }

    pub fn condensed_index(&self) -> usize {
        self.column
    }
}

impl<M: Deref<Target = Cells>> CostVector for CostRow<M> {
    fn matrix(&self) -> &Cells {
        &self.matrix
    }

    fn layout(&self) -> (usize, usize) {
        (self.row * self.matrix.num_columns(), 1)
    }

    fn len(&self) -> usize {
        self.matrix.num_columns()
    }
}

impl<M: DerefMut<Target = Cells>> CostVectorMut for CostRow<M> {
    fn matrix_mut(&mut self) -> &mut Cells {
        &mut self.matrix
    }
}

impl<M: Deref<Target = Cells>> CostVector for CostColumn<M> {
    fn matrix(&self) -> &Cells {
        &self.matrix
    }

    fn layout(&self) -> (usize, usize) {
        (self.column, self.matrix.num_columns())
    }

    fn len(&self) -> usize {
        self.matrix.num_rows()
    }
}

impl<M: DerefMut<Target = Cells>> CostVectorMut for CostColumn<M> {
    fn matrix_mut(&mut self) -> &mut Cells {
        &mut self.matrix
    }
}

macro_rules! impl_cost_vector_index {
    ($view:ident) => {
        impl<M: Deref<Target = Cells>> Index<usize> for $view<M> {
            type Output = CostMatrixInteger;
            fn index(&self, k: usize) -> &CostMatrixInteger {
                let len = self.len();
                self.get(k).unwrap_or_else(|| {
                    panic!("cell {} outside {} of length {}", k, stringify!($view), len)
                })
            }
        }

        impl<M: DerefMut<Target = Cells>> IndexMut<usize> for $view<M> {
            fn index_mut(&mut self, k: usize) -> &mut CostMatrixInteger {
                let len = self.len();
                self.get_mut(k).unwrap_or_else(|| {
                    panic!("cell {} outside {} of length {}", k, stringify!($view), len)
                })
            }
        }
    };
}

impl_cost_vector_index!(CostRow);
impl_cost_vector_index!(CostColumn);

/// Forward iterator over a row or column, advancing one cell at a time until
/// it has yielded `len` cells.
#[derive(Debug, Clone)]
pub struct CostVectorIter<'a> {
    cells: &'a [CostMatrixInteger],
    start: usize,
    stride: usize,
    index: usize,
    len: usize,
}

impl<'a> CostVectorIter<'a> {
    /// Index of the next cell to be yielded.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn is_end(&self) -> bool {
        self.index == self.len
    }
}

impl<'a> Iterator for CostVectorIter<'a> {
    type Item = &'a CostMatrixInteger;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let cells = self.cells;
        let cell = &cells[self.start + self.index * self.stride];
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CostVectorIter<'_> {}

impl FusedIterator for CostVectorIter<'_> {}

/// Equal when both walk the same vector of the same matrix and sit on the same
/// cell.
impl PartialEq for CostVectorIter<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.cells, other.cells)
            && self.start == other.start
            && self.stride == other.stride
            && self.index == other.index
    }
}

impl Eq for CostVectorIter<'_> {}

#[derive(Debug)]
pub struct CostVectorIterMut<'a> {
    inner: Take<StepBy<slice::IterMut<'a, CostMatrixInteger>>>,
}

impl<'a> Iterator for CostVectorIterMut<'a> {
    type Item = &'a mut CostMatrixInteger;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for CostVectorIterMut<'_> {}

impl FusedIterator for CostVectorIterMut<'_> {}
