mod iter;
mod mapping;
mod vector;

pub use iter::CostMatrixIter;
pub use vector::{
    CostColumn, CostRow, CostVector, CostVectorIter, CostVectorIterMut, CostVectorMut,
};

use crate::{
    cost_matrix_integer::{CellCost, CostMatrixInteger},
    edge::Edge,
    error::{CostMatrixError, CostMatrixResult},
    graph::Graph,
    matrix::Matrix,
    Cost, TotalCost, Vertex,
};
use mapping::IndexMapping;

/// Cost matrix of one search-tree node.
///
/// Vertices already given a successor by an included edge have no row, and
/// vertices already given a predecessor have no column. The remaining rows and
/// columns are stored densely (the "condensed matrix") and addressed by
/// original vertex id through the two mappings.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    cells: Matrix<CostMatrixInteger>,
    rows: IndexMapping,
    columns: IndexMapping,
}

impl CostMatrix {
    /// Build the condensed matrix for a node that committed to `include` and
    /// forbids `exclude`.
    ///
    /// Exclude edges whose row or column is no longer available are skipped.
    pub fn new(graph: &Graph, include: &[Edge], exclude: &[Edge]) -> CostMatrixResult<Self> {
        let num_vertices = graph.num_vertices();
        for edge in include.iter().chain(exclude) {
            for vertex in [edge.origin, edge.destination] {
                if vertex >= num_vertices {
                    return Err(CostMatrixError::VertexOutOfRange {
                        vertex,
                        num_vertices,
                    });
                }
            }
        }

        let mut row_available = vec![true; num_vertices];
        let mut column_available = vec![true; num_vertices];
        for edge in include {
            row_available[edge.origin] = false;
            column_available[edge.destination] = false;
        }

        let mut cost_matrix = Self::condense(graph, &row_available, &column_available);

        let mut num_skipped = 0;
        for edge in exclude {
            match (
                cost_matrix.rows.get(edge.origin),
                cost_matrix.columns.get(edge.destination),
            ) {
                (Some(row), Some(column)) => cost_matrix.cells[(row, column)].set_infinite(),
                _ => num_skipped += 1,
            }
        }

        log::debug!(
            "condensed {}x{} graph to {}x{} ({} included, {} excluded, {} exclusions moot)",
            num_vertices,
            num_vertices,
            cost_matrix.num_rows(),
            cost_matrix.num_columns(),
            include.len(),
            exclude.len(),
            num_skipped
        );
        Ok(cost_matrix)
    }

    /// Matrix of the root node: nothing included or excluded yet.
    pub fn from_graph(graph: &Graph) -> Self {
        let available = vec![true; graph.num_vertices()];
        Self::condense(graph, &available, &available)
    }

    fn condense(graph: &Graph, row_available: &[bool], column_available: &[bool]) -> Self {
        let rows = IndexMapping::from_availability(row_available);
        let columns = IndexMapping::from_availability(column_available);
        let cells = Matrix::from_fn(rows.len(), columns.len(), |row, column| {
            let edge = Edge::new(rows.vertices()[row], columns.vertices()[column]);
            match graph.cost(edge.origin, edge.destination) {
                Some(cost) => CostMatrixInteger::new(cost, edge),
                None => CostMatrixInteger::infinite(edge),
            }
        });
        Self {
            cells,
            rows,
            columns,
        }
    }

    /// Subtract every row minimum, then every column minimum of the
    /// row-reduced matrix, and return the sum of all minima.
    ///
    /// Fails without touching any cell if a row or column is entirely
    /// infinite. A row with no available columns (or a column with no
    /// available rows) counts as entirely infinite.
    pub fn reduce(&mut self) -> CostMatrixResult<TotalCost> {
        self.check_feasible()?;
        let mut decremented: TotalCost = 0;

        for row in 0..self.num_rows() {
            let min = reduce_vector(&mut CostRow::new(&mut self.cells, row));
            log::trace!("row {} reduced by {}", self.rows.vertices()[row], min);
            decremented += min as TotalCost;
        }

        for column in 0..self.num_columns() {
            let min = reduce_vector(&mut CostColumn::new(&mut self.cells, column));
            log::trace!(
                "column {} reduced by {}",
                self.columns.vertices()[column],
                min
            );
            decremented += min as TotalCost;
        }

        log::debug!(
            "reduced {}x{} matrix by {}",
            self.num_rows(),
            self.num_columns(),
            decremented
        );
        Ok(decremented)
    }

    fn check_feasible(&self) -> CostMatrixResult<()> {
        for row in 0..self.num_rows() {
            if !has_finite_cell(&CostRow::new(&self.cells, row)) {
                return Err(CostMatrixError::InfeasibleRow {
                    vertex: self.rows.vertices()[row],
                });
            }
        }
        for column in 0..self.num_columns() {
            if !has_finite_cell(&CostColumn::new(&self.cells, column)) {
                return Err(CostMatrixError::InfeasibleColumn {
                    vertex: self.columns.vertices()[column],
                });
            }
        }
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.cells.num_columns()
    }

    /// Vertex count of the graph the matrix was built from.
    pub fn num_vertices(&self) -> usize {
        self.rows.num_vertices()
    }

    /// Original vertex of each condensed row, in condensed order.
    pub fn row_vertices(&self) -> &[Vertex] {
        self.rows.vertices()
    }

    /// Original vertex of each condensed column, in condensed order.
    pub fn column_vertices(&self) -> &[Vertex] {
        self.columns.vertices()
    }

    pub fn is_row_available(&self, vertex: Vertex) -> bool {
        self.rows.contains(vertex)
    }

    pub fn is_column_available(&self, vertex: Vertex) -> bool {
        self.columns.contains(vertex)
    }

    pub fn condensed_row(&self, vertex: Vertex) -> CostMatrixResult<usize> {
        self.check_in_range(vertex)?;
        self.rows
            .get(vertex)
            .ok_or(CostMatrixError::RowUnavailable { vertex })
    }

    pub fn condensed_column(&self, vertex: Vertex) -> CostMatrixResult<usize> {
        self.check_in_range(vertex)?;
        self.columns
            .get(vertex)
            .ok_or(CostMatrixError::ColumnUnavailable { vertex })
    }

    fn check_in_range(&self, vertex: Vertex) -> CostMatrixResult<()> {
        let num_vertices = self.num_vertices();
        if vertex >= num_vertices {
            return Err(CostMatrixError::VertexOutOfRange {
                vertex,
                num_vertices,
            });
        }
        Ok(())
    }

    fn position(&self, edge: Edge) -> CostMatrixResult<(usize, usize)> {
        Ok((
            self.condensed_row(edge.origin)?,
            self.condensed_column(edge.destination)?,
        ))
    }

    /// Cell of the original arc `edge`, e.g. `get((2, 3))`.
    pub fn get(&self, edge: impl Into<Edge>) -> CostMatrixResult<&CostMatrixInteger> {
        let position = self.position(edge.into())?;
        Ok(&self.cells[position])
    }

    pub fn get_mut(&mut self, edge: impl Into<Edge>) -> CostMatrixResult<&mut CostMatrixInteger> {
        let position = self.position(edge.into())?;
        Ok(&mut self.cells[position])
    }

    pub fn row(&self, vertex: Vertex) -> CostMatrixResult<CostRow<&Matrix<CostMatrixInteger>>> {
        let row = self.condensed_row(vertex)?;
        Ok(CostRow::new(&self.cells, row))
    }

    pub fn row_mut(
        &mut self,
        vertex: Vertex,
    ) -> CostMatrixResult<CostRow<&mut Matrix<CostMatrixInteger>>> {
        let row = self.condensed_row(vertex)?;
        Ok(CostRow::new(&mut self.cells, row))
    }

    pub fn column(
        &self,
        vertex: Vertex,
    ) -> CostMatrixResult<CostColumn<&Matrix<CostMatrixInteger>>> {
        let column = self.condensed_column(vertex)?;
        Ok(CostColumn::new(&self.cells, column))
    }

    pub fn column_mut(
        &mut self,
        vertex: Vertex,
    ) -> CostMatrixResult<CostColumn<&mut Matrix<CostMatrixInteger>>> {
        let column = self.condensed_column(vertex)?;
        Ok(CostColumn::new(&mut self.cells, column))
    }

    pub fn iter(&self) -> CostMatrixIter<'_> {
        CostMatrixIter::new(&self.cells)
    }

    /// The exhausted state every `iter()` reaches.
    pub fn iter_end(&self) -> CostMatrixIter<'_> {
        CostMatrixIter::end(&self.cells)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, CostMatrixInteger> {
        self.cells.as_mut_slice().iter_mut()
    }

    /// Snapshot of the condensed costs, `None` for infinite cells.
    pub fn to_rows(&self) -> Vec<Vec<Option<Cost>>> {
        (0..self.num_rows())
            .map(|row| {
                CostRow::new(&self.cells, row)
                    .iter()
                    .map(|cell| cell.value())
                    .collect()
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CostMatrix {
    type Item = &'a CostMatrixInteger;
    type IntoIter = CostMatrixIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn has_finite_cell<V: CostVector>(vector: &V) -> bool {
    matches!(vector.min_cost(), Some(CellCost::Finite(_)))
}

/// Subtract the minimum of `vector` from each of its cells and return it.
fn reduce_vector<V: CostVectorMut>(vector: &mut V) -> Cost {
    match vector.min_cost() {
        Some(CellCost::Finite(min)) => {
            if min > 0 {
                vector.subtract(min);
            }
            min
        }
        _ => 0,
    }
}
