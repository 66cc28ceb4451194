//! Condensed, reducible cost matrices for Little's branch-and-bound algorithm
//! on the asymmetric travelling salesman problem.

/// Original vertex id of the instance graph.
pub type Vertex = usize;
/// Cost of a single arc.
pub type Cost = u32;
/// Accumulated cost (tour lengths, reduction totals).
pub type TotalCost = u64;

pub mod cost_matrix;
pub mod cost_matrix_integer;
pub mod edge;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod params;

pub use cost_matrix::{
    CostColumn, CostMatrix, CostMatrixIter, CostRow, CostVector, CostVectorIter, CostVectorIterMut,
    CostVectorMut,
};
pub use cost_matrix_integer::{CellCost, CostMatrixInteger};
pub use edge::Edge;
pub use error::{CostMatrixError, CostMatrixResult};
pub use graph::Graph;
pub use matrix::Matrix;
pub use params::GraphParams;
