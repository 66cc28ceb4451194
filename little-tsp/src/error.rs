use crate::Vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostMatrixError {
    ColumnUnavailable {
        vertex: Vertex,
    },
    InfeasibleColumn {
        vertex: Vertex,
    },
    InfeasibleRow {
        vertex: Vertex,
    },
    RowUnavailable {
        vertex: Vertex,
    },
    VertexOutOfRange {
        vertex: Vertex,
        num_vertices: usize,
    },
}

impl std::fmt::Display for CostMatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostMatrixError::ColumnUnavailable { vertex } => write!(
                f,
                "Column '{}' is not available, an included edge already enters this vertex",
                vertex
            ),
            CostMatrixError::InfeasibleColumn { vertex } => write!(
                f,
                "Every cell in column '{}' is infinite, the node is infeasible",
                vertex
            ),
            CostMatrixError::InfeasibleRow { vertex } => write!(
                f,
                "Every cell in row '{}' is infinite, the node is infeasible",
                vertex
            ),
            CostMatrixError::RowUnavailable { vertex } => write!(
                f,
                "Row '{}' is not available, an included edge already leaves this vertex",
                vertex
            ),
            CostMatrixError::VertexOutOfRange {
                vertex,
                num_vertices,
            } => write!(
                f,
                "Vertex '{}' is out of range for a graph with {} vertices",
                vertex, num_vertices
            ),
        }
    }
}

impl std::error::Error for CostMatrixError {}

pub type CostMatrixResult<T> = std::result::Result<T, CostMatrixError>;
