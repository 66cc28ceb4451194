use crate::Vertex;

/// Original vertex id -> gap-free condensed index along one axis.
///
/// Available vertices keep their relative order, so the condensed layout is
/// deterministic for a given availability mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndexMapping {
    condensed: Vec<Option<usize>>,
    vertices: Vec<Vertex>,
}

impl IndexMapping {
    pub(crate) fn from_availability(available: &[bool]) -> Self {
        let mut condensed = Vec::with_capacity(available.len());
        let mut vertices = Vec::new();
        for (vertex, &is_available) in available.iter().enumerate() {
            if is_available {
                condensed.push(Some(vertices.len()));
                vertices.push(vertex);
            } else {
                condensed.push(None);
            }
        }
        Self {
            condensed,
            vertices,
        }
    }

    /// `None` for committed vertices and for vertices outside the graph.
    #[inline(always)]
    pub(crate) fn get(&self, vertex: Vertex) -> Option<usize> {
        self.condensed.get(vertex).copied().flatten()
    }

    pub(crate) fn contains(&self, vertex: Vertex) -> bool {
        self.get(vertex).is_some()
    }

    pub(crate) fn num_vertices(&self) -> usize {
        self.condensed.len()
    }

    /// Condensed index -> original vertex.
    pub(crate) fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }
}
