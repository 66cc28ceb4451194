use crate::{params::GraphParams, Cost, TotalCost, Vertex};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete directed graph given by its arc costs.
///
/// Serialises as the plain nested cost array. Diagonal entries are stored but
/// never read: a self-loop is not a tour arc.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<Vec<Cost>>", into = "Vec<Vec<Cost>>")]
pub struct Graph {
    costs: Vec<Vec<Cost>>,
}

impl TryFrom<Vec<Vec<Cost>>> for Graph {
    type Error = anyhow::Error;

    fn try_from(costs: Vec<Vec<Cost>>) -> Result<Self> {
        let num_vertices = costs.len();
        if let Some((row, r)) = costs
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != num_vertices)
        {
            return Err(anyhow!(
                "Cost matrix must be square: row {} has {} entries, expected {}",
                row,
                r.len(),
                num_vertices
            ));
        }
        Ok(Self { costs })
    }
}

impl From<Graph> for Vec<Vec<Cost>> {
    fn from(graph: Graph) -> Self {
        graph.costs
    }
}

impl Graph {
    pub fn new(costs: Vec<Vec<Cost>>) -> Result<Self> {
        Self::try_from(costs)
    }

    pub fn generate_instance(seed: &[u8; 32], params: &GraphParams) -> Result<Self> {
        params.validate()?;
        let mut rng = SmallRng::from_seed(*seed);
        let num_vertices = params.num_vertices;

        let mut positions: Vec<(i32, i32)> = Vec::with_capacity(num_vertices);
        let mut positions_set: HashSet<(i32, i32)> = HashSet::with_capacity(num_vertices);
        while positions.len() < num_vertices {
            let pos = (
                rng.gen_range(0..=params.grid_size),
                rng.gen_range(0..=params.grid_size),
            );
            if positions_set.insert(pos) {
                positions.push(pos);
            }
        }

        let costs: Vec<Vec<Cost>> = positions
            .iter()
            .enumerate()
            .map(|(i, &from)| {
                positions
                    .iter()
                    .enumerate()
                    .map(|(j, &to)| {
                        if i == j {
                            return 0;
                        }
                        let dx = (from.0 - to.0) as f64;
                        let dy = (from.1 - to.1) as f64;
                        dx.hypot(dy).round() as Cost + rng.gen_range(0..=params.max_detour)
                    })
                    .collect()
            })
            .collect();

        log::debug!(
            "generated graph with {} vertices (grid_size: {}, max_detour: {})",
            num_vertices,
            params.grid_size,
            params.max_detour
        );
        Ok(Self { costs })
    }

    pub fn num_vertices(&self) -> usize {
        self.costs.len()
    }

    /// Cost of the arc `from -> to`, `None` for a self-loop.
    ///
    /// Panics if either vertex is out of range.
    #[inline(always)]
    pub fn cost(&self, from: Vertex, to: Vertex) -> Option<Cost> {
        let cost = self.costs[from][to];
        (from != to).then_some(cost)
    }

    /// Total cost of the Hamiltonian cycle visiting `tour` in order and
    /// returning to `tour[0]`.
    pub fn tour_cost(&self, tour: &[Vertex]) -> Result<TotalCost> {
        let num_vertices = self.num_vertices();
        if tour.len() != num_vertices {
            return Err(anyhow!(
                "Tour length ({}) does not match number of vertices ({})",
                tour.len(),
                num_vertices
            ));
        }
        if tour.iter().any(|&v| v >= num_vertices) {
            return Err(anyhow!("Tour contains invalid vertices"));
        }
        let visited = tour.iter().cloned().collect::<HashSet<Vertex>>();
        if visited.len() != tour.len() {
            return Err(anyhow!("Tour contains duplicate vertices"));
        }
        if num_vertices < 2 {
            return Ok(0);
        }
        let total = tour
            .iter()
            .zip(tour.iter().cycle().skip(1))
            .map(|(&from, &to)| self.costs[from][to] as TotalCost)
            .sum();
        Ok(total)
    }
}
