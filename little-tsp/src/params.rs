use crate::Cost;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GraphParams {
    /// Number of vertices in the instance. At least 2.
    pub num_vertices: usize,

    /// Vertex positions are drawn from `[0, grid_size]` on both axes.
    pub grid_size: i32,

    /// Upper bound of the random surcharge added to every arc on top of the
    /// Euclidean distance. Makes `cost(i, j)` differ from `cost(j, i)`.
    pub max_detour: u32,
}

impl GraphParams {
    pub fn defaults(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            grid_size: 1000,
            max_detour: 100,
        }
    }

    /// Start from the defaults for `num_vertices` and overlay any user-provided
    /// keys. `num_vertices` itself can be overridden too.
    pub fn from_hyperparameters(
        num_vertices: usize,
        hyperparameters: &Option<Map<String, Value>>,
    ) -> Result<Self> {
        let mut merged = serde_json::to_value(Self::defaults(num_vertices))?;
        if let (Value::Object(ref mut obj), Some(map)) = (&mut merged, hyperparameters) {
            for (k, v) in map {
                if !obj.contains_key(k) {
                    return Err(anyhow!("Unknown graph parameter '{}'", k));
                }
                obj.insert(k.clone(), v.clone());
            }
        }
        let params: Self = serde_json::from_value(merged)
            .map_err(|e| anyhow!("Invalid graph parameters: {}", e))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_vertices < 2 {
            return Err(anyhow!(
                "num_vertices must be at least 2 (got {})",
                self.num_vertices
            ));
        }
        if self.grid_size < 1 {
            return Err(anyhow!(
                "grid_size must be at least 1 (got {})",
                self.grid_size
            ));
        }
        let num_positions = (self.grid_size as u64 + 1).pow(2);
        if (self.num_vertices as u64) > num_positions {
            return Err(anyhow!(
                "A grid of size {} only has {} distinct positions for {} vertices",
                self.grid_size,
                num_positions,
                self.num_vertices
            ));
        }
        let max_distance = (self.grid_size as f64 * std::f64::consts::SQRT_2).ceil() as u64;
        if max_distance + self.max_detour as u64 > Cost::MAX as u64 {
            return Err(anyhow!(
                "Arc costs up to {} (grid_size: {}, max_detour: {}) do not fit in {}",
                max_distance + self.max_detour as u64,
                self.grid_size,
                self.max_detour,
                Cost::MAX
            ));
        }
        Ok(())
    }
}
