use crate::Vertex;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A directed arc `origin -> destination`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub origin: Vertex,
    pub destination: Vertex,
}

impl Edge {
    pub const fn new(origin: Vertex, destination: Vertex) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((origin, destination): (Vertex, Vertex)) -> Self {
        Self::new(origin, destination)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}

/// Parses `"u,v"`.
impl FromStr for Edge {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (origin, destination) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("Edge '{}' must be written as 'origin,destination'", s))?;
        let origin = origin
            .trim()
            .parse::<Vertex>()
            .map_err(|e| anyhow!("Bad origin in edge '{}': {}", s, e))?;
        let destination = destination
            .trim()
            .parse::<Vertex>()
            .map_err(|e| anyhow!("Bad destination in edge '{}': {}", s, e))?;
        Ok(Self::new(origin, destination))
    }
}
