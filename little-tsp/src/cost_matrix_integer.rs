use crate::{edge::Edge, Cost};
use serde::{Deserialize, Serialize};
use std::ops::SubAssign;

/// Value held by a cost cell.
///
/// `Finite` orders before `Infinite`, so the derived `Ord` picks a finite
/// minimum whenever one exists.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellCost {
    Finite(Cost),
    Infinite,
}

impl CellCost {
    pub fn is_infinite(&self) -> bool {
        matches!(self, CellCost::Infinite)
    }

    pub fn finite(&self) -> Option<Cost> {
        match *self {
            CellCost::Finite(cost) => Some(cost),
            CellCost::Infinite => None,
        }
    }
}

impl From<Option<Cost>> for CellCost {
    fn from(cost: Option<Cost>) -> Self {
        cost.map_or(CellCost::Infinite, CellCost::Finite)
    }
}

/// A cell of the condensed cost matrix, remembering the arc of the original
/// graph it stands for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostMatrixInteger {
    cost: CellCost,
    edge: Edge,
}

impl CostMatrixInteger {
    pub fn new(cost: Cost, edge: Edge) -> Self {
        Self {
            cost: CellCost::Finite(cost),
            edge,
        }
    }

    pub fn infinite(edge: Edge) -> Self {
        Self {
            cost: CellCost::Infinite,
            edge,
        }
    }

    pub fn cost(&self) -> CellCost {
        self.cost
    }

    /// `None` when the cell is infinite.
    pub fn value(&self) -> Option<Cost> {
        self.cost.finite()
    }

    pub fn is_infinite(&self) -> bool {
        self.cost.is_infinite()
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn set_infinite(&mut self) {
        self.cost = CellCost::Infinite;
    }
}

/// Infinite cells absorb the subtraction. Finite cells stop at zero: costs
/// are never negative, and reduction only subtracts a minimum that is no
/// larger than the cell.
impl SubAssign<Cost> for CostMatrixInteger {
    fn sub_assign(&mut self, amount: Cost) {
        if let CellCost::Finite(ref mut cost) = self.cost {
            *cost = cost.saturating_sub(amount);
        }
    }
}
