//! Cell scoring and weighted destination choice.
//!
//! A cell's weight blends two scores, each normalized so its best cell
//! scores 1:
//!
//! ```text
//! distance(n, c) = (1 + d/r)⁻² / max_j (1 + d_j/r)⁻²      d = |home − center(c)|
//! novelty(n, c)  = 1 / cell_count                          if visits(c) = 0
//!                = (1 + visits(c)/ρ) / max_j (1 + visits(j)/ρ)   otherwise
//! weight(n, c)   = α · distance + (1 − α) · novelty
//! ```
//!
//! with `ρ = π r² N` and `α = cell_distance_weight`.  Note that the novelty
//! score grows with the visit count: frequently seen cells score higher.
//!
//! Weights are cached in `NodeState::cell_weights`, start at zero, and are
//! refreshed only for the cell a node is leaving.

use std::f64::consts::PI;

use swim_core::{CellId, JavaRng};
use swim_spatial::CellGrid;

use crate::NodeState;

/// Parameters of the cell scoring function.
#[derive(Clone, Debug, PartialEq)]
pub struct CellWeightModel {
    /// Interaction radius `r`; distances are measured in units of it.
    pub radius: f64,
    /// Expected node count per unit area at saturation, `π r² N`.
    pub density: f64,
    /// Blend factor `α` in `[0, 1]`.
    pub distance_weight: f64,
}

impl CellWeightModel {
    pub fn new(radius: f64, node_count: usize, distance_weight: f64) -> Self {
        Self {
            radius,
            density: PI * radius.powi(2) * node_count as f64,
            distance_weight,
        }
    }

    fn attraction(&self, node: &NodeState, grid: &CellGrid, cell: CellId) -> f64 {
        let k = 1.0 / self.radius;
        let d = node.home.distance(grid.cell_center(cell));
        1.0 / (1.0 + k * d).powi(2)
    }

    /// Home-distance score of `cell`, in `(0, 1]`.
    pub fn distance_score(&self, node: &NodeState, grid: &CellGrid, cell: CellId) -> f64 {
        let value = self.attraction(node, grid, cell);
        let max = grid
            .cells()
            .map(|c| self.attraction(node, grid, c))
            .fold(0.0, f64::max);
        if max != 0.0 { value / max } else { 0.0 }
    }

    /// Visit-count score of `cell`.  Unvisited cells get the uniform prior.
    pub fn novelty_score(&self, node: &NodeState, grid: &CellGrid, cell: CellId) -> f64 {
        let visits = node.visit_counts[cell.index()];
        if visits == 0 {
            return 1.0 / grid.cell_count() as f64;
        }
        let value = 1.0 + visits as f64 / self.density;
        let max = node
            .visit_counts
            .iter()
            .map(|&v| 1.0 + v as f64 / self.density)
            .fold(0.0, f64::max);
        if max != 0.0 { value / max } else { 0.0 }
    }

    /// Blended weight of `cell` for `node`.
    pub fn weight(&self, node: &NodeState, grid: &CellGrid, cell: CellId) -> f64 {
        self.distance_weight * self.distance_score(node, grid, cell)
            + (1.0 - self.distance_weight) * self.novelty_score(node, grid, cell)
    }

    /// Fold `seen` new sightings into `cell`'s visit count and re-score it.
    pub fn refresh(&self, node: &mut NodeState, grid: &CellGrid, cell: CellId, seen: u64) {
        node.visit_counts[cell.index()] += seen;
        node.cell_weights[cell.index()] = self.weight(node, grid, cell);
    }

    /// Draw a destination cell in proportion to the cached weights,
    /// excluding the node's current cell.
    ///
    /// Consumes one `uniform(0, total)` draw.  The first cell whose cumulative
    /// range `[before, after]` contains the draw wins (both ends inclusive).
    /// With an all-zero total the draw is 0 and the first eligible cell
    /// wins; the current cell comes back only when it is the only cell.
    pub fn choose_destination_cell(&self, node: &NodeState, rng: &mut JavaRng) -> CellId {
        let current = node.current_cell.index();
        let eligible = || {
            node.cell_weights
                .iter()
                .enumerate()
                .filter(move |&(i, _)| i != current)
        };

        let total: f64 = eligible().map(|(_, &w)| w).sum();
        let r = rng.uniform(0.0, total);

        let mut accum = 0.0;
        for (i, &w) in eligible() {
            let before = accum;
            accum += w;
            if r >= before && r <= accum {
                return CellId(i as u32);
            }
        }
        node.current_cell
    }
}
