//! Square grid partition of the unit square.

use swim_core::{CellId, JavaRng, Point};
use tracing::debug;

use crate::{SpatialError, SpatialResult};

/// Fixed-size square grid over `[0, 1]²`, addressed row-major.
///
/// Cells are never materialized: a cell is only its `CellId`, and its
/// geometry is recomputed on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct CellGrid {
    /// Side of one cell: `radius / √2`.
    pub cell_length: f64,
    /// Cells along each axis: `ceil(1 / cell_length)`.
    pub cells_per_side: u32,
}

impl CellGrid {
    /// Largest supported side, so every `CellId` and `cell_count` fit in `u32`.
    pub const MAX_CELLS_PER_SIDE: u32 = u16::MAX as u32;

    /// Build the grid for nodes of interaction radius `radius`.
    pub fn new(radius: f64) -> SpatialResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SpatialError::InvalidRadius(radius));
        }
        let cell_length = radius / std::f64::consts::SQRT_2;
        let per_side = (1.0 / cell_length).ceil();
        if per_side > f64::from(Self::MAX_CELLS_PER_SIDE) {
            return Err(SpatialError::GridTooLarge {
                radius,
                cells_per_side: per_side,
                max: Self::MAX_CELLS_PER_SIDE,
            });
        }
        // In 1..=MAX_CELLS_PER_SIDE, so the cast is exact.
        let cells_per_side = per_side as u32;
        debug!(cell_length, cells_per_side, "built cell grid");
        Ok(Self { cell_length, cells_per_side })
    }

    /// Total number of cells, `cells_per_side²`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        let n = self.cells_per_side as usize;
        n * n
    }

    /// Iterate every cell id in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + use<> {
        (0..self.cells_per_side * self.cells_per_side).map(CellId)
    }

    /// Cell containing `point`.  Row and column are truncated quotients,
    /// clamped to the grid so boundary and stray points still map somewhere.
    pub fn cell_index(&self, point: Point) -> CellId {
        let last = i64::from(self.cells_per_side) - 1;
        let row = ((point.y / self.cell_length) as i64).clamp(0, last);
        let col = ((point.x / self.cell_length) as i64).clamp(0, last);
        // At most `cell_count() - 1`, which `new` keeps inside `u32`.
        CellId((row * i64::from(self.cells_per_side) + col) as u32)
    }

    /// Geometric midpoint of `cell`.
    pub fn cell_center(&self, cell: CellId) -> Point {
        let row = cell.0 / self.cells_per_side;
        let col = cell.0 % self.cells_per_side;
        let half = self.cell_length / 2.0;
        Point::new(
            col as f64 * self.cell_length + half,
            row as f64 * self.cell_length + half,
        )
    }

    /// Uniform point in `cell`, clipped into the unit square.
    ///
    /// Draws the x offset, then the y offset.
    pub fn random_point_in_cell(&self, cell: CellId, rng: &mut JavaRng) -> Point {
        let center = self.cell_center(cell);
        let half = self.cell_length / 2.0;
        let dx = rng.uniform(-half, half);
        let dy = rng.uniform(-half, half);
        (center + Point::new(dx, dy)).clamp_unit()
    }
}
