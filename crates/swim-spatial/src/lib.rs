//! `swim-spatial` — the cell grid used for destination selection.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`grid`]  | `CellGrid` — point ↔ cell mapping, random points     |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                   |
//!
//! # Cell sizing
//!
//! `cell_length = r / √2`, so any two points whose ranges of radius `r` can
//! overlap fall in the same or an adjacent cell.  The grid has
//! `ceil(1 / cell_length)` cells per side; the last row and column may extend
//! past the unit square and are clipped when sampling.

pub mod error;
pub mod grid;


pub use error::{SpatialError, SpatialResult};
pub use grid::CellGrid;
