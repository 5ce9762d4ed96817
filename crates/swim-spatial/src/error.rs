//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `swim-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("interaction radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("interaction radius {radius} needs {cells_per_side} cells per side, more than {max}")]
    GridTooLarge {
        radius:         f64,
        cells_per_side: f64,
        max:            u32,
    },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
