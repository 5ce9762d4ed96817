use swim_core::{NodeId, SwimError};
use swim_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("invalid configuration: {0}")]
    Config(#[from] SwimError),

    #[error("grid construction failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
