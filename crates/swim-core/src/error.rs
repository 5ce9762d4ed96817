//! Engine error type.
//!
//! Sub-crates define their own error enums and wrap `SwimError` as one
//! variant where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `swim-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SwimError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `swim-*` crates.
pub type SwimResult<T> = Result<T, SwimError>;
