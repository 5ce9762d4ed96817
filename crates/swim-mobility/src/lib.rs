//! `swim-mobility` — per-node motion, destination choice, and contact geometry.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `MotionState`, `NodeState` — one fixed-schema record per node     |
//! | [`store`]   | `NodeStore` — flat `Vec<NodeState>` arena indexed by `NodeId`     |
//! | [`weights`] | `CellWeightModel` — home-distance / novelty scoring and selection |
//! | [`contact`] | Moving-circle intersection: exact MEET / LEAVE fractions          |
//! | [`engine`]  | `MobilityEngine` — the state-transition handlers                  |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model
//!
//! Nodes alternate between straight-line trips and power-law waits:
//!
//! 1. `start_moving` fixes the node at its previous destination, refreshes
//!    the weight of the cell it leaves, picks a new cell by weighted draw and
//!    a uniform point inside it.  Every trip lasts `1 / speed_multiplier`.
//! 2. `start_waiting` fixes the node at the trip's end and draws a bounded
//!    power-law waiting time.
//!
//! Between fixes the position is a linear function of time, so the contact
//! predictor can solve for range entry and exit exactly.

pub mod contact;
pub mod engine;
pub mod error;
pub mod state;
pub mod store;
pub mod weights;

#[cfg(test)]
mod tests;

pub use contact::{ContactFractions, ContactPrediction, Segment};
pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use state::{MotionState, NodeState};
pub use store::NodeStore;
pub use weights::CellWeightModel;
