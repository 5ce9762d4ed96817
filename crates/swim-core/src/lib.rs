//! `swim-core` — foundational types for the swim mobility engine.
//!
//! This crate is a dependency of every other `swim-*` crate.  It has no
//! `swim-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `CellId`                                    |
//! | [`geo`]         | `Point` on the normalized unit square                 |
//! | [`time`]        | `SimTime` (continuous, totally ordered)               |
//! | [`rng`]         | `JavaRng` (48-bit LCG, bit-exact stream)              |
//! | [`config`]      | `SwimConfig` + validation                             |
//! | [`error`]       | `SwimError`, `SwimResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SwimConfig;
pub use error::{SwimError, SwimResult};
pub use geo::Point;
pub use ids::{CellId, NodeId};
pub use rng::JavaRng;
pub use time::SimTime;
