//! `swim-sim` — the discrete-event driver for the swim mobility engine.
//!
//! # Event loop
//!
//! ```text
//! loop:
//!   ① Pop      — earliest event (FIFO among equal times); stop when the queue
//!                is empty or the event lies past duration + warm-up.
//!   ② Dispatch — START_MOVING  → new trip, push END_MOVING, predict contacts
//!                END_MOVING    → push START_WAITING now
//!                START_WAITING → new wait, push END_WAITING, predict contacts
//!                END_WAITING   → push START_MOVING now
//!                MEET / LEAVE  → notification only
//!   ③ Trace    — after warm-up, one record per node the event concerns,
//!                at `time − warm-up`, scaled to the area.
//! ```
//!
//! The loop is strictly sequential and uses virtual time only.  With a fixed
//! seed and configuration the trace is identical on every run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swim_core::SwimConfig;
//! use swim_sim::{SimBuilder, TraceCollector};
//!
//! let mut sim = SimBuilder::new(SwimConfig::default()).build()?;
//! let mut trace = TraceCollector::default();
//! sim.run(&mut trace)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trace;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TraceCollector};
pub use sim::Sim;
pub use trace::TraceRecord;
