//! `swim-schedule` — simulation events and the global event queue.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event`]       | `EventKind`, `Event`                                      |
//! | [`event_queue`] | `EventQueue` (`BTreeMap<SimTime, VecDeque<Event>>`)       |
//!
//! # Ordering model
//!
//! Events are popped in ascending `time`.  Events sharing an instant come out
//! in insertion order, which keeps the run deterministic: a handler that
//! schedules `START_WAITING` "now" and a contact check that schedules a
//! `MEET` "now" always resolve the same way.

pub mod event;
pub mod event_queue;


pub use event::{Event, EventKind};
pub use event_queue::EventQueue;
