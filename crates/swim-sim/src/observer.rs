//! Simulation observer trait for trace collection and progress reporting.

use swim_core::SimTime;
use swim_schedule::Event;

use crate::TraceRecord;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called after an event has been dispatched, warm-up included.
    fn on_event(&mut self, _event: &Event) {}

    /// Called for each trace record, in emission order.
    fn on_trace(&mut self, _record: &TraceRecord) {}

    /// Called once when the run stops.  `final_time` is the time of the
    /// event that ended the run, or of the last processed event.
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every trace record in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TraceCollector {
    pub records: Vec<TraceRecord>,
}

impl SimObserver for TraceCollector {
    fn on_trace(&mut self, record: &TraceRecord) {
        self.records.push(*record);
    }
}
