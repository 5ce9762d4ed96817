//! `TraceOutputObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use swim_core::SimTime;
use swim_sim::{SimObserver, TraceRecord};

use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that forwards every trace record to a [`TraceWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceOutputObserver<W: TraceWriter> {
    writer:     W,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of records successfully handed to the writer.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceOutputObserver<W> {
    fn on_trace(&mut self, record: &TraceRecord) {
        let result = self.writer.write_record(record);
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_time: SimTime) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
