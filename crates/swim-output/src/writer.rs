//! The `TraceWriter` trait implemented by trace sinks.

use swim_sim::TraceRecord;

use crate::OutputResult;

/// A sink for trace records.
///
/// Errors surface through [`TraceOutputObserver::take_error`][crate::TraceOutputObserver::take_error]
/// when the writer is driven by a simulation run.
pub trait TraceWriter {
    /// Append one record.
    fn write_record(&mut self, record: &TraceRecord) -> OutputResult<()>;

    /// Flush buffered output.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
