//! Space-delimited trace backend.
//!
//! One line per record, `time id x y`, no header row:
//!
//! ```text
//! 0.000 0 219.290 72.161
//! 0.000 1 63.247 134.551
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use swim_sim::TraceRecord;

use crate::OutputResult;
use crate::writer::TraceWriter;

/// Writes trace records as space-delimited lines.
pub struct CsvTraceWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

fn builder() -> WriterBuilder {
    let mut b = WriterBuilder::new();
    b.delimiter(b' ').has_headers(false);
    b
}

impl CsvTraceWriter<File> {
    /// Create (or truncate) the trace file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self { inner: builder().from_path(path)?, finished: false })
    }
}

impl<W: Write> CsvTraceWriter<W> {
    pub fn from_writer(w: W) -> Self {
        Self { inner: builder().from_writer(w), finished: false }
    }

    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }
}

impl<W: Write> TraceWriter for CsvTraceWriter<W> {
    fn write_record(&mut self, record: &TraceRecord) -> OutputResult<()> {
        self.inner.write_record(&[
            format!("{:.3}", record.time),
            record.node.0.to_string(),
            format!("{:.3}", record.x),
            format!("{:.3}", record.y),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
