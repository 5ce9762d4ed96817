//! `swim-output` — trace writers for the swim mobility engine.
//!
//! | Writer            | Format                                               |
//! |-------------------|------------------------------------------------------|
//! | [`CsvTraceWriter`] | `time id x y`, space-delimited, no header, 3 decimals |
//!
//! Writers implement [`TraceWriter`] and are driven by
//! [`TraceOutputObserver`], which implements `swim_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use swim_output::{CsvTraceWriter, TraceOutputObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("trace.csv"))?;
//! let mut obs = TraceOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;


pub use self::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceOutputObserver;
pub use writer::TraceWriter;
