//! # wraplog
//!
//! Best-effort, size-wrapped support log for update components.
//!
//! ```no_run
//! use wraplog::{tlog, LogSink};
//!
//! struct UpdateChecker;
//!
//! let sink = LogSink::at("/tmp/updater-support.log");
//! sink.wrap_logs_if_necessary();
//!
//! let log = sink.logger_for::<UpdateChecker>();
//! tlog!(log, "checking {} for updates", "https://example.invalid/appcast.xml");
//! ```
//!
//! Writing never fails from the caller's point of view: `log`,
//! `wrap_logs_if_necessary` and `tail` swallow I/O errors. Use the `try_*`
//! variants to observe them.

mod line;
mod lock;
mod macros;
mod sink;
mod writer;

pub use line::{format_line, TIMESTAMP_FORMAT};
pub use sink::{LogSink, Logger};
pub use writer::EventWriter;
pub use wraplog_core::{
    paths, LogConfig, Tag, WrapLogError, WrapOutcome, WrapPolicy, DEFAULT_MAX_BYTES,
};
