//! Route `tracing` output into the support log.
//!
//! [`Logger`] implements [`MakeWriter`], so a host can hand it to a
//! `tracing_subscriber::fmt` layer. Each event is buffered and appended as a
//! single tagged line when the writer is flushed or dropped. Pair it with
//! `.without_time()` and `.with_ansi(false)`; the log line already carries a
//! timestamp.
//!
//! A failed append is dropped without emitting any tracing event, since that
//! event could come straight back to this writer.

use std::io;

use tracing_subscriber::fmt::MakeWriter;

use crate::sink::Logger;

/// Per-event writer handed out by [`Logger::make_writer`].
#[derive(Debug)]
pub struct EventWriter<'a> {
    logger: &'a Logger,
    buf: Vec<u8>,
}

impl EventWriter<'_> {
    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let bytes = std::mem::take(&mut self.buf);
        let text = String::from_utf8_lossy(&bytes);
        let text = text.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            return;
        }
        let _ = self.logger.try_log(format_args!("{text}"));
    }
}

impl io::Write for EventWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for EventWriter<'_> {
    fn drop(&mut self) {
        self.emit();
    }
}

impl<'a> MakeWriter<'a> for Logger {
    type Writer = EventWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        EventWriter {
            logger: self,
            buf: Vec::new(),
        }
    }
}
