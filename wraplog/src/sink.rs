//! The log sink and the tag-bound loggers it hands out.
//!
//! A host builds one [`LogSink`] at startup from a [`LogConfig`] and gives each
//! component its own [`Logger`]. Loggers share the sink's configuration, so a
//! later [`LogSink::set_log_file`] redirects all of them.
//!
//! Every append opens the file, writes one complete line and closes it again.
//! Appends and wrap checks on the same path are serialized process-wide.

use std::collections::VecDeque;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Local;

use wraplog_core::error::io_err;
use wraplog_core::{wrap_if_needed, LogConfig, Tag, WrapLogError, WrapOutcome};

use crate::line::format_line;
use crate::lock::with_path_lock;

// ---------------------------------------------------------------------------
// LogSink
// ---------------------------------------------------------------------------

/// Shared handle to the support log configuration.
///
/// Cloning is cheap; clones share the same configuration.
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    config: Arc<RwLock<LogConfig>>,
}

impl LogSink {
    /// Sink using `config` as given.
    ///
    /// An invalid config is still accepted, with a warning: wrap checks then
    /// leave the file alone rather than rewrite it on every call.
    pub fn new(config: LogConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "log config used without validation");
        }
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Sink with default thresholds writing to `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(LogConfig::with_path(path))
    }

    /// Sink configured from a YAML file (see [`LogConfig::load_at`]).
    pub fn from_config_file(path: &Path) -> Result<Self, WrapLogError> {
        Ok(Self::new(LogConfig::load_at(path)?))
    }

    /// Point the sink, and every logger it produced, at `path`.
    pub fn set_log_file(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!(path = %path.display(), "log file set");
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .path = Some(path);
    }

    /// Current log file path, falling back to the per-user default.
    pub fn log_file_path(&self) -> PathBuf {
        self.config().resolved_path()
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> LogConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Logger tagged with `identity` (see [`Tag::from_identity`]).
    pub fn logger(&self, identity: Option<&str>) -> Logger {
        Logger {
            sink: self.clone(),
            tag: Tag::from_identity(identity),
        }
    }

    /// Logger tagged with the name of type `T`.
    pub fn logger_for<T: ?Sized>(&self) -> Logger {
        Logger {
            sink: self.clone(),
            tag: Tag::of::<T>(),
        }
    }

    /// Check the log size and wrap it if it reached the threshold.
    pub fn try_wrap(&self) -> Result<WrapOutcome, WrapLogError> {
        let config = self.config();
        let path = config.resolved_path();
        let outcome =
            with_path_lock(&path, || wrap_if_needed(&path, config.max_bytes, config.policy))?;
        if outcome.wrapped() {
            tracing::info!(path = %path.display(), outcome = ?outcome, "log file wrapped");
        }
        Ok(outcome)
    }

    /// Best-effort [`try_wrap`](Self::try_wrap): failures are reported through
    /// `tracing` and otherwise ignored.
    pub fn wrap_logs_if_necessary(&self) {
        if let Err(err) = self.try_wrap() {
            tracing::warn!(error = %err, "log wrap failed");
        }
    }

    /// Last `lines` lines of the log, oldest first. A missing log is empty.
    pub fn try_tail(&self, lines: usize) -> Result<Vec<String>, WrapLogError> {
        let path = self.log_file_path();
        with_path_lock(&path, || read_tail_lines(&path, lines))
    }

    /// Best-effort [`try_tail`](Self::try_tail).
    pub fn tail(&self, lines: usize) -> Vec<String> {
        self.try_tail(lines).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "log tail unavailable");
            Vec::new()
        })
    }

    /// Append the line produced by `render` while holding the path lock, so
    /// file order and timestamp order agree.
    pub(crate) fn append_with(&self, render: impl FnOnce() -> String) -> Result<(), WrapLogError> {
        let path = self.log_file_path();
        with_path_lock(&path, || append_line(&path, &render()))
    }
}

fn append_line(path: &Path, line: &str) -> Result<(), WrapLogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_err(path, e))?;
    file.write_all(line.as_bytes()).map_err(|e| io_err(path, e))
}

fn read_tail_lines(path: &Path, lines: usize) -> Result<Vec<String>, WrapLogError> {
    if lines == 0 {
        return Ok(Vec::new());
    }
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(io_err(path, err)),
    };

    let mut tail = VecDeque::<String>::new();
    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(|e| io_err(path, e))?;
        if tail.len() == lines {
            tail.pop_front();
        }
        tail.push_back(String::from_utf8_lossy(&line).into_owned());
    }
    Ok(tail.into())
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/// A component's handle on the support log; every line carries its tag.
#[derive(Debug, Clone)]
pub struct Logger {
    sink: LogSink,
    tag: Tag,
}

impl Logger {
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    /// Append one formatted line, returning any I/O failure.
    pub fn try_log(&self, args: fmt::Arguments<'_>) -> Result<(), WrapLogError> {
        let message = fmt::format(args);
        self.sink
            .append_with(|| format_line(&self.tag, &Local::now(), &message))
    }

    /// Append one formatted line; failures never reach the caller.
    ///
    /// Usually called through [`tlog!`](crate::tlog).
    pub fn log(&self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.try_log(args) {
            tracing::warn!(tag = %self.tag, error = %err, "log line dropped");
        }
    }

    /// Same as [`LogSink::wrap_logs_if_necessary`] on this logger's sink.
    pub fn wrap_logs_if_necessary(&self) {
        self.sink.wrap_logs_if_necessary();
    }
}
