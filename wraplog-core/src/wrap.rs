//! Size-based wrapping of a single log file.
//!
//! There is no rotation history: an oversized log is either reset to empty
//! ([`WrapPolicy::Truncate`]) or cut down to its most recent lines
//! ([`WrapPolicy::KeepTail`]). The tail is written to `<name>.wrap.tmp` and
//! renamed over the log so a crash mid-wrap never leaves a half-written file.
//!
//! Callers serialize wrap checks against appends; nothing here locks. Nothing
//! here emits tracing events either: the caller may hold the log's lock, and
//! an event routed back into the same log would wait on it forever.

use std::fs::{self, File};
use std::io::{self, Read as _, Seek as _, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{io_err, WrapLogError};
use crate::types::{WrapOutcome, WrapPolicy};

/// Wrap `log_path` if its size has reached `max_bytes`.
///
/// Below the threshold the file is not opened for writing at all. A missing
/// file is reported as [`WrapOutcome::Missing`], not as an error.
///
/// A zero `max_bytes` disables wrapping, and a `KeepTail` window covering the
/// whole file leaves it untouched, so repeated checks never rewrite a file
/// that would come out the same.
///
/// # Errors
/// Returns `WrapLogError::Io` on metadata, truncate, read or rename failures.
pub fn wrap_if_needed(
    log_path: &Path,
    max_bytes: u64,
    policy: WrapPolicy,
) -> Result<WrapOutcome, WrapLogError> {
    let size = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(WrapOutcome::Missing),
        Err(err) => return Err(io_err(log_path, err)),
    };

    if max_bytes == 0 || size < max_bytes {
        return Ok(WrapOutcome::Unchanged { size });
    }

    match policy {
        WrapPolicy::Truncate => {
            fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(log_path)
                .map_err(|e| io_err(log_path, e))?;
            Ok(WrapOutcome::Truncated { from: size })
        }
        WrapPolicy::KeepTail { bytes } if bytes >= size => Ok(WrapOutcome::Unchanged { size }),
        WrapPolicy::KeepTail { bytes } => {
            let tail = read_tail(log_path, bytes).map_err(|e| io_err(log_path, e))?;
            replace_with(log_path, &tail)?;
            Ok(WrapOutcome::Trimmed {
                from: size,
                to: tail.len() as u64,
            })
        }
    }
}

/// Read at most the last `bytes` bytes of `path`, dropping the partial line
/// at the front of the window.
fn read_tail(path: &Path, bytes: u64) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let start = len.saturating_sub(bytes);

    let mut buf = Vec::new();
    if start == 0 {
        file.read_to_end(&mut buf)?;
        return Ok(buf);
    }

    // Read one byte early: if it is a newline the window starts on a line.
    file.seek(SeekFrom::Start(start - 1))?;
    file.read_to_end(&mut buf)?;
    let cut = buf
        .iter()
        .position(|&b| b == b'\n')
        .map_or(buf.len(), |i| i + 1);
    buf.drain(..cut);
    Ok(buf)
}

/// Replace the contents of `path` via a temp file and rename.
fn replace_with(path: &Path, contents: &[u8]) -> Result<(), WrapLogError> {
    let tmp = tmp_path(path);
    fs::write(&tmp, contents).map_err(|e| io_err(&tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

/// `<name>.wrap.tmp` next to `base`.
fn tmp_path(base: &Path) -> PathBuf {
    let name = base
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("wraplog.log");
    base.with_file_name(format!("{name}.wrap.tmp"))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
