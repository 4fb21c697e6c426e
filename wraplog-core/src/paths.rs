//! Default log file location.
//!
//! Follows the `fn_at(base)` / `fn()` pattern: the `_at` form takes an explicit
//! base directory and is what tests use; the no-arg form resolves the per-user
//! base via `dirs` and delegates.

use std::path::{Path, PathBuf};

/// Directory created under the per-user base for the log file.
pub const APP_DIR: &str = "wraplog";

/// File name of the default log file.
pub const LOG_FILE_NAME: &str = "wraplog.log";

/// `<base>/wraplog/wraplog.log` — pure, no I/O.
pub fn default_log_path_at(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(LOG_FILE_NAME)
}

/// Per-user base directory for logs.
///
/// The platform local-data directory (`~/.local/share`, `~/Library/Application
/// Support`, `%LOCALAPPDATA%`), or the temp directory when none is known.
pub fn default_base_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(std::env::temp_dir)
}

/// `default_log_path_at` convenience wrapper.
pub fn default_log_path() -> PathBuf {
    default_log_path_at(&default_base_dir())
}
