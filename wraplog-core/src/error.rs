//! Error types for wraplog-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while configuring, appending to, or wrapping a
/// log file.
///
/// The logging path never hands these to its caller; they surface only from
/// the fallible `try_*` calls and from configuration loading.
#[derive(Debug, Error)]
pub enum WrapLogError {
    /// Open, write, truncate or rename failure, annotated with the path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error while loading a config file.
    #[error("failed to parse log config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML parse error for an in-memory config document.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration is self-contradictory (e.g. a zero threshold).
    #[error("invalid log config: {0}")]
    InvalidConfig(String),
}

/// Convenience constructor for [`WrapLogError::Io`].
pub fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> WrapLogError {
    WrapLogError::Io {
        path: path.into(),
        source,
    }
}
