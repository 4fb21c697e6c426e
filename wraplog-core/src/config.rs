//! Log sink configuration.
//!
//! A host either builds a [`LogConfig`] in code or loads one from YAML at
//! startup:
//!
//! ```yaml
//! path: /var/log/updater/support.log
//! max_bytes: 512000
//! policy:
//!   kind: keep_tail
//!   bytes: 65536
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, WrapLogError};
use crate::paths;
use crate::types::WrapPolicy;

/// Default wrap threshold: 500 KiB.
pub const DEFAULT_MAX_BYTES: u64 = 500 * 1024;

/// Where the log goes and when it wraps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file path; `None` means [`paths::default_log_path`].
    pub path: Option<PathBuf>,
    /// A wrap check rewrites the file once its size reaches this many bytes.
    pub max_bytes: u64,
    pub policy: WrapPolicy,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_bytes: DEFAULT_MAX_BYTES,
            policy: WrapPolicy::Truncate,
        }
    }
}

impl LogConfig {
    /// Default config pointed at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// The configured path, or the per-user default.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(paths::default_log_path)
    }

    /// Reject thresholds that would make every wrap check misbehave.
    pub fn validate(&self) -> Result<(), WrapLogError> {
        if self.max_bytes == 0 {
            return Err(WrapLogError::InvalidConfig(
                "max_bytes must be greater than zero".into(),
            ));
        }
        if let WrapPolicy::KeepTail { bytes } = self.policy {
            if bytes >= self.max_bytes {
                return Err(WrapLogError::InvalidConfig(format!(
                    "keep_tail bytes ({bytes}) must be smaller than max_bytes ({})",
                    self.max_bytes
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, WrapLogError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file.
    ///
    /// Returns `WrapLogError::Io` if the file cannot be read and
    /// `WrapLogError::Parse` (with the path) if it is malformed.
    pub fn load_at(path: &Path) -> Result<Self, WrapLogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        let config: Self = serde_yaml::from_str(&contents).map_err(|e| WrapLogError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), max_bytes = config.max_bytes, "log config loaded");
        Ok(config)
    }
}
