//! Domain types shared by the sink and the wrap algorithm.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// Short label identifying the component that emitted a log line.
///
/// An empty tag is the generic tag handed out for a missing identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(pub String);

impl Tag {
    /// The tag used when the caller supplies no identity.
    pub fn generic() -> Self {
        Self::default()
    }

    /// Derive a tag from a caller identity such as a type path.
    ///
    /// Generic parameters are dropped and only the last `::` segment is kept,
    /// so `my_app::update::Checker<u8>` becomes `Checker`. Control characters
    /// are replaced with `_` so a tag can never break a line. `None` or a
    /// blank identity yields [`Tag::generic`].
    pub fn from_identity(identity: Option<&str>) -> Self {
        let Some(identity) = identity else {
            return Self::generic();
        };
        let base = identity.split('<').next().unwrap_or_default();
        let last = base.rsplit("::").next().unwrap_or_default().trim();
        Self(
            last.chars()
                .map(|c| if c.is_control() { '_' } else { c })
                .collect(),
        )
    }

    /// Derive a tag from a Rust type, the way a component names itself.
    pub fn of<T: ?Sized>() -> Self {
        Self::from_identity(Some(std::any::type_name::<T>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_generic(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self::from_identity(Some(&s))
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::from_identity(Some(s))
    }
}

// ---------------------------------------------------------------------------
// WrapPolicy
// ---------------------------------------------------------------------------

/// What happens to an oversized log file when it is wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WrapPolicy {
    /// Reset the file to empty.
    #[default]
    Truncate,
    /// Keep at most the last `bytes` bytes, starting at a line boundary.
    KeepTail { bytes: u64 },
}

// ---------------------------------------------------------------------------
// WrapOutcome
// ---------------------------------------------------------------------------

/// What a single wrap check did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapOutcome {
    /// No file exists at the path yet.
    Missing,
    /// File was under the threshold and left untouched.
    Unchanged { size: u64 },
    /// File was reset to empty.
    Truncated { from: u64 },
    /// File was cut down to its tail.
    Trimmed { from: u64, to: u64 },
}

impl WrapOutcome {
    /// `true` if the file was rewritten.
    pub fn wrapped(&self) -> bool {
        matches!(self, Self::Truncated { .. } | Self::Trimmed { .. })
    }
}
