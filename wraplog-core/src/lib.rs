//! wraplog core library — configuration, paths, errors, and the wrap algorithm.
//!
//! - [`config`] — [`LogConfig`], YAML loading and validation
//! - [`paths`] — default per-user log location
//! - [`types`] — [`Tag`], [`WrapPolicy`], [`WrapOutcome`]
//! - [`wrap`] — size check + truncate / keep-tail
//! - [`error`] — [`WrapLogError`]

pub mod config;
pub mod error;
pub mod paths;
pub mod types;
pub mod wrap;

pub use config::{LogConfig, DEFAULT_MAX_BYTES};
pub use error::WrapLogError;
pub use types::{Tag, WrapOutcome, WrapPolicy};
pub use wrap::wrap_if_needed;
