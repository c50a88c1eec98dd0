//! Error types for configuration loading, saving and path access.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Filesystem failure while reading or writing a config file.
  Io,
  /// Malformed JSON input, or data that could not be serialized.
  Parse,
  /// A path walked through a value that cannot hold children.
  Type,
}

/// Errors that can occur when working with a config store.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Failed to read a config file.
  #[error("failed to read config file '{path}': {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to write a config file.
  #[error("failed to write config file '{path}': {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The file contents are not valid JSON.
  #[error("failed to parse config file '{path}': {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// Failed to serialize the store.
  #[error("failed to serialize config: {0}")]
  Serialize(#[source] serde_json::Error),

  /// An intermediate segment holds a scalar, so deeper segments cannot be created.
  #[error("cannot set '{path}': segment '{segment}' holds a {found}, not an object or array")]
  NotAContainer {
    path: String,
    segment: String,
    found: &'static str,
  },

  /// A segment addressing an array is not an index in `0..=len`.
  #[error("cannot set '{path}': segment '{segment}' is not a valid index for an array of length {len}")]
  InvalidIndex { path: String, segment: String, len: usize },
}

impl ConfigError {
  /// The category this error belongs to.
  pub fn kind(&self) -> ErrorKind {
    match self {
      ConfigError::Read { .. } | ConfigError::Write { .. } => ErrorKind::Io,
      ConfigError::Parse { .. } | ConfigError::Serialize(_) => ErrorKind::Parse,
      ConfigError::NotAContainer { .. } | ConfigError::InvalidIndex { .. } => ErrorKind::Type,
    }
  }
}
