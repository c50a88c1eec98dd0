//! The configuration store.
//!
//! [`Config`] owns the live mapping, the mutation lock and the history of
//! loaded sources. Reads and writes go through dotted paths (see
//! [`crate::path`]); loading and saving live in [`crate::loader`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::env::ConfigEnv;
use crate::error::ConfigError;
use crate::overlay::overlay_value;
use crate::path;

/// Where a loaded source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadOrigin {
  Object,
  File,
}

/// One entry in the load history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadEvent {
  pub origin: LoadOrigin,
  /// Source file, for `File` events.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<PathBuf>,
  /// The contents as loaded, before overlay.
  pub contents: Value,
}

impl LoadEvent {
  pub fn object(contents: Value) -> Self {
    Self {
      origin: LoadOrigin::Object,
      path: None,
      contents,
    }
  }

  pub fn file(path: &Path, contents: Value) -> Self {
    Self {
      origin: LoadOrigin::File,
      path: Some(path.to_path_buf()),
      contents,
    }
  }
}

/// A JSON configuration store with dotted-path access.
///
/// While locked, `set` and `delete` are silently ignored. Loading is not
/// gated by the lock.
#[derive(Debug, Clone, Default)]
pub struct Config {
  data: Map<String, Value>,
  locked: bool,
  log: Vec<LoadEvent>,
  env: ConfigEnv,
}

impl Config {
  /// Create an empty, unlocked store with default environment settings.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an empty store that resolves its default file from `env`.
  pub fn with_env(env: ConfigEnv) -> Self {
    Self {
      env,
      ..Self::default()
    }
  }

  /// Create an empty store with settings read from the process environment.
  pub fn from_env() -> Self {
    Self::with_env(ConfigEnv::from_env())
  }

  /// The live root mapping.
  ///
  /// This is a shared borrow, so it cannot be used to get around the lock.
  pub fn all(&self) -> &Map<String, Value> {
    &self.data
  }

  /// Consume the store and return its mapping.
  pub fn into_inner(self) -> Map<String, Value> {
    self.data
  }

  pub fn get(&self, path: &str) -> Option<&Value> {
    path::get(&self.data, path)
  }

  pub fn has(&self, path: &str) -> bool {
    path::has(&self.data, path)
  }

  /// Assign a value at `path`.
  ///
  /// Does nothing when the store is locked or `value` is `None`. Errors only
  /// when the path runs through a scalar or an invalid array index.
  pub fn set(&mut self, path: &str, value: impl Into<Option<Value>>) -> Result<(), ConfigError> {
    let Some(value) = value.into() else {
      return Ok(());
    };
    if self.locked {
      debug!(path = %path, "config is locked, ignoring set");
      return Ok(());
    }
    path::set(&mut self.data, path, value)
  }

  /// Remove the value at `path`, returning it.
  ///
  /// Returns `None` when the path is absent or the store is locked.
  pub fn delete(&mut self, path: &str) -> Option<Value> {
    if self.locked {
      debug!(path = %path, "config is locked, ignoring delete");
      return None;
    }
    path::delete(&mut self.data, path)
  }

  pub fn lock(&mut self) {
    self.locked = true;
  }

  pub fn unlock(&mut self) {
    self.locked = false;
  }

  pub fn is_locked(&self) -> bool {
    self.locked
  }

  /// Every source loaded so far, oldest first.
  pub fn log(&self) -> &[LoadEvent] {
    &self.log
  }

  pub fn env(&self) -> &ConfigEnv {
    &self.env
  }

  /// Record `event` and overlay its contents. Returns the number of keys written.
  pub(crate) fn apply(&mut self, event: LoadEvent) -> usize {
    let written = overlay_value(&mut self.data, &event.contents);
    self.log.push(event);
    written
  }
}
