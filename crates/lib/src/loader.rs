//! Loading and saving config files.
//!
//! Every entry point comes in two flavors with identical semantics: an async
//! one built on `tokio::fs` and a blocking one built on `std::fs`. Both take
//! `&mut self`, so loads and saves on one store can never interleave.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::store::{Config, LoadEvent};

/// What to load into a store.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
  /// An in-memory mapping.
  Inline(Map<String, Value>),
  /// A JSON file on disk.
  File(PathBuf),
  /// The file named by the store's [`ConfigEnv`](crate::env::ConfigEnv).
  Default,
}

impl From<Map<String, Value>> for Source {
  fn from(map: Map<String, Value>) -> Self {
    Source::Inline(map)
  }
}

impl From<PathBuf> for Source {
  fn from(path: PathBuf) -> Self {
    Source::File(path)
  }
}

impl From<&Path> for Source {
  fn from(path: &Path) -> Self {
    Source::File(path.to_path_buf())
  }
}

impl From<&str> for Source {
  fn from(path: &str) -> Self {
    Source::File(PathBuf::from(path))
  }
}

impl Config {
  /// Load a source and overlay it onto the store.
  pub async fn load(&mut self, source: impl Into<Source>) -> Result<(), ConfigError> {
    match source.into() {
      Source::Inline(map) => {
        self.load_object(map);
        Ok(())
      }
      Source::File(path) => self.load_file(&path).await,
      Source::Default => self.load_default().await,
    }
  }

  /// Blocking counterpart of [`Config::load`].
  pub fn load_sync(&mut self, source: impl Into<Source>) -> Result<(), ConfigError> {
    match source.into() {
      Source::Inline(map) => {
        self.load_object(map);
        Ok(())
      }
      Source::File(path) => self.load_file_sync(&path),
      Source::Default => self.load_default_sync(),
    }
  }

  /// Overlay an in-memory mapping. Never fails and needs no I/O.
  pub fn load_object(&mut self, contents: Map<String, Value>) {
    let written = self.apply(LoadEvent::object(Value::Object(contents)));
    debug!(keys = written, "loaded inline config");
  }

  /// Read, parse and overlay a JSON file.
  ///
  /// On failure the store is left unchanged.
  pub async fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let content = tokio::fs::read(path)
      .await
      .map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
      })?;
    self.apply_file(path, &content)
  }

  /// Blocking counterpart of [`Config::load_file`].
  pub fn load_file_sync(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    self.apply_file(path, &content)
  }

  /// Load `{config_dir}/{environment}{instance_suffix}.json`.
  pub async fn load_default(&mut self) -> Result<(), ConfigError> {
    let path = self.env().default_path();
    self.load_file(&path).await
  }

  /// Blocking counterpart of [`Config::load_default`].
  pub fn load_default_sync(&mut self) -> Result<(), ConfigError> {
    let path = self.env().default_path();
    self.load_file_sync(&path)
  }

  /// Write the store to `path` as pretty-printed JSON.
  ///
  /// The store is locked while saving and the lock is released again on
  /// every exit path, including a failed write.
  pub async fn save(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let guard = SaveLock::acquire(self);
    let content = guard.to_pretty_json()?;
    tokio::fs::write(path, content)
      .await
      .map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
      })?;
    drop(guard);

    debug!(path = %path.display(), "saved config");
    Ok(())
  }

  /// Blocking counterpart of [`Config::save`].
  pub fn save_sync(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let guard = SaveLock::acquire(self);
    let content = guard.to_pretty_json()?;
    std::fs::write(path, content).map_err(|source| ConfigError::Write {
      path: path.to_path_buf(),
      source,
    })?;
    drop(guard);

    debug!(path = %path.display(), "saved config");
    Ok(())
  }

  /// Serialize the store with two-space indentation.
  pub fn to_pretty_json(&self) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(self.all()).map_err(ConfigError::Serialize)
  }

  /// Parse raw file bytes and overlay them. Invalid UTF-8 is a parse error.
  fn apply_file(&mut self, path: &Path, content: &[u8]) -> Result<(), ConfigError> {
    let parsed: Value = serde_json::from_slice(content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    if !(parsed.is_object() || parsed.is_array()) {
      warn!(path = %path.display(), "config file holds a scalar, no keys loaded");
    }

    let written = self.apply(LoadEvent::file(path, parsed));
    debug!(path = %path.display(), keys = written, "loaded config file");
    Ok(())
  }
}

/// Holds the store locked for the duration of a save.
///
/// Dropping the guard restores the lock state the store had before, so a
/// store the caller locked stays locked and an unlocked one is released.
struct SaveLock<'a> {
  config: &'a mut Config,
  was_locked: bool,
}

impl<'a> SaveLock<'a> {
  fn acquire(config: &'a mut Config) -> Self {
    let was_locked = config.is_locked();
    config.lock();
    Self { config, was_locked }
  }
}

impl Deref for SaveLock<'_> {
  type Target = Config;

  fn deref(&self) -> &Config {
    self.config
  }
}

impl Drop for SaveLock<'_> {
  fn drop(&mut self) {
    if !self.was_locked {
      self.config.unlock();
    }
  }
}
