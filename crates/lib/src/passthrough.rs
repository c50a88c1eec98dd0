//! Minimal config holder without overlay, files or a lock.
//!
//! Loading replaces the whole mapping. Use [`crate::Config`] when sources
//! need to be layered or persisted.

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Passthrough {
  data: Map<String, Value>,
}

impl Passthrough {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replace the whole mapping with `data`.
  pub fn load(&mut self, data: Map<String, Value>) {
    self.data = data;
  }

  pub fn all(&self) -> &Map<String, Value> {
    &self.data
  }

  pub fn get(&self, path: &str) -> Option<&Value> {
    path::get(&self.data, path)
  }

  pub fn has(&self, path: &str) -> bool {
    path::has(&self.data, path)
  }

  /// Assign `value` at `path`; `None` is ignored.
  pub fn set(&mut self, path: &str, value: impl Into<Option<Value>>) -> Result<(), ConfigError> {
    match value.into() {
      Some(value) => path::set(&mut self.data, path, value),
      None => Ok(()),
    }
  }

  pub fn delete(&mut self, path: &str) -> Option<Value> {
    path::delete(&mut self.data, path)
  }
}

impl From<Map<String, Value>> for Passthrough {
  fn from(data: Map<String, Value>) -> Self {
    Self { data }
  }
}
