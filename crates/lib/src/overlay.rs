//! Shallow overlay of incoming configuration onto an existing mapping.
//!
//! Each incoming top-level key replaces the existing value wholesale; nested
//! objects are not merged recursively. Keys missing from the incoming side are
//! left alone, and keys whose incoming value is `None` are skipped.

use serde_json::{Map, Value};

/// Writes every defined incoming entry into `existing`.
///
/// Accepts any iterator of `(key, value)` pairs where the value converts into
/// `Option<Value>`, so both a `serde_json::Map` and a map holding explicit
/// `None` entries can be overlaid. Returns the number of keys written.
pub fn overlay<I, V>(existing: &mut Map<String, Value>, incoming: I) -> usize
where
  I: IntoIterator<Item = (String, V)>,
  V: Into<Option<Value>>,
{
  let mut written = 0;
  for (key, value) in incoming {
    if let Some(value) = value.into() {
      existing.insert(key, value);
      written += 1;
    }
  }
  written
}

/// Overlays a parsed JSON document of any shape.
///
/// Objects contribute their keys and arrays their indices (`"0"`, `"1"`, ...).
/// Scalars and `null` have no keys and leave `existing` untouched.
pub fn overlay_value(existing: &mut Map<String, Value>, incoming: &Value) -> usize {
  match incoming {
    Value::Object(map) => overlay(existing, map.iter().map(|(key, value)| (key.clone(), value.clone()))),
    Value::Array(items) => overlay(
      existing,
      items.iter().enumerate().map(|(index, value)| (index.to_string(), value.clone())),
    ),
    _ => 0,
  }
}
