//! Dotted-path access into nested JSON values.
//!
//! A path like `Object.Name` is split on `.` into key segments and walked from
//! the root mapping. Objects are indexed by key; arrays are indexed when the
//! segment is a non-negative decimal integer without leading zeros. A backslash escapes a literal
//! dot, so `a\.b` names the single key `a.b`.
//!
//! Absence is reported as `None`, which keeps "not found" distinct from a
//! present JSON `null`.

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Split a dotted path into its key segments.
///
/// Always yields at least one segment; the empty path is a single empty key.
pub fn segments(path: &str) -> Vec<String> {
  let mut out = Vec::new();
  let mut current = String::new();
  let mut chars = path.chars().peekable();

  while let Some(c) = chars.next() {
    match c {
      '\\' if chars.peek() == Some(&'.') => {
        current.push('.');
        chars.next();
      }
      '.' => out.push(std::mem::take(&mut current)),
      _ => current.push(c),
    }
  }
  out.push(current);

  out
}

/// Returns the value at `path`, or `None` if any segment is missing.
pub fn get<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
  let segs = segments(path);
  let (first, rest) = segs.split_first()?;

  let mut current = root.get(first.as_str())?;
  for seg in rest {
    current = child(current, seg)?;
  }
  Some(current)
}

/// Returns whether `path` resolves to a present value. Never mutates `root`.
pub fn has(root: &Map<String, Value>, path: &str) -> bool {
  get(root, path).is_some()
}

/// Assigns `value` at `path`, creating intermediate objects as needed.
///
/// Missing and `null` intermediate segments are replaced with empty objects.
/// Fails if an intermediate segment holds a string, number or bool, or if an
/// array is addressed with anything other than an index in `0..=len`
/// (`len` appends). On failure `root` is left unchanged.
pub fn set(root: &mut Map<String, Value>, path: &str, value: Value) -> Result<(), ConfigError> {
  let segs = segments(path);
  let Some((last, parents)) = segs.split_last() else {
    return Ok(());
  };

  let mut tree = Value::Object(std::mem::take(root));
  let result = assign_in(&mut tree, parents, last, path, value);
  if let Value::Object(map) = tree {
    *root = map;
  }
  result
}

/// Removes the value at `path` and returns it. No-op if the path is absent.
///
/// Array elements are removed by index, shifting later elements down.
pub fn delete(root: &mut Map<String, Value>, path: &str) -> Option<Value> {
  let segs = segments(path);
  let (last, parents) = segs.split_last()?;

  let Some((first, rest)) = parents.split_first() else {
    return root.shift_remove(last.as_str());
  };

  let mut parent = root.get_mut(first.as_str())?;
  for seg in rest {
    parent = child_mut(parent, seg)?;
  }

  match parent {
    Value::Object(map) => map.shift_remove(last.as_str()),
    Value::Array(items) => {
      let index = parse_index(last)?;
      (index < items.len()).then(|| items.remove(index))
    }
    _ => None,
  }
}

/// Parses an array index segment: plain ASCII digits, no leading zero.
fn parse_index(segment: &str) -> Option<usize> {
  if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  if segment.len() > 1 && segment.starts_with('0') {
    return None;
  }
  segment.parse().ok()
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
  match value {
    Value::Object(map) => map.get(segment),
    Value::Array(items) => items.get(parse_index(segment)?),
    _ => None,
  }
}

fn child_mut<'a>(value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
  match value {
    Value::Object(map) => map.get_mut(segment),
    Value::Array(items) => items.get_mut(parse_index(segment)?),
    _ => None,
  }
}

fn assign_in(tree: &mut Value, parents: &[String], last: &str, path: &str, value: Value) -> Result<(), ConfigError> {
  let mut current = tree;
  for seg in parents {
    current = descend_or_create(current, seg, path)?;
  }

  match current {
    Value::Object(map) => {
      map.insert(last.to_string(), value);
      Ok(())
    }
    Value::Array(items) => {
      let index = array_index(last, items.len(), path)?;
      if index == items.len() {
        items.push(value);
      } else {
        items[index] = value;
      }
      Ok(())
    }
    other => Err(not_a_container(path, last, other)),
  }
}

/// Steps into `segment`, creating an empty object there if it is missing or null.
fn descend_or_create<'a>(value: &'a mut Value, segment: &str, path: &str) -> Result<&'a mut Value, ConfigError> {
  let slot = match value {
    Value::Object(map) => map.entry(segment.to_string()).or_insert(Value::Null),
    Value::Array(items) => {
      let index = array_index(segment, items.len(), path)?;
      if index == items.len() {
        items.push(Value::Null);
      }
      &mut items[index]
    }
    other => return Err(not_a_container(path, segment, other)),
  };

  if slot.is_null() {
    *slot = Value::Object(Map::new());
  }
  if slot.is_object() || slot.is_array() {
    Ok(slot)
  } else {
    Err(not_a_container(path, segment, slot))
  }
}

fn array_index(segment: &str, len: usize, path: &str) -> Result<usize, ConfigError> {
  parse_index(segment)
    .filter(|index| *index <= len)
    .ok_or_else(|| ConfigError::InvalidIndex {
      path: path.to_string(),
      segment: segment.to_string(),
      len,
    })
}

fn not_a_container(path: &str, segment: &str, found: &Value) -> ConfigError {
  ConfigError::NotAContainer {
    path: path.to_string(),
    segment: segment.to_string(),
    found: type_name(found),
  }
}

fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "bool",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
