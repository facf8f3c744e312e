// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Values carried from one response into later requests.
//!
//! A path is a dot separated list of object keys; a numeric segment indexes
//! into an array. Missing keys and `null` leaves count as "not available".
use crate::request::Request;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Store the value found at `path` under the parameter name `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
  pub path: String,
  pub key: String,
}

impl FieldRule {
  pub fn new(path: impl Into<String>, key: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      key: key.into(),
    }
  }
}

/// Follows `path` through `value`.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
  if path.is_empty() {
    return None;
  }

  let mut current = value;
  for segment in path.split('.') {
    current = match current {
      Value::Object(map) => map.get(segment)?,
      Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
      _ => return None,
    };
  }

  (!current.is_null()).then_some(current)
}

/// Like [`lookup`], but a list result is searched element by element and
/// the last element yielding a value wins. Paths that start with an index
/// address the list directly.
pub fn extract<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
  match value {
    Value::Array(items) if !starts_with_index(path) => {
      items.iter().rev().find_map(|item| lookup(item, path))
    }
    _ => lookup(value, path),
  }
}

fn starts_with_index(path: &str) -> bool {
  path
    .split('.')
    .next()
    .is_some_and(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))
}

/// Per-bot cache of propagated values, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropagatedValues(HashMap<String, Value>);

impl PropagatedValues {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
    self.0.insert(key.into(), value)
  }

  pub fn clear(&mut self) {
    self.0.clear();
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
    self.0.iter()
  }

  /// Stores every value the rules find in `result`. Returns how many were
  /// stored.
  pub fn absorb(&mut self, result: &Value, rules: &[FieldRule]) -> usize {
    let mut stored = 0;
    for rule in rules {
      match extract(result, &rule.path) {
        Some(value) => {
          debug!(path = %rule.path, key = %rule.key, "Propagating value");
          self.0.insert(rule.key.clone(), value.clone());
          stored += 1;
        }
        None => debug!(path = %rule.path, "Value not available"),
      }
    }
    stored
  }

  /// Overwrites the parameters of `request` that have a cached value.
  pub fn apply(&self, request: &mut Request) -> usize {
    let mut applied = 0;
    for (key, value) in &self.0 {
      if request.set_param(key, value.clone()) {
        applied += 1;
      }
    }
    applied
  }
}
