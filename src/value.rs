//! Construction and access for `Value` and `Map`.
use {
  crate::{Map, Value},
  std::{cell::RefCell, rc::Rc},
};
impl Map {
  /// Returns the first value stored under `key` (if any).
  #[must_use]
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
  }
  /// Inserts a key-value pair, allowing duplicates.
  pub fn insert(&mut self, key: impl Into<String>, value: Value) {
    self.entries.push((key.into(), value));
  }
  /// Is `Map` empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
  /// Iterate in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
    self.entries.iter()
  }
  /// Number of entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }
}
impl Value {
  /// Wraps a list in a shared composite.
  #[must_use]
  pub fn array(items: Vec<Value>) -> Self {
    Value::Array(Rc::new(RefCell::new(items)))
  }
  /// Is this a composite (list or mapping).
  #[must_use]
  pub fn is_composite(&self) -> bool {
    matches!(self, Value::Array(_) | Value::Object(_))
  }
  /// Wraps a mapping in a shared composite.
  #[must_use]
  pub fn object(map: Map) -> Self {
    Value::Object(Rc::new(RefCell::new(map)))
  }
}
impl From<bool> for Value {
  fn from(flag: bool) -> Self {
    Value::Bool(flag)
  }
}
impl From<f64> for Value {
  fn from(number: f64) -> Self {
    Value::Number(number)
  }
}
impl From<&str> for Value {
  fn from(text: &str) -> Self {
    Value::String(text.to_owned())
  }
}
impl From<String> for Value {
  fn from(text: String) -> Self {
    Value::String(text)
  }
}
