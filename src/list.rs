//! Parallel-array lookup helpers.
//!
//! Two same-length lists act as a lookup table: a key found in the first
//! selects the matching element of the second, and a missing key selects the
//! final element, the list's default.
use crate::{Logger, Severity};
/// Calls the function selected from `actions` by `key`, defaulting to the
/// final entry like [`swap`].
#[must_use]
pub fn call<K: PartialEq, R>(key: &K, keys: &[K], actions: &[&dyn Fn() -> R]) -> Option<R> {
  if keys.len() != actions.len() {
    report_mismatch(keys.len(), actions.len());
    return None;
  }
  match keys.iter().position(|candidate| candidate == key) {
    Some(index) => actions.get(index).map(|action| action()),
    None => actions.last().map(|action| action()),
  }
}
/// Swaps a key found in `keys` for the matching element of `values`.
///
/// Lists of unequal length are a caller error: the mismatch is logged and
/// `None` comes back.
#[must_use]
pub fn swap<'a, K: PartialEq, V>(key: &K, keys: &[K], values: &'a [V]) -> Option<&'a V> {
  if keys.len() != values.len() {
    report_mismatch(keys.len(), values.len());
    return None;
  }
  match keys.iter().position(|candidate| candidate == key) {
    Some(index) => values.get(index),
    None => values.last(),
  }
}
fn report_mismatch(keys: usize, values: usize) {
  let message = format!(
    "The 'keys' and 'values' lists are not the same length, \
     keys.len():{keys} != values.len():{values}"
  );
  let _ = Logger::from_env().log(message.as_str(), "list.rs", Severity::Error, None);
}
