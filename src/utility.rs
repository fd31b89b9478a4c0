//! Text scanners shared by the log formatting routines.
use crate::{Value, serialize};
/// Extracts the first alphanumeric run containing both letters and digits.
///
/// A single lowercase letter between two uppercase letters counts as a digit
/// placeholder, so `PxCy` matches like `P1C2`. When no inner run qualifies,
/// the trailing run is returned as scanned.
#[must_use]
pub fn extract_id(name: &str) -> String {
  let chars: Vec<char> = name.chars().collect();
  let mut id = String::new();
  let mut in_run = false;
  let mut has_letters = false;
  let mut has_numbers = false;
  let mut start = 0;
  for (index, &ch) in chars.iter().enumerate() {
    let is_number = ch.is_ascii_digit();
    let is_upper = ch.is_ascii_uppercase();
    let is_lower = ch.is_ascii_lowercase();
    if is_number || is_upper || is_lower {
      if !in_run {
        in_run = true;
        start = index;
      }
      id.push(ch);
      has_letters = has_letters || is_upper || is_lower;
      has_numbers = has_numbers || is_number;
      if is_lower
        && index.checked_sub(1).and_then(|left| chars.get(left)).is_some_and(|left| left.is_ascii_uppercase())
        && chars.get(index + 1).is_some_and(|right| right.is_ascii_uppercase())
      {
        has_numbers = true;
      }
    } else if in_run && has_letters && has_numbers {
      return chars[start..index].iter().collect();
    } else {
      id.clear();
      in_run = false;
      has_letters = false;
      has_numbers = false;
    }
  }
  id
}
/// Flattens display or JSON text to a single line.
///
/// Braces, brackets and quotes drop out, whitespace collapses, ANSI escape
/// sequences are skipped and `:`/`,` keep a single trailing space.
#[must_use]
pub fn simplify(text: &str) -> String {
  let mut out = String::new();
  let mut in_escape = false;
  let mut in_value = false;
  let mut current = ' ';
  let mut previous;
  for ch in text.chars() {
    previous = current;
    current = ch;
    if ch == '\u{1b}' {
      in_escape = true;
      continue;
    }
    if in_escape {
      if ch.is_ascii_alphabetic() {
        in_escape = false;
      }
      continue;
    }
    match ch {
      '{' | '}' | '[' | ']' => {
        in_value = false;
        current = ' ';
      }
      '"' => current = ' ',
      ':' => {
        out.push(':');
        if !in_value {
          out.push(' ');
          current = ' ';
        }
        in_value = true;
      }
      ',' => {
        out.push_str(", ");
        current = ' ';
        in_value = false;
      }
      '\n' | '\t' => current = ' ',
      ' ' => {
        if previous != ' ' {
          out.push(' ');
        }
      }
      _ => out.push(ch),
    }
  }
  out
}
/// Single-line rendering of a value graph.
#[must_use]
pub fn simplify_value(value: &Value) -> String {
  simplify(&serialize(value))
}
