//! Conversion of a `Value` graph into JSON-shaped text.
use {
  crate::{Map, Value, time_stamp},
  std::rc::Rc,
};
/// Placeholder emitted when a composite is one of its own ancestors.
const SELF_REFERENCE: &str = "\"<self-reference>\"";
/// Serializes a value graph as JSON-shaped text.
///
/// Every value type has a defined rendering and reference cycles collapse to
/// `"<self-reference>"`, so the conversion never fails and terminates on any
/// finite graph. Mapping keys are visited in insertion order.
#[must_use]
pub fn serialize(value: &Value) -> String {
  write_value(value, &mut Vec::new())
}
/// Fallback rendering for non-composite values.
fn scalar(value: &Value) -> String {
  match value {
    Value::BigInt(int) => int.to_string(),
    Value::Bool(flag) => flag.to_string(),
    Value::Function(name) => format!("\"\u{192} {name}\""),
    Value::Null => String::from("null"),
    Value::Number(number) => number.to_string(),
    Value::String(text) => {
      // Strings that already look like embedded JSON pass through with one
      // escaped quote unescaped instead of being re-quoted.
      if text.starts_with('{') && text.ends_with('}') {
        text.replacen("\\\"", "\"", 1)
      } else {
        format!("\"{text}\"")
      }
    }
    Value::Symbol => String::from("\"<symbol>\""),
    Value::Undefined => String::from("\"<undefined>\""),
    Value::Array(_) | Value::Date(_) | Value::File(_) | Value::Object(_) => String::new(),
  }
}
/// Writes a mapping's entries in insertion order.
fn write_entries(map: &Map, ancestors: &mut Vec<*const ()>) -> String {
  let entries: Vec<String> = map
    .iter()
    .map(|(key, value)| format!("\"{key}\":{}", write_value(value, ancestors)))
    .collect();
  format!("{{{}}}", entries.join(","))
}
/// Recursive descent over the value graph with an ancestor stack for cycle
/// detection; composites are pushed on entry and popped on exit.
fn write_value(value: &Value, ancestors: &mut Vec<*const ()>) -> String {
  match value {
    Value::Array(list) => {
      let identity = Rc::as_ptr(list).cast::<()>();
      if ancestors.contains(&identity) {
        return String::from(SELF_REFERENCE);
      }
      ancestors.push(identity);
      let items: Vec<String> =
        list.borrow().iter().map(|item| write_value(item, ancestors)).collect();
      ancestors.pop();
      format!("[{}]", items.join(","))
    }
    Value::Date(instant) => format!("\"{}\"", time_stamp(*instant, true)),
    Value::File(file) => {
      // A file handle is opaque; show its name, size and timestamp instead.
      let mut projected = Map::default();
      projected.insert("name", Value::String(file.name.clone()));
      projected.insert("size", Value::Number(file.size));
      projected.insert("date", Value::Date(file.date));
      write_entries(&projected, ancestors)
    }
    Value::Object(map) => {
      let identity = Rc::as_ptr(map).cast::<()>();
      if ancestors.contains(&identity) {
        return String::from(SELF_REFERENCE);
      }
      ancestors.push(identity);
      let text = write_entries(&map.borrow(), ancestors);
      ancestors.pop();
      text
    }
    Value::BigInt(_)
    | Value::Bool(_)
    | Value::Function(_)
    | Value::Null
    | Value::Number(_)
    | Value::String(_)
    | Value::Symbol
    | Value::Undefined => scalar(value),
  }
}
#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::FileInfo,
    chrono::TimeZone,
    std::{cell::RefCell, rc::Rc},
  };
  fn sample_map() -> Map {
    let mut map = Map::default();
    map.insert("a", Value::from(1.0));
    map.insert("b", Value::array(vec![Value::from(true), Value::Null]));
    map
  }
  #[test]
  fn nested_composites_keep_order() {
    assert_eq!(serialize(&Value::object(sample_map())), "{\"a\":1,\"b\":[true,null]}");
  }
  #[test]
  fn scalar_placeholders() {
    assert_eq!(serialize(&Value::Undefined), "\"<undefined>\"");
    assert_eq!(serialize(&Value::Symbol), "\"<symbol>\"");
    assert_eq!(serialize(&Value::Function(String::from("f"))), "\"\u{192} f\"");
    assert_eq!(serialize(&Value::Null), "null");
  }
  #[test]
  fn big_integers_render_unquoted() {
    assert_eq!(serialize(&Value::BigInt(170_141_183_460_469_231_731_687_303_715)), "170141183460469231731687303715");
    assert_eq!(serialize(&Value::BigInt(-42)), "-42");
  }
  #[test]
  fn embedded_json_string_passes_through() {
    // One level of escaped quotes is unescaped (first occurrence), and the
    // text is not re-quoted.
    let embedded = Value::String(String::from("{\\\"k\\\":1}"));
    assert_eq!(serialize(&embedded), "{\"k\\\":1}");
  }
  #[test]
  fn placeholder_keys_are_kept() {
    let mut map = Map::default();
    map.insert("f", Value::Function(String::from("handler")));
    map.insert("s", Value::Symbol);
    map.insert("u", Value::Undefined);
    assert_eq!(
      serialize(&Value::object(map)),
      "{\"f\":\"\u{192} handler\",\"s\":\"<symbol>\",\"u\":\"<undefined>\"}"
    );
  }
  #[test]
  fn direct_cycle_collapses() {
    let shared = Rc::new(RefCell::new(Map::default()));
    shared.borrow_mut().insert("x", Value::from(1.0));
    shared.borrow_mut().insert("me", Value::Object(Rc::clone(&shared)));
    assert_eq!(serialize(&Value::Object(shared)), "{\"x\":1,\"me\":\"<self-reference>\"}");
  }
  #[test]
  fn transitive_cycle_collapses() {
    let outer = Rc::new(RefCell::new(Map::default()));
    let inner = Rc::new(RefCell::new(Map::default()));
    inner.borrow_mut().insert("back", Value::Object(Rc::clone(&outer)));
    outer.borrow_mut().insert("inner", Value::Object(inner));
    assert_eq!(
      serialize(&Value::Object(outer)),
      "{\"inner\":{\"back\":\"<self-reference>\"}}"
    );
  }
  #[test]
  fn sibling_sharing_is_not_a_cycle() {
    let shared = Rc::new(RefCell::new(Map::default()));
    shared.borrow_mut().insert("n", Value::from(7.0));
    let mut map = Map::default();
    map.insert("first", Value::Object(Rc::clone(&shared)));
    map.insert("second", Value::Object(shared));
    assert_eq!(serialize(&Value::object(map)), "{\"first\":{\"n\":7},\"second\":{\"n\":7}}");
  }
  #[test]
  fn cyclic_array_terminates() {
    let list = Rc::new(RefCell::new(Vec::new()));
    list.borrow_mut().push(Value::from(0.0));
    list.borrow_mut().push(Value::Array(Rc::clone(&list)));
    assert_eq!(serialize(&Value::Array(list)), "[0,\"<self-reference>\"]");
  }
  #[test]
  fn dates_render_as_quoted_local_stamps() {
    let instant = chrono::Local.with_ymd_and_hms(2024, 1, 5, 8, 3, 7).unwrap();
    let text = serialize(&Value::Date(instant.with_timezone(&chrono::Utc)));
    assert!(text.starts_with("\"2024-Jan-05 Fri 08:03:07.000"));
    assert!(text.ends_with(" Local\""));
  }
  #[test]
  fn files_project_to_plain_composites() {
    let instant = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let file =
      Value::File(FileInfo { date: instant, name: String::from("trace.log"), size: 2048.0 });
    let text = serialize(&file);
    assert!(text.starts_with("{\"name\":\"trace.log\",\"size\":2048,\"date\":\""));
    assert!(text.ends_with(" Local\"}"));
  }
}
