//! Re-rendering of JSON-shaped text as indented, style-tagged display text.
use crate::{Style, Styled};
/// Spaces per nesting level.
const TAB_STOP: &str = "    ";
/// Scanner state.
///
/// `InVerbatim` copies text through unchanged until the closing `}` and then
/// resumes the recorded state, so a `${...}` fragment can sit inside a string
/// without disturbing it.
#[derive(Clone, Debug, Eq, PartialEq)]
enum State {
  /// Inside a quoted string value.
  InString,
  /// Inside an unquoted literal token.
  InValueToken,
  /// Inside a `${...}` fragment.
  InVerbatim(Box<State>),
  /// Before the first `{`, or after the structure has closed.
  PrefixText,
  /// Between tokens inside the structure.
  Structural,
}
/// Character class of key names and unquoted literals.
fn is_token_char(ch: char) -> bool {
  ch == '_' || ch == '$' || ch.is_ascii_alphanumeric()
}
/// Formats JSON-shaped text for console display.
///
/// Text before the first `{` and after the closing brace passes through
/// unstyled, nesting is re-indented four spaces per level, key quotes are
/// dropped, string quotes become single quotes, and `${...}` fragments are
/// copied verbatim. Unbalanced input yields best-effort output; the scanner
/// has no validation phase.
#[must_use]
pub fn logify(text: &str) -> Styled {
  Scanner::from(text).scan()
}
/// Strips the quotes from key names, leaving value strings quoted.
///
/// Scans backward once: a quoted run immediately left of a `:` is a key.
fn unquote_keys(text: &str) -> Vec<char> {
  let mut out: Vec<char> = Vec::with_capacity(text.len());
  let mut in_key = false;
  let mut in_key_name = false;
  let mut in_string = false;
  for ch in text.chars().rev() {
    if in_string {
      if ch == '"' {
        in_string = false;
      }
      out.push(ch);
    } else if in_key_name {
      if ch == '"' {
        in_key_name = false;
        in_key = false;
      } else {
        out.push(ch);
      }
    } else if in_key {
      if ch == '"' {
        in_key_name = true;
      } else {
        out.push(ch);
      }
    } else {
      if ch == ':' {
        in_key = true;
      } else if ch == '"' {
        in_string = true;
      }
      out.push(ch);
    }
  }
  out.reverse();
  out
}
/// Single left-to-right pass over the key-unquoted text.
struct Scanner {
  depth: usize,
  line_empty: bool,
  out: Styled,
  pos: usize,
  source: Vec<char>,
  state: State,
  token_style: Style,
}
impl Scanner {
  /// Character at `offset` past the cursor.
  fn at(&self, offset: usize) -> Option<char> {
    self.source.get(self.pos + offset).copied()
  }
  /// Emits a newline plus the current indentation, once per line with
  /// content.
  fn break_line(&mut self) {
    if !self.line_empty {
      let mut text = String::from("\n");
      for _ in 0..self.depth {
        text.push_str(TAB_STOP);
      }
      self.out.push(Style::Structure, &text);
      self.line_empty = true;
    }
  }
  /// Style for characters copied through in the current state.
  fn copy_style(&self) -> Style {
    match self.state {
      State::InString => Style::Str,
      State::InValueToken => self.token_style,
      State::InVerbatim(_) | State::PrefixText | State::Structural => Style::Plain,
    }
  }
  fn emit(&mut self, style: Style, text: &str) {
    self.out.push(style, text);
  }
  fn emit_char(&mut self, style: Style, ch: char) {
    let mut buf = [0u8; 4];
    self.out.push(style, ch.encode_utf8(&mut buf));
  }
  fn from(text: &str) -> Self {
    Self {
      depth: 0,
      line_empty: true,
      out: Styled::default(),
      pos: 0,
      source: unquote_keys(text),
      state: State::PrefixText,
      token_style: Style::Value,
    }
  }
  /// Is the cursor inside a string, counting a verbatim fragment opened
  /// within one.
  fn in_string(&self) -> bool {
    match &self.state {
      State::InString => true,
      State::InVerbatim(resume) => **resume == State::InString,
      State::InValueToken | State::PrefixText | State::Structural => false,
    }
  }
  /// Decides whether the token starting at the cursor is a key or a literal
  /// value: a token whose next structural character is `:` names a key.
  fn lookahead_style(&self) -> Style {
    let mut offset = 0;
    while self.at(offset).is_some_and(is_token_char) {
      offset += 1;
    }
    while self.at(offset) == Some(' ') {
      offset += 1;
    }
    if self.at(offset) == Some(':') { Style::Key } else { Style::Value }
  }
  fn scan(mut self) -> Styled {
    while let Some(ch) = self.at(0) {
      self.step(ch);
    }
    self.out
  }
  /// One scan step; the rule order matches the precedence contract.
  fn step(&mut self, ch: char) {
    // Literal backslash pairs survive every mode untouched.
    if ch == '\\' && self.at(1) == Some('\\') {
      self.emit(self.copy_style(), "\\\\");
      self.pos += 2;
      return;
    }
    // A `\n` escape renders as a real line break outside of strings.
    if ch == '\\' && self.at(1) == Some('n') && !self.in_string() {
      self.break_line();
      self.line_empty = false;
      self.pos += 2;
      return;
    }
    if let State::InVerbatim(resume) = &self.state {
      let resume = (**resume).clone();
      self.emit_char(Style::Plain, ch);
      if ch == '}' {
        self.state = resume;
      }
      self.pos += 1;
      return;
    }
    if ch == '$' && self.at(1) == Some('{') {
      self.emit(Style::Plain, "$");
      self.state = State::InVerbatim(Box::new(self.state.clone()));
      self.pos += 1;
      return;
    }
    if self.state == State::PrefixText && ch == '{' {
      // Reprocess the brace as the first structural character.
      self.state = State::Structural;
      return;
    }
    if self.state == State::InValueToken {
      if is_token_char(ch) {
        self.emit_char(self.token_style, ch);
        self.pos += 1;
      } else {
        // Reprocess the character outside of the token.
        self.state = State::Structural;
      }
      return;
    }
    if self.state == State::InString {
      if ch == '"' {
        self.emit(Style::Str, "'");
        self.state = State::Structural;
      } else {
        self.emit_char(Style::Str, ch);
      }
      self.pos += 1;
      return;
    }
    if self.state == State::PrefixText {
      self.emit_char(Style::Plain, ch);
      self.line_empty = false;
      self.pos += 1;
      return;
    }
    self.structural(ch);
    self.pos += 1;
  }
  /// Structural dispatch once past the prefix.
  fn structural(&mut self, ch: char) {
    match ch {
      '{' | '[' => {
        self.break_line();
        self.emit_char(Style::Structure, ch);
        self.line_empty = false;
        self.depth += 1;
        self.break_line();
      }
      '}' => {
        self.depth = self.depth.saturating_sub(1);
        self.break_line();
        self.emit(Style::Structure, "}");
        self.line_empty = false;
        if self.depth == 0 {
          // Anything after the closing brace is trailing free-form text.
          self.state = State::PrefixText;
        }
      }
      ']' => {
        self.depth = self.depth.saturating_sub(1);
        self.break_line();
        self.emit(Style::Structure, "]");
        self.line_empty = false;
      }
      ',' => {
        self.emit(Style::Structure, ",");
        self.break_line();
        self.line_empty = false;
      }
      ':' => {
        // The value lead-in suppresses the next line break so composites
        // open on the same line as their key.
        self.emit(Style::Structure, ": ");
        self.line_empty = true;
      }
      '"' => {
        self.emit(Style::Str, "'");
        self.line_empty = false;
        self.state = State::InString;
      }
      ' ' => self.line_empty = false,
      token if is_token_char(token) => {
        self.token_style = self.lookahead_style();
        self.emit_char(self.token_style, token);
        self.line_empty = false;
        self.state = State::InValueToken;
      }
      _ => {}
    }
  }
}
#[cfg(test)]
mod tests {
  use super::*;
  #[test]
  fn indents_four_spaces_per_level() {
    let out = logify("{\"a\":1,\"b\":[true,null]}");
    assert_eq!(out.plain(), "{\n    a: 1,\n    b: [\n        true,\n        null\n    ]\n}");
  }
  #[test]
  fn unquotes_keys_but_not_values() {
    let out = logify("{\"name\":\"svc\"}");
    assert_eq!(out.plain(), "{\n    name: 'svc'\n}");
  }
  #[test]
  fn prefix_and_trailing_text_pass_through() {
    let out = logify("note: {\"a\":1} done");
    assert_eq!(out.plain(), "note: \n{\n    a: 1\n} done");
  }
  #[test]
  fn verbatim_fragment_is_untouched() {
    let out = logify("{\"msg\":\"val ${x+1} end\"}");
    assert_eq!(out.plain(), "{\n    msg: 'val ${x+1} end'\n}");
  }
  #[test]
  fn newline_escape_breaks_the_line() {
    let out = logify("first\\nsecond {\"a\":1}");
    assert_eq!(out.plain(), "first\nsecond \n{\n    a: 1\n}");
  }
  #[test]
  fn newline_escape_inside_string_is_text() {
    let out = logify("{\"a\":\"x\\ny\"}");
    assert_eq!(out.plain(), "{\n    a: 'x\\ny'\n}");
  }
  #[test]
  fn double_backslash_is_copied() {
    let out = logify("{\"a\":\"x\\\\y\"}");
    assert_eq!(out.plain(), "{\n    a: 'x\\\\y'\n}");
  }
  #[test]
  fn nested_objects_open_on_the_key_line() {
    let out = logify("{\"o\":{\"k\":\"v\"}}");
    assert_eq!(out.plain(), "{\n    o: {\n        k: 'v'\n    }\n}");
  }
  #[test]
  fn keys_and_literals_carry_distinct_styles() {
    let out = logify("{\"a\":1}");
    let styles: Vec<(Style, &str)> =
      out.segments().iter().map(|seg| (seg.style, seg.text.as_str())).collect();
    assert!(styles.contains(&(Style::Key, "a")));
    assert!(styles.contains(&(Style::Value, "1")));
    assert!(styles.contains(&(Style::Structure, ": ")));
  }
  #[test]
  fn string_values_carry_the_string_style() {
    let out = logify("{\"k\":\"text\"}");
    let texts: Vec<&str> = out
      .segments()
      .iter()
      .filter(|seg| seg.style == Style::Str)
      .map(|seg| seg.text.as_str())
      .collect();
    assert_eq!(texts.concat(), "'text'");
  }
  #[test]
  fn unbalanced_input_is_best_effort() {
    let out = logify("{\"a\":1}}}");
    assert_eq!(out.plain(), "{\n    a: 1\n}}}");
  }
  #[test]
  fn empty_input_yields_empty_output() {
    assert_eq!(logify("").plain(), "");
  }
}
