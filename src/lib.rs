//! Console log formatting: a cycle-safe value serializer, the "logify"
//! pretty-printer, severity-classified console entries, and parallel-array
//! list helpers.
//!
//! ```
//! use logify::Logger;
//! let logger = Logger::from_env();
//! logger.info("service started", "server.rs");
//! ```
mod list;
mod logger;
mod logify;
mod serialize;
mod style;
mod timestamp;
mod utility;
mod value;
pub use crate::{
  list::{call, swap},
  logger::init,
  logify::logify,
  serialize::serialize,
  timestamp::time_stamp,
  utility::{extract_id, simplify, simplify_value},
};
use {
  chrono::{DateTime, Utc},
  std::{cell::RefCell, env, fs, path::Path, process::ExitCode, rc::Rc},
};
/// File metadata rendered in place of an opaque file handle.
#[derive(Clone, Debug)]
pub struct FileInfo {
  /// Last-modified instant.
  pub date: DateTime<Utc>,
  /// File name.
  pub name: String,
  /// Size in bytes.
  pub size: f64,
}
/// A message the logger can render: plain text or a value graph.
pub trait Loggable {
  /// Multi-line display form embedded in the console entry.
  fn display_text(&self) -> String;
  /// Single-line form used in the returned status string.
  fn status_text(&self) -> String;
}
/// Console logger; appearance and verbosity come from the environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logger {
  /// Release stage of the host application.
  mode: Mode,
  /// Severity color theme.
  theme: Theme,
}
/// Keyed mapping that preserves insertion order.
#[derive(Clone, Debug, Default)]
pub struct Map {
  /// Key-value pairs in insertion order.
  entries: Vec<(String, Value)>,
}
/// Release stage of the host application.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
  /// Every severity is logged.
  #[default]
  Development,
  /// `Debug` entries are suppressed.
  Production,
}
/// A run of display text sharing one style.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
  /// Style tag of the run.
  pub style: Style,
  /// Text of the run.
  pub text: String,
}
/// Severity classification of a log entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
  /// Diagnostic detail.
  Debug,
  /// Recoverable failure.
  Error,
  /// Caught exception.
  Exception,
  /// Routine event.
  Info,
  /// Confirmation.
  Success,
  /// Unrecognized severity label.
  Unknown,
  /// Abnormal but tolerable condition.
  Warn,
}
/// Style tag attached to a run of display text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
  /// Mapping key.
  Key,
  /// Unstyled text: prefix and trailing free-form text, verbatim fragments.
  Plain,
  /// Quoted string value, including its quotes.
  Str,
  /// Structural punctuation and indentation.
  Structure,
  /// Unquoted literal: number, boolean, null.
  Value,
}
/// Display text broken into styled runs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Styled {
  /// Runs in display order.
  segments: Vec<Segment>,
}
/// Color theme for severity styling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
  /// Bright foreground colors.
  #[default]
  Dark,
  /// Standard foreground colors.
  Light,
}
/// An in-memory datum the serializer can render.
///
/// Composites are reference-shared so a value graph can contain cycles; the
/// serializer detects them by allocation identity.
#[derive(Clone, Debug, Default)]
pub enum Value {
  /// Ordered list.
  Array(Rc<RefCell<Vec<Value>>>),
  /// Arbitrary-precision integer, rendered as decimal text.
  BigInt(i128),
  /// Boolean.
  Bool(bool),
  /// Timestamp, rendered as a quoted local time.
  Date(DateTime<Utc>),
  /// File handle, projected to `{name, size, date}`.
  File(FileInfo),
  /// Function reference carrying the function name.
  Function(String),
  /// Null.
  #[default]
  Null,
  /// Floating-point number.
  Number(f64),
  /// Keyed mapping.
  Object(Rc<RefCell<Map>>),
  /// String.
  String(String),
  /// Symbolic reference.
  Symbol,
  /// Missing value.
  Undefined,
}
/// Pretty-prints a JSON-shaped log text on stdout with ANSI styling.
///
/// The first CLI argument names a file to read; an argument that names no
/// file is taken as the text itself.
///
/// # Example
/// ```sh
/// logify '{"status":"up","ports":[80,443]}'
/// ```
#[inline]
#[must_use]
pub fn run() -> ExitCode {
  let args: Vec<String> = env::args().collect();
  let Some(program_name) = args.first() else {
    eprintln!("Failed to get the program name.");
    return ExitCode::FAILURE;
  };
  let Some(input) = args.get(1) else {
    eprintln!("Usage: {program_name} <json_text_or_file>");
    return ExitCode::FAILURE;
  };
  let text = if Path::new(input).is_file() {
    match fs::read_to_string(input) {
      Ok(content) => content,
      Err(err) => {
        eprintln!("Failed to read '{input}': {err}");
        return ExitCode::FAILURE;
      }
    }
  } else {
    input.clone()
  };
  println!("{}", logify(&text).ansi());
  ExitCode::SUCCESS
}
